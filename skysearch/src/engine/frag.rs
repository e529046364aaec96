/*
 * Created on Thu Jul 09 2026
 *
 * This file is a part of Skysearch
 * Skysearch is a free and open-source in-memory quick-search engine written
 * by Sayan Nandan ("the Author") with the vision to provide instant,
 * incremental prefix and substring lookups over live datasets without
 * compromising on correctness under concurrency.
 *
 * Copyright (c) 2026, Sayan Nandan <ohsayan@outlook.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    sync::Arc,
};

/// An interned fragment string: a contiguous substring of a registered
/// keyword, doubling as the identity of a graph node. Clones share one
/// allocation, so handing a fragment to a parent set or the item registry
/// costs a refcount bump, and equality short-circuits on pointer identity
#[derive(Clone)]
pub struct Fragment {
    d: Arc<str>,
}

impl Fragment {
    pub fn new(s: &str) -> Self {
        Self { d: Arc::from(s) }
    }
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.d
    }
    /// The prefix child: this fragment minus its last character. `None` when
    /// the fragment is a single character (nothing left to decompose)
    pub fn prefix_child(&self) -> Option<&str> {
        let (idx, _) = self.d.char_indices().next_back()?;
        if idx == 0 {
            None
        } else {
            Some(&self.d[..idx])
        }
    }
    /// The suffix child: this fragment minus its first character. `None` when
    /// the fragment is a single character
    pub fn suffix_child(&self) -> Option<&str> {
        let mut chars = self.d.chars();
        chars.next()?;
        let rest = chars.as_str();
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }
    #[cfg(test)]
    pub fn shares_allocation(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.d, &other.d)
    }
}

impl PartialEq for Fragment {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.d, &other.d) || self.d == other.d
    }
}

impl Eq for Fragment {}

impl PartialEq<str> for Fragment {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl Hash for Fragment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // must agree with the `Borrow<str>` impl
        self.as_str().hash(state)
    }
}

impl Borrow<str> for Fragment {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Deref for Fragment {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}
