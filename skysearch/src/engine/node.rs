/*
 * Created on Fri Jul 10 2026
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

use {super::frag::Fragment, crate::idx::AsKeyClone, crate::mem::TinySet};

/// A node in the fragment graph. The store owns the node; `parents` holds
/// non-owning handles to the nodes one character longer than this one. All
/// mutators run under the graph's write lock
#[derive(Debug)]
pub struct FragmentNode<T> {
    fragment: Fragment,
    items: TinySet<T>,
    parents: TinySet<Fragment>,
}

impl<T: AsKeyClone> FragmentNode<T> {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            fragment,
            items: TinySet::new(),
            parents: TinySet::new(),
        }
    }
    #[inline(always)]
    pub fn fragment(&self) -> &Fragment {
        &self.fragment
    }
    #[inline(always)]
    pub fn items(&self) -> &TinySet<T> {
        &self.items
    }
    #[inline(always)]
    pub fn parents(&self) -> &TinySet<Fragment> {
        &self.parents
    }
    pub fn add_item(&mut self, item: T) -> bool {
        self.items.insert(item)
    }
    pub fn remove_item(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }
    pub fn add_parent(&mut self, parent: Fragment) -> bool {
        self.parents.insert(parent)
    }
    pub fn remove_parent(&mut self, parent: &str) -> bool {
        self.parents.remove(parent)
    }
    /// A node with no items and no parents is unreferenced and must be
    /// collapsed out of the store
    pub fn is_orphan(&self) -> bool {
        self.items.is_empty() && self.parents.is_empty()
    }
}
