/*
 * Created on Mon Jul 06 2026
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
    collections::{
        hash_map::{Entry, Iter as StdMapIterKV, RandomState},
        HashMap as StdMap,
    },
    hash::{BuildHasher, Hash},
};

/// The default single-threaded index
pub type IndexST<K, V, S = RandomState> = StdMap<K, V, S>;

/// Any type implementing this trait can be used as a key inside engine structures
pub trait AsKey: Hash + Eq {
    /// Read the key
    fn read_key(&self) -> &Self;
}

impl<T: Hash + Eq + ?Sized> AsKey for T {
    fn read_key(&self) -> &Self {
        self
    }
}

/// If your T can be cloned/copied and implements [`AsKey`], then this trait will automatically be implemented
pub trait AsKeyClone: AsKey + Clone {
    /// Read the key and return a clone
    fn read_key_clone(&self) -> Self;
}

impl<T: AsKey + Clone + ?Sized> AsKeyClone for T {
    #[inline(always)]
    fn read_key_clone(&self) -> Self {
        Clone::clone(self)
    }
}

pub trait AsValue {
    fn read_value(&self) -> &Self;
}
impl<T: ?Sized> AsValue for T {
    fn read_value(&self) -> &Self {
        self
    }
}

/// Base spec for any index. Iterators have meaningless order
pub trait IndexBaseSpec: Sized {
    /// Initialize an empty instance of the index
    fn idx_init() -> Self;
}

/// An unordered single-threaded index
pub trait STIndex<K, V>: IndexBaseSpec {
    /// An iterator over the keys and values
    type IterKV<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;
    /// Clears all the entries in the STIndex
    fn st_clear(&mut self);
    /// Returns the number of entries
    fn st_len(&self) -> usize;
    /// Returns true if the entry was inserted successfully; returns false if the uniqueness constraint is
    /// violated
    fn st_insert(&mut self, key: K, val: V) -> bool
    where
        K: AsKeyClone,
        V: AsValue;
    fn st_contains<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Returns a reference to the value corresponding to the key, if it exists
    fn st_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Returns a mutable reference to the value corresponding to the key, if it exists
    fn st_get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Removes the entry and returns it, if it exists
    fn st_delete_return<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey;
    /// Returns an iterator over a tuple of keys and values
    fn st_iter_kv<'a>(&'a self) -> Self::IterKV<'a>;
}

impl<K, V, S> IndexBaseSpec for StdMap<K, V, S>
where
    S: BuildHasher + Default,
{
    fn idx_init() -> Self {
        StdMap::with_hasher(S::default())
    }
}

impl<K, V, S> STIndex<K, V> for StdMap<K, V, S>
where
    K: AsKey,
    V: AsValue,
    S: BuildHasher + Default,
{
    type IterKV<'a> = StdMapIterKV<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn st_clear(&mut self) {
        self.clear()
    }

    fn st_len(&self) -> usize {
        self.len()
    }

    fn st_insert(&mut self, key: K, val: V) -> bool {
        match self.entry(key) {
            Entry::Vacant(ve) => {
                ve.insert(val);
                true
            }
            _ => false,
        }
    }

    fn st_contains<Q>(&self, k: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.contains_key(k)
    }

    fn st_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.get(key)
    }

    fn st_get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.get_mut(key)
    }

    fn st_delete_return<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + AsKey,
    {
        self.remove(key)
    }

    fn st_iter_kv<'a>(&'a self) -> Self::IterKV<'a> {
        self.iter()
    }
}
