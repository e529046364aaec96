/*
 * Created on Tue Jul 07 2026
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

use super::TinySet;

#[test]
fn empty() {
    let ts = TinySet::<u8>::new();
    assert_eq!(ts.len(), 0);
    assert!(ts.is_empty());
    assert!(!ts.contains(&0));
}

#[test]
fn insert_dedup() {
    let mut ts = TinySet::new();
    assert!(ts.insert("hello"));
    assert!(ts.insert("world"));
    assert!(!ts.insert("hello"));
    multi_assert_eq!(ts.len(), ts.iter().count() => 2);
}

#[test]
fn remove_any_position() {
    let mut ts = tinyset!["a", "b", "c"];
    assert!(ts.remove("b"));
    assert!(!ts.remove("b"));
    assert_eq!(ts, tinyset!["a", "c"]);
}

#[test]
fn eq_is_order_free() {
    let a = tinyset![1, 2, 3];
    let b = tinyset![3, 1, 2];
    assert_eq!(a, b);
    assert_ne!(a, tinyset![1, 2]);
}

#[test]
fn borrowed_lookups() {
    let mut ts = TinySet::new();
    assert!(ts.insert("owned".to_owned()));
    // lookups work against &str through Borrow
    assert!(ts.contains("owned"));
    assert!(ts.remove("owned"));
    assert!(ts.is_empty());
}

#[test]
fn extend_unions() {
    let mut ts = tinyset![1, 2];
    ts.extend([2, 3, 4]);
    assert_eq!(ts, tinyset![1, 2, 3, 4]);
}
