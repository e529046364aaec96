/*
 * Created on Sat Jul 18 2026
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

//! Stock scorers. Every scorer is a pure function over
//! `(query fragment, candidate keyword)`; anything implementing
//! [`Scorer`](crate::Scorer) plugs into the engine the same way

use crate::engine::Scorer;

/// 1.0 when the candidate keyword starts with the query fragment, 0.0
/// otherwise. The zero prunes non-prefix hits out of the result
pub fn prefix(query: &str, candidate: &str) -> f64 {
    if candidate.starts_with(query) {
        1.0
    } else {
        0.0
    }
}

/// The fraction of the candidate's characters covered by the query fragment
/// (in `(0, 1]` for the substrings the walker feeds it), doubled when the
/// candidate starts with the fragment so direct prefix hits outrank interior
/// hits
pub fn coverage(query: &str, candidate: &str) -> f64 {
    let q = query.chars().count() as f64;
    let c = candidate.chars().count() as f64;
    if q == 0.0 || c == 0.0 {
        return 0.0;
    }
    let base = q / c;
    if candidate.starts_with(query) {
        base * 2.0
    } else {
        base
    }
}

/// [`coverage`] as a named type, usable where a scorer value is stored (it
/// is the front-end default)
#[derive(Debug, Clone, Copy, Default)]
pub struct Coverage;

impl Scorer for Coverage {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        coverage(query, candidate)
    }
}
