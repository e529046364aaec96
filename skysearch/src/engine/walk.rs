/*
 * Created on Mon Jul 13 2026
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

use {
    super::{frag::Fragment, FragmentGraph, ScoreMap},
    crate::idx::{AsKeyClone, STIndex},
    std::collections::{hash_map::Entry, HashSet},
};

/// Scoring capability injected into a walk: a pure function over
/// `(query fragment, candidate keyword)`. It runs under the shared read
/// lock, so it must not call back into the engine
pub trait Scorer {
    fn score(&self, query: &str, candidate: &str) -> f64;
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> f64,
{
    fn score(&self, query: &str, candidate: &str) -> f64 {
        self(query, candidate)
    }
}

/// Upward traversal from the query fragment's node through parent edges.
/// Every ancestor has a strictly longer fragment, so climbing parents means
/// climbing toward the user-registered keywords the query is a substring of.
/// Each reachable node is visited at most once; nodes that carry items are
/// scored, scores `> 0` merge into the accumulator under the maximum rule
pub(crate) struct Walker<'a, T, S: ?Sized> {
    graph: &'a FragmentGraph<T>,
    query: &'a str,
    scorer: &'a S,
    visited: HashSet<Fragment>,
    pending: Vec<Fragment>,
    hits: ScoreMap<T>,
}

impl<'a, T: AsKeyClone, S: Scorer + ?Sized> Walker<'a, T, S> {
    pub(crate) fn new(graph: &'a FragmentGraph<T>, query: &'a str, scorer: &'a S) -> Self {
        Self {
            graph,
            query,
            scorer,
            visited: HashSet::new(),
            pending: Vec::new(),
            hits: ScoreMap::new(),
        }
    }
    pub(crate) fn run(self) -> ScoreMap<T> {
        let Self {
            graph,
            query,
            scorer,
            mut visited,
            mut pending,
            mut hits,
        } = self;
        let store = graph.store();
        let Some(entry) = store.st_get(query) else {
            return hits;
        };
        pending.push(entry.fragment().clone());
        while let Some(frag) = pending.pop() {
            if !visited.insert(frag.clone()) {
                continue;
            }
            let Some(node) = store.st_get(frag.as_str()) else {
                continue;
            };
            if !node.items().is_empty() {
                let score = scorer.score(query, node.fragment().as_str());
                // a NaN fails both comparisons, so it is never recorded
                if score > 0.0 {
                    for item in node.items() {
                        match hits.entry(item.read_key_clone()) {
                            Entry::Occupied(mut e) => {
                                if score > *e.get() {
                                    *e.get_mut() = score;
                                }
                            }
                            Entry::Vacant(e) => {
                                let _ = e.insert(score);
                            }
                        }
                    }
                }
            }
            for parent in node.parents() {
                if !visited.contains(parent.as_str()) {
                    pending.push(parent.clone());
                }
            }
        }
        hits
    }
}
