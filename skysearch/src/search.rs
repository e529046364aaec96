/*
 * Created on Sun Jul 19 2026
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
    crate::{
        engine::{IndexStats, ScoreMap, Scorer, SearchIndex},
        error::SearchResult,
        idx::AsKeyClone,
        lex::Tokenizer,
        score::Coverage,
    },
    std::cmp::Ordering,
};

/// A ranked search hit
#[derive(Debug, Clone, PartialEq)]
pub struct Match<T> {
    pub item: T,
    pub score: f64,
}

/// The text front-end over [`SearchIndex`]: items are indexed from free-form
/// text and queried with free-form text, with tokenization, scoring and
/// result ranking handled here. The engine underneath stays type-free and
/// text-agnostic
pub struct QuickSearch<T, S = Coverage> {
    index: SearchIndex<T>,
    lexer: Tokenizer,
    scorer: S,
}

impl<T: AsKeyClone> QuickSearch<T> {
    pub fn new() -> Self {
        Self::with_scorer(Coverage, Tokenizer::default())
    }
}

impl<T: AsKeyClone> Default for QuickSearch<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AsKeyClone, S: Scorer> QuickSearch<T, S> {
    pub fn with_scorer(scorer: S, lexer: Tokenizer) -> Self {
        Self {
            index: SearchIndex::new(),
            lexer,
            scorer,
        }
    }
    /// Index `item` under the keywords extracted from `text`. Returns false
    /// when no usable keyword survives filtering (nothing was indexed).
    /// Calling again with more text unions the new keywords in
    pub fn add(&self, item: T, text: &str) -> SearchResult<bool> {
        let keywords = self.lexer.keywords(text);
        if keywords.is_empty() {
            return Ok(false);
        }
        self.index.register(item, keywords)?;
        Ok(true)
    }
    /// Forget `item` entirely. Returns false if it was never added
    pub fn remove(&self, item: &T) -> bool {
        self.index.deregister(item)
    }
    /// Rank items against a free-form query: every query term is walked
    /// through the fragment graph, per-term scores are summed per item and
    /// the best `limit` items are returned in descending score order
    pub fn find(&self, query: &str, limit: usize) -> Vec<Match<T>> {
        let mut total: ScoreMap<T> = ScoreMap::new();
        for term in self.lexer.query_terms(query) {
            for (item, score) in self.index.walk_and_score(&term, &self.scorer) {
                *total.entry(item).or_insert(0.0) += score;
            }
        }
        let mut ranked: Vec<Match<T>> = total
            .into_iter()
            .map(|(item, score)| Match { item, score })
            .collect();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(limit);
        ranked
    }
    pub fn clear(&self) {
        self.index.clear()
    }
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
    /// The engine underneath, for callers that bring their own keywords or
    /// scorers
    pub fn raw_index(&self) -> &SearchIndex<T> {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::QuickSearch;

    fn fruits() -> QuickSearch<&'static str> {
        let qs = QuickSearch::new();
        assert!(qs.add("apple", "Apple, the fruit").unwrap());
        assert!(qs.add("pineapple", "Pineapple (ananas)").unwrap());
        assert!(qs.add("grape", "Grape; wine fruit").unwrap());
        qs
    }

    #[test]
    fn finds_by_prefix() {
        let qs = fruits();
        let hits = qs.find("app", 10);
        // "apple" and "pineapple" both carry the fragment; "apple" wins the
        // prefix boost
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].item, "apple");
        assert_eq!(hits[1].item, "pineapple");
        assert!(hits[0].score > hits[1].score);
    }
    #[test]
    fn query_is_case_folded() {
        let qs = fruits();
        let hits = qs.find("GRAPE", 10);
        assert_eq!(hits[0].item, "grape");
    }
    #[test]
    fn multi_term_scores_accumulate() {
        let qs = fruits();
        let single: Vec<_> = qs.find("fruit", 10);
        let double: Vec<_> = qs.find("fruit apple", 10);
        let single_apple = single.iter().find(|m| m.item == "apple").unwrap();
        let double_apple = double.iter().find(|m| m.item == "apple").unwrap();
        assert!(double_apple.score > single_apple.score);
    }
    #[test]
    fn limit_truncates() {
        let qs = fruits();
        assert_eq!(qs.find("fruit", 1).len(), 1);
        assert!(qs.find("zzz", 10).is_empty());
    }
    #[test]
    fn add_without_usable_keywords() {
        let qs = QuickSearch::<&str>::new();
        assert!(!qs.add("x", "!!! ?").unwrap());
        assert_eq!(qs.stats().items, 0);
    }
    #[test]
    fn remove_then_miss() {
        let qs = fruits();
        assert!(qs.remove(&"apple"));
        assert!(!qs.remove(&"apple"));
        let hits = qs.find("apple", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item, "pineapple");
    }
    #[test]
    fn clear_drains() {
        let qs = fruits();
        qs.clear();
        multi_assert_eq!(qs.stats().items, qs.stats().fragments => 0);
        assert!(qs.find("apple", 10).is_empty());
    }
    #[test]
    fn custom_scorer_plugs_in() {
        use crate::{lex::Tokenizer, score};
        let qs: QuickSearch<u8, _> = QuickSearch::with_scorer(
            |q: &str, k: &str| score::prefix(q, k),
            Tokenizer::default(),
        );
        qs.add(1, "alpha").unwrap();
        qs.add(2, "beta").unwrap();
        let hits = qs.find("alp", 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].item, 1);
    }
}
