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

use crate::mem::TinySet;

/// Keyword extraction. The engine trusts its callers to hand it sanitized,
/// non-empty keywords; this is the sanitizer: split on non-alphanumeric
/// boundaries, fold case, drop short tokens, deduplicate
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_keyword_len: usize,
    fold_case: bool,
}

impl Tokenizer {
    /// Single characters rarely discriminate anything; keywords shorter than
    /// this are dropped by default
    pub const DEFAULT_MIN_KEYWORD_LEN: usize = 2;

    pub const fn new(min_keyword_len: usize, fold_case: bool) -> Self {
        Self {
            min_keyword_len,
            fold_case,
        }
    }
    /// Extract registration keywords from raw text
    pub fn keywords(&self, src: &str) -> Vec<String> {
        self.scan(src, self.min_keyword_len)
    }
    /// Extract query terms from raw text. Queries keep single-character
    /// tokens so that short prefixes still match as the user types
    pub fn query_terms(&self, src: &str) -> Vec<String> {
        self.scan(src, 1)
    }
    fn scan(&self, src: &str, min_len: usize) -> Vec<String> {
        let mut seen: TinySet<String> = TinySet::new();
        for raw in src.split(|ch: char| !ch.is_alphanumeric()) {
            if raw.chars().count() < min_len.max(1) {
                continue;
            }
            let token = if self.fold_case {
                raw.to_lowercase()
            } else {
                raw.to_owned()
            };
            let _ = seen.insert(token);
        }
        seen.into_iter().collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_KEYWORD_LEN, true)
    }
}

#[cfg(test)]
mod tests {
    use super::Tokenizer;

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn splits_and_folds() {
        let lexer = Tokenizer::default();
        assert_eq!(
            sorted(lexer.keywords("Red Running Shoe")),
            ["red", "running", "shoe"]
        );
    }
    #[test]
    fn drops_punctuation_and_short_tokens() {
        let lexer = Tokenizer::default();
        assert_eq!(
            sorted(lexer.keywords("a quick-search engine, v2!")),
            ["engine", "quick", "search", "v2"]
        );
    }
    #[test]
    fn deduplicates() {
        let lexer = Tokenizer::default();
        assert_eq!(lexer.keywords("apple APPLE Apple"), ["apple"]);
    }
    #[test]
    fn query_terms_keep_single_chars() {
        let lexer = Tokenizer::default();
        assert_eq!(sorted(lexer.query_terms("a pp")), ["a", "pp"]);
        assert!(lexer.keywords("a").is_empty());
    }
    #[test]
    fn case_folding_is_optional() {
        let lexer = Tokenizer::new(2, false);
        assert_eq!(sorted(lexer.keywords("Red shoe")), ["Red", "shoe"]);
    }
    #[test]
    fn empty_input_yields_nothing() {
        let lexer = Tokenizer::default();
        assert!(lexer.keywords("").is_empty());
        assert!(lexer.keywords("  ,,  --  ").is_empty());
    }
}
