/*
 * Created on Sat Jul 04 2026
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

//! # Skysearch
//!
//! An in-memory, incremental quick-search index. Items (any hashable,
//! equatable value) are registered against a set of keywords; every
//! contiguous substring of every keyword becomes a node in a shared
//! multi-root DAG, so a query for any fragment reaches the keywords it is a
//! substring of by walking parent edges. Removal is precise: a fragment node
//! vanishes exactly when nothing references it anymore.
//!
//! The engine ([`SearchIndex`]) is the core: it owns the fragment graph
//! behind one process-wide reader-writer lock and exposes `register`,
//! `deregister`, `walk_and_score`, `keywords_of`, `clear` and `stats`.
//! [`QuickSearch`] layers text handling on top: tokenization ([`Tokenizer`]),
//! stock scorers ([`score`]) and ranked result packaging ([`Match`]).

#![deny(unreachable_patterns)]

#[macro_use]
mod macros;
mod engine;
mod error;
mod idx;
mod lex;
mod mem;
pub mod score;
mod search;

pub use self::{
    engine::{Fragment, IndexStats, ScoreMap, Scorer, SearchIndex},
    error::{SearchError, SearchResult},
    idx::{AsKey, AsKeyClone, AsValue},
    lex::Tokenizer,
    search::{Match, QuickSearch},
};
