/*
 * Created on Sat Jul 11 2026
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

mod frag;
mod node;
mod walk;

use {
    self::{node::FragmentNode, walk::Walker},
    crate::{
        error::{SearchError, SearchResult},
        idx::{AsKeyClone, IndexBaseSpec, IndexST, STIndex},
        mem::TinySet,
    },
    log::{debug, trace},
    parking_lot::RwLock,
    std::{
        collections::HashMap,
        fmt,
        sync::atomic::{AtomicUsize, Ordering},
    },
};

pub use self::{frag::Fragment, walk::Scorer};

/// Relaxed ordering: the stat counters are advisory snapshots
const ORD_RLX: Ordering = Ordering::Relaxed;

/// Accumulated walk result: item to best score
pub type ScoreMap<T> = HashMap<T, f64>;

/// An observational snapshot of index size. The two counts are refreshed
/// independently of the lock, so a reader racing a mutator may see values
/// from adjacent states; treat them as approximate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub items: usize,
    pub fragments: usize,
}

/// The quick-search engine: a shared multi-root DAG in which every
/// contiguous substring of every registered keyword is a node, with edges
/// pointing from longer fragments down to their two length-minus-one
/// children and back up through parent handles.
///
/// One process-wide lock protects the graph: `register`, `deregister` and
/// `clear` take it exclusively, `walk_and_score` and `keywords_of` take it
/// shared, `stats` reads atomics without locking. Reads vastly outnumber
/// writes in the intended workload and a single write touches O(|kw|²)
/// nodes, so one lock beats per-node locking here
pub struct SearchIndex<T> {
    graph: RwLock<FragmentGraph<T>>,
    item_count: AtomicUsize,
    fragment_count: AtomicUsize,
}

impl<T: AsKeyClone> SearchIndex<T> {
    pub fn new() -> Self {
        Self {
            graph: RwLock::new(FragmentGraph::empty()),
            item_count: AtomicUsize::new(0),
            fragment_count: AtomicUsize::new(0),
        }
    }
    /// Atomically add `item` as a member of each keyword, generating any
    /// missing graph structure. Re-registration unions the new keywords into
    /// the item's existing set; keywords already associated are no-ops.
    ///
    /// Fails (without touching the graph) if any keyword is empty.
    /// Registering an empty keyword *set* is a no-op
    pub fn register<I, K>(&self, item: T, keywords: I) -> SearchResult<()>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keywords: Vec<K> = keywords.into_iter().collect();
        if keywords.iter().any(|kw| kw.as_ref().is_empty()) {
            return Err(SearchError::EmptyKeyword);
        }
        if keywords.is_empty() {
            return Ok(());
        }
        let mut graph = self.graph.write();
        let mut interned = TinySet::new();
        for kw in &keywords {
            if let Some(frag) = graph.attach(&item, kw.as_ref()) {
                let _ = interned.insert(frag);
            }
        }
        graph.union_registry(item, interned);
        trace!("registered item across {} keyword(s)", keywords.len());
        self.refresh_counters(&graph);
        Ok(())
    }
    /// Atomically remove `item` from every node it is attached at, and
    /// collapse any node that becomes unreferenced. Unknown items are a
    /// silent no-op (returns false)
    pub fn deregister(&self, item: &T) -> bool {
        let mut graph = self.graph.write();
        let Some(keywords) = graph.registry.st_delete_return(item) else {
            return false;
        };
        let count = keywords.len();
        for kw in keywords {
            graph.detach(item, kw.as_str());
        }
        trace!("deregistered item from {count} keyword(s)");
        self.refresh_counters(&graph);
        true
    }
    /// Locate the node for `fragment` and walk the graph upward through
    /// parent edges, scoring every reachable node that carries items and
    /// keeping the maximum score per item. Scores that are not strictly
    /// positive (including NaN) are pruned. Unknown fragments yield an empty
    /// result
    pub fn walk_and_score<S>(&self, fragment: &str, scorer: &S) -> ScoreMap<T>
    where
        S: Scorer + ?Sized,
    {
        let graph = self.graph.read();
        Walker::new(&graph, fragment, scorer).run()
    }
    /// The exact keyword set `item` was registered with (union across all
    /// registrations), or `None` if it isn't registered. Snapshots under a
    /// brief shared lock
    pub fn keywords_of(&self, item: &T) -> Option<Vec<Fragment>> {
        let graph = self.graph.read();
        graph
            .registry
            .st_get(item)
            .map(|kws| kws.iter().cloned().collect())
    }
    /// Drop every node and every registration
    pub fn clear(&self) {
        let mut graph = self.graph.write();
        graph.wipe();
        debug!("cleared index");
        self.refresh_counters(&graph);
    }
    /// Lock-free size snapshot: (registered items, live fragment nodes)
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            items: self.item_count.load(ORD_RLX),
            fragments: self.fragment_count.load(ORD_RLX),
        }
    }
    fn refresh_counters(&self, graph: &FragmentGraph<T>) {
        self.item_count.store(graph.registry.st_len(), ORD_RLX);
        self.fragment_count.store(graph.store.st_len(), ORD_RLX);
    }
    #[cfg(test)]
    pub(crate) fn graph(&self) -> &RwLock<FragmentGraph<T>> {
        &self.graph
    }
}

impl<T: AsKeyClone> Default for SearchIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: AsKeyClone + fmt::Debug> fmt::Debug for SearchIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("stats", &self.stats())
            .field("graph", &*self.graph.read())
            .finish()
    }
}

/// The unlocked graph state: the fragment store (authoritative owner of
/// every live node) and the item registry (item to registered keyword set,
/// kept so deregistration is O(|keywords|) instead of a graph scan)
pub(crate) struct FragmentGraph<T> {
    store: IndexST<Fragment, FragmentNode<T>>,
    registry: IndexST<T, TinySet<Fragment>>,
}

impl<T: AsKeyClone> FragmentGraph<T> {
    fn empty() -> Self {
        Self {
            store: IndexST::idx_init(),
            registry: IndexST::idx_init(),
        }
    }
    pub(crate) fn store(&self) -> &IndexST<Fragment, FragmentNode<T>> {
        &self.store
    }
    #[cfg(test)]
    pub(crate) fn registry(&self) -> &IndexST<T, TinySet<Fragment>> {
        &self.registry
    }
    /// Attach `item` at the node for `kw`, materializing the node and its
    /// full decomposition if missing. Returns the interned fragment handle
    /// for the keyword
    fn attach(&mut self, item: &T, kw: &str) -> Option<Fragment> {
        self.materialize(kw, None, Some(item));
        self.store.st_get(kw).map(|node| node.fragment().clone())
    }
    /// Recursive node materialization. A missing node is created (interning
    /// its fragment) and its two length-minus-one children are materialized
    /// with this node as their parent; existing nodes only take the
    /// item/parent updates. Duplicate edges and items die in set membership
    fn materialize(&mut self, identity: &str, parent: Option<&Fragment>, item: Option<&T>) {
        if !self.store.st_contains(identity) {
            let frag = Fragment::new(identity);
            let _ = self
                .store
                .st_insert(frag.clone(), FragmentNode::new(frag.clone()));
            if let Some(prefix) = frag.prefix_child() {
                self.materialize(prefix, Some(&frag), None);
            }
            if let Some(suffix) = frag.suffix_child() {
                self.materialize(suffix, Some(&frag), None);
            }
        }
        if let Some(node) = self.store.st_get_mut(identity) {
            if let Some(item) = item {
                let _ = node.add_item(item.read_key_clone());
            }
            if let Some(parent) = parent {
                let _ = node.add_parent(parent.clone());
            }
        }
    }
    /// Remove `item` from the node for `kw` and collapse the node if it no
    /// longer carries items
    fn detach(&mut self, item: &T, kw: &str) {
        let Some(node) = self.store.st_get_mut(kw) else {
            return;
        };
        let _ = node.remove_item(item);
        if node.items().is_empty() {
            self.collapse(kw, None);
        }
    }
    /// Recursive edge removal. Drops the parent edge (if any); a node left
    /// with no items and no parents is deleted from the store, after which
    /// its two children shed this node as a parent the same way. Because
    /// child lookups go through the store and a node removes itself before
    /// recursing, a branch that was already collapsed terminates on the
    /// store miss
    fn collapse(&mut self, identity: &str, parent: Option<&str>) {
        let Some(node) = self.store.st_get_mut(identity) else {
            return;
        };
        if let Some(parent) = parent {
            let _ = node.remove_parent(parent);
        }
        if node.is_orphan() {
            if let Some(dead) = self.store.st_delete_return(identity) {
                let frag = dead.fragment().clone();
                if let Some(prefix) = frag.prefix_child() {
                    self.collapse(prefix, Some(frag.as_str()));
                }
                if let Some(suffix) = frag.suffix_child() {
                    self.collapse(suffix, Some(frag.as_str()));
                }
            }
        }
    }
    /// Union `keywords` into the registry entry for `item`, creating it if
    /// absent
    fn union_registry(&mut self, item: T, keywords: TinySet<Fragment>) {
        match self.registry.st_get_mut(&item) {
            Some(existing) => existing.extend(keywords),
            None => {
                let _ = self.registry.st_insert(item, keywords);
            }
        }
    }
    fn wipe(&mut self) {
        self.store.st_clear();
        self.registry.st_clear();
    }
}

impl<T: AsKeyClone + fmt::Debug> fmt::Debug for FragmentGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (frag, node) in self.store.st_iter_kv() {
            map.entry(&frag.as_str(), &(node.items(), node.parents()));
        }
        map.finish()
    }
}
