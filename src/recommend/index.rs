//! Request-scoped view of the implicit reader <-> document bipartite graph
//!
//! Nothing is precomputed: each lookup is answered from the `EventStore` the
//! first time an id is asked for and memoised for the rest of the request.
//! Sets iterate in first-seen log order, which is what makes ranking
//! tie-breaks reproducible.

use crate::event::{DocumentId, EventStore, StoreResult, VisitorId};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;

/// Distinct visitors of one document, in first-seen order
pub type ReaderSet = IndexSet<VisitorId>;

/// Distinct documents of one visitor, in first-seen order
pub type DocumentSet = IndexSet<DocumentId>;

pub struct BipartiteIndex<'a, S: EventStore + ?Sized> {
    store: &'a S,
    readers: FxHashMap<DocumentId, ReaderSet>,
    documents: FxHashMap<VisitorId, DocumentSet>,
    store_lookups: usize,
}

impl<'a, S: EventStore + ?Sized> BipartiteIndex<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            readers: FxHashMap::default(),
            documents: FxHashMap::default(),
            store_lookups: 0,
        }
    }

    /// Distinct visitors with at least one event against `document`
    pub fn readers_of(&mut self, document: &DocumentId) -> StoreResult<&ReaderSet> {
        if !self.readers.contains_key(document) {
            let set: ReaderSet = self
                .store
                .events_for_document(document)?
                .into_iter()
                .map(|e| e.visitor_id.clone())
                .collect();
            self.store_lookups += 1;
            self.readers.insert(document.clone(), set);
        }
        Ok(&self.readers[document])
    }

    /// Distinct documents `visitor` has events against
    pub fn documents_of(&mut self, visitor: &VisitorId) -> StoreResult<&DocumentSet> {
        if !self.documents.contains_key(visitor) {
            let set: DocumentSet = self
                .store
                .events_for_visitor(visitor)?
                .into_iter()
                .map(|e| e.document_id.clone())
                .collect();
            self.store_lookups += 1;
            self.documents.insert(visitor.clone(), set);
        }
        Ok(&self.documents[visitor])
    }

    /// Number of times the store was consulted by this index
    pub fn store_lookups(&self) -> usize {
        self.store_lookups
    }
}
