//! Catalog state and rollback snapshots.

use std::collections::HashSet;

use catalog_core::{Product, ProductId};

use crate::inflight::InFlight;

/// Point-in-time view of the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    /// Products in display order, newest speculative entries first.
    pub products: Vec<Product>,
    /// A list fetch is outstanding.
    pub is_loading: bool,
    /// A create or update is outstanding.
    pub is_submitting: bool,
    /// Message of the last failed list fetch.
    pub error: Option<String>,
}

/// Mutable state behind the controller lock.
#[derive(Debug, Default)]
pub(crate) struct Store {
    pub products: Vec<Product>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub submitting: usize,
    pub in_flight: InFlight,
    /// Bumped on every change to `products`.
    revision: u64,
    /// Bumped whenever `products` is replaced by a fetched page.
    generation: u64,
    /// Display order including records hidden by a pending delete.
    layout: Vec<ProductId>,
}

/// Collection state captured before a speculative change.
#[derive(Debug, Clone)]
pub(crate) struct Snapshot {
    products: Vec<Product>,
    /// Target record, if it was listed.
    target: Option<Product>,
    revision: u64,
    generation: u64,
}

impl Store {
    pub fn view(&self) -> CatalogState {
        CatalogState {
            products: self.products.clone(),
            is_loading: self.is_loading,
            is_submitting: self.submitting > 0,
            error: self.error.clone(),
        }
    }

    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    /// Replace the collection with a fetched page.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.layout = products.iter().map(|p| p.id).collect();
        self.products = products;
        self.revision += 1;
        self.generation += 1;
    }

    pub fn prepend(&mut self, product: Product) {
        self.layout.insert(0, product.id);
        self.products.insert(0, product);
        self.revision += 1;
    }

    /// Replace the entry with the same id. Returns false if none matched.
    pub fn replace(&mut self, product: Product) -> bool {
        match self.position(product.id) {
            Some(index) => {
                self.products[index] = product;
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        self.layout.retain(|&other| other != id);
        self.hide(id)
    }

    /// Take a record out of the list but keep its slot for a rollback.
    pub fn hide(&mut self, id: ProductId) -> Option<Product> {
        let index = self.position(id)?;
        self.revision += 1;
        Some(self.products.remove(index))
    }

    /// Drop the slot of a hidden record once its removal is final.
    pub fn forget(&mut self, id: ProductId) {
        if self.position(id).is_none() {
            self.layout.retain(|&other| other != id);
        }
    }

    /// Index a hidden record returns to: after every listed record that
    /// preceded it.
    fn slot(&self, id: ProductId) -> usize {
        let listed: HashSet<ProductId> = self.products.iter().map(|p| p.id).collect();
        self.layout
            .iter()
            .take_while(|&&other| other != id)
            .filter(|other| listed.contains(other))
            .count()
    }

    /// Capture the collection before touching `id`.
    pub fn snapshot(&self, id: ProductId) -> Snapshot {
        Snapshot {
            products: self.products.clone(),
            target: self.position(id).map(|index| self.products[index].clone()),
            revision: self.revision,
            generation: self.generation,
        }
    }

    /// Mark the speculative change as the last one the snapshot accounts for.
    pub fn seal(&self, snapshot: &mut Snapshot) {
        snapshot.revision = self.revision;
    }

    /// Undo a failed speculative change.
    ///
    /// With no intervening change the captured collection comes back
    /// verbatim. Otherwise only the target record is put back, at its
    /// original position when it has to be re-inserted. A fetched page
    /// since the snapshot wins over both.
    pub fn rollback(&mut self, snapshot: Snapshot) {
        if snapshot.generation != self.generation {
            return;
        }
        if snapshot.revision == self.revision {
            self.products = snapshot.products;
            self.revision += 1;
            return;
        }
        if let Some(previous) = snapshot.target {
            if !self.replace(previous.clone()) {
                let index = self.slot(previous.id);
                self.products.insert(index, previous);
                self.revision += 1;
            }
        }
    }
}
