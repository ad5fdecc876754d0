//! Thread-safe handle around a [`Catalog`].

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::Catalog;
use crate::command::{CatalogCommand, CatalogReply};
use crate::product::Product;

/// Cloneable handle serializing all access to one [`Catalog`] behind a single lock.
///
/// Mutations take the write lock; searches take the read lock. Every operation
/// completes inside one lock acquisition, so a poisoned lock never exposes a
/// half-applied change and is recovered instead of surfaced.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_new_product(&self, product: Product) -> bool {
        self.write().add_new_product(product)
    }

    pub fn delete_product(&self, id: &str) -> bool {
        self.write().delete_product(id)
    }

    pub fn list_products_by_name(&self, search: &str) -> BTreeSet<String> {
        self.read().list_products_by_name(search)
    }

    pub fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        self.read().list_products_by_producer(search)
    }

    pub fn execute(&self, command: &CatalogCommand) -> CatalogReply {
        match command {
            CatalogCommand::ListProductsByName { search } => {
                CatalogReply::Names(self.list_products_by_name(search).into_iter().collect())
            }
            CatalogCommand::ListProductsByProducer { search } => {
                CatalogReply::Names(self.list_products_by_producer(search))
            }
            CatalogCommand::AddNewProduct { .. } | CatalogCommand::DeleteProduct { .. } => {
                self.write().execute(command)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Clone of the current catalog contents.
    pub fn snapshot(&self) -> Catalog {
        self.read().clone()
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn concurrent_adds_of_same_id_succeed_once() {
        let shared = SharedCatalog::default();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.add_new_product(Product::new("1", format!("Racer{i}"), "Acme"))
                })
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|added| *added)
            .count();
        assert_eq!(wins, 1);
        assert_eq!(shared.len(), 1);
    }

    #[test]
    fn concurrent_distinct_adds_all_land() {
        let shared = SharedCatalog::default();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.add_new_product(Product::new(i.to_string(), "Widget", format!("P{i}")))
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }

        assert_eq!(shared.len(), 16);
        assert_eq!(shared.list_products_by_name("Widget").len(), 10);
        assert_eq!(shared.list_products_by_producer("P").len(), 10);
    }

    #[test]
    fn recovers_from_poisoned_lock() {
        let shared = SharedCatalog::new(
            [Product::new("1", "Widget", "Acme")].into_iter().collect(),
        );

        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.write().unwrap();
            panic!("poison the catalog lock");
        })
        .join();

        assert!(shared.delete_product("1"));
        assert!(shared.is_empty());
        assert!(shared.snapshot().is_empty());
    }

    #[test]
    fn searches_run_alongside_other_readers() {
        let shared = SharedCatalog::new(
            [Product::new("1", "Widget", "Acme")].into_iter().collect(),
        );
        let _reader = shared.inner.read().unwrap();

        let searcher = shared.clone();
        let replies = thread::spawn(move || {
            (
                searcher.execute(&CatalogCommand::ListProductsByName { search: "Wid".into() }),
                searcher.execute(&CatalogCommand::ListProductsByProducer { search: "Ac".into() }),
            )
        })
        .join()
        .unwrap();

        assert_eq!(
            replies,
            (
                CatalogReply::Names(vec!["Widget".into()]),
                CatalogReply::Names(vec!["Widget".into()]),
            )
        );
    }
}
