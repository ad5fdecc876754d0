use std::collections::{BTreeMap, BTreeSet};

use prodcat_core::Entity;

use crate::command::{CatalogCommand, CatalogReply};
use crate::product::Product;

/// Upper bound on the size of every search result.
pub const MAX_RESULTS: usize = 10;

/// In-memory product catalog.
///
/// Invariant: at most one stored product per id. Storage keeps insertion order;
/// search results never depend on it because name results are a sorted set and
/// producer results are sorted by id.
///
/// Not synchronized. Wrap in [`crate::SharedCatalog`] to share across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Stored products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Store `product` unless its id is already taken.
    ///
    /// Returns `false` and leaves the stored product untouched on a duplicate id.
    pub fn add_new_product(&mut self, product: Product) -> bool {
        if self.contains(product.id().as_str()) {
            tracing::debug!(product_id = %product.id(), "product already in catalog");
            return false;
        }

        tracing::debug!(product_id = %product.id(), "product added");
        self.products.push(product);
        true
    }

    /// Remove the product with `id`. Returns `false` if nothing matched.
    pub fn delete_product(&mut self, id: &str) -> bool {
        match self.products.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.products.remove(index);
                tracing::debug!(product_id = %id, "product deleted");
                true
            }
            None => {
                tracing::debug!(product_id = %id, "no product to delete");
                false
            }
        }
    }

    /// Labels of products whose name contains `search` (case-sensitive).
    ///
    /// A name shared by several matches is qualified as `"<producer> - <name>"`
    /// for each of them; a name unique among the matches is returned bare.
    /// At most [`MAX_RESULTS`] labels are kept, the lexicographically smallest.
    pub fn list_products_by_name(&self, search: &str) -> BTreeSet<String> {
        let mut groups: BTreeMap<&str, Vec<&Product>> = BTreeMap::new();
        for product in self.products.iter().filter(|p| p.name().contains(search)) {
            groups.entry(product.name()).or_default().push(product);
        }

        let labels: BTreeSet<String> = groups
            .into_iter()
            .flat_map(|(name, members)| -> Vec<String> {
                if members.len() > 1 {
                    members.iter().map(|p| p.qualified_name()).collect()
                } else {
                    vec![name.to_owned()]
                }
            })
            .collect();

        tracing::trace!(search, matches = labels.len(), "name search");
        labels.into_iter().take(MAX_RESULTS).collect()
    }

    /// Names of products whose producer contains `search` (case-sensitive),
    /// ordered by product id (string ordering) and capped at [`MAX_RESULTS`].
    pub fn list_products_by_producer(&self, search: &str) -> Vec<String> {
        let mut matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.producer().contains(search))
            .collect();
        // Sort key is the id, not the producer.
        matches.sort_by(|a, b| a.id().cmp(b.id()));

        tracing::trace!(search, matches = matches.len(), "producer search");
        matches
            .into_iter()
            .take(MAX_RESULTS)
            .map(|p| p.name().to_owned())
            .collect()
    }

    /// Run a decoded command against the catalog.
    pub fn execute(&mut self, command: &CatalogCommand) -> CatalogReply {
        match command {
            CatalogCommand::AddNewProduct { id, name, producer } => CatalogReply::Added(
                self.add_new_product(Product::new(id.clone(), name.clone(), producer.clone())),
            ),
            CatalogCommand::DeleteProduct { id } => {
                CatalogReply::Deleted(self.delete_product(id.as_str()))
            }
            CatalogCommand::ListProductsByName { search } => {
                CatalogReply::Names(self.list_products_by_name(search).into_iter().collect())
            }
            CatalogCommand::ListProductsByProducer { search } => {
                CatalogReply::Names(self.list_products_by_producer(search))
            }
        }
    }
}

impl Extend<Product> for Catalog {
    /// Insert-if-absent for each product; later duplicates are dropped.
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        for product in iter {
            self.add_new_product(product);
        }
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        catalog.extend(iter);
        catalog
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
