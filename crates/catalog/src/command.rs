//! Serializable command/reply model for driving a [`crate::Catalog`].

use serde::{Deserialize, Serialize};

use prodcat_core::{DomainError, DomainResult, ProductId};

/// One catalog operation, decoded from a JSON object tagged by `op`.
///
/// ```json
/// {"op": "add_new_product", "id": "1", "name": "Some Product1", "producer": "Some Producer1"}
/// {"op": "delete_product", "id": "1"}
/// {"op": "list_products_by_name", "search": "Product"}
/// {"op": "list_products_by_producer", "search": "Some Producer"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CatalogCommand {
    AddNewProduct {
        id: ProductId,
        name: String,
        producer: String,
    },
    DeleteProduct {
        id: ProductId,
    },
    ListProductsByName {
        search: String,
    },
    ListProductsByProducer {
        search: String,
    },
}

impl CatalogCommand {
    /// Decode a single JSON command.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::unsupported("empty command"));
        }
        serde_json::from_str(input).map_err(|e| DomainError::invalid_command(e.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogCommand::AddNewProduct { .. } => "add_new_product",
            CatalogCommand::DeleteProduct { .. } => "delete_product",
            CatalogCommand::ListProductsByName { .. } => "list_products_by_name",
            CatalogCommand::ListProductsByProducer { .. } => "list_products_by_producer",
        }
    }
}

/// Outcome of a [`CatalogCommand`].
///
/// Name-search labels are carried in sorted order; producer-search names keep
/// their id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogReply {
    Added(bool),
    Deleted(bool),
    Names(Vec<String>),
}
