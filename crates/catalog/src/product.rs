use serde::{Deserialize, Serialize};

use prodcat_core::{Entity, ProductId};

/// A catalog record. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    producer: String,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        producer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            producer: producer.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    /// Label used when several matches share this product's name.
    pub fn qualified_name(&self) -> String {
        format!("{} - {}", self.producer, self.name)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
