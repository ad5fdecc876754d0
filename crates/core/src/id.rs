//! Strongly-typed identifiers used across the domain.

use core::borrow::Borrow;
use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
///
/// Any string is a valid identifier, the empty string included. Ordering is
/// plain string ordering, so `"10"` sorts before `"2"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<ProductId> for String {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_as_strings_not_numbers() {
        let mut ids = vec![ProductId::from("2"), ProductId::from("10"), ProductId::from("1")];
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(ProductId::as_str).collect();
        assert_eq!(ids, vec!["1", "10", "2"]);
    }

    #[test]
    fn empty_id_is_a_normal_value() {
        let id = ProductId::new("");
        assert_eq!(id.as_str(), "");
        assert_eq!(id, ProductId::from(""));
    }

    #[test]
    fn serializes_transparently() {
        let id = ProductId::from("sku-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"sku-7\"");
        let back: ProductId = serde_json::from_str("\"sku-7\"").unwrap();
        assert_eq!(back, id);
    }
}
