use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A payment method key such as `card` or `cash`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentMethod(pub String);

impl From<&str> for PaymentMethod {
    fn from(method: &str) -> Self {
        Self(method.to_string())
    }
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An accepted payment method with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodInfo {
    pub id: PaymentMethod,
    pub name: String,
}

impl PaymentMethodInfo {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: PaymentMethod::from(id),
            name: name.to_string(),
        }
    }

    /// Card and cash, used when no catalog data provides a list.
    pub fn defaults() -> Vec<Self> {
        vec![Self::new("card", "Card"), Self::new("cash", "Cash")]
    }
}
