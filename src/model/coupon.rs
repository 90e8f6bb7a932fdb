use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponId(pub u32);

impl From<u32> for CouponId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CouponId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "coupon_{}", self.0)
    }
}

/// A fixed-amount discount redeemable by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    pub id: CouponId,
    /// Stored upper-case; lookups are case-insensitive.
    pub code: String,
    pub discount: u64,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CouponCreate {
    pub code: String,
    pub discount: u64,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CouponUpdate {
    pub discount: Option<u64>,
    pub active: Option<bool>,
}

/// Canonical form used for storage and lookup.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
