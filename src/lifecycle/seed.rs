//! Start-up data for the collaborators.
//!
//! The document has the same shape as the catalog service's JSON (`categories`,
//! `menuItems`, `members`, `coupons`, `paymentMethods`); keys it does not know,
//! such as image paths, are ignored. A small fixture is compiled into the binary.

use crate::coupon_actor::CouponError;
use crate::member_actor::MemberError;
use crate::menu_actor::MenuError;
use crate::model::{CouponCreate, MemberCreate, MenuCategory, MenuItemCreate, PaymentMethodInfo};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to seed menu: {0}")]
    Menu(#[from] MenuError),

    #[error("Failed to seed members: {0}")]
    Member(#[from] MemberError),

    #[error("Failed to seed coupons: {0}")]
    Coupon(#[from] CouponError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    /// Display names for the category ids used by `menu_items`.
    pub categories: Vec<MenuCategory>,
    pub menu_items: Vec<MenuItemCreate>,
    pub members: Vec<MemberCreate>,
    pub coupons: Vec<CouponCreate>,
    pub payment_methods: Vec<PaymentMethodInfo>,
}

/// How many records each collaborator received.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub menu_items: usize,
    pub members: usize,
    pub coupons: usize,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reads `path` if given, otherwise the built-in fixture.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    /// The seeded payment methods, or card and cash when the data lists none.
    pub fn accepted_payment_methods(&self) -> Vec<PaymentMethodInfo> {
        if self.payment_methods.is_empty() {
            PaymentMethodInfo::defaults()
        } else {
            self.payment_methods.clone()
        }
    }
}
