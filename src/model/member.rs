use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for loyalty members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl From<u32> for MemberId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "member_{}", self.0)
    }
}

/// A loyalty member. `phone` is always stored normalised (digits only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub phone: String,
    pub points: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub points: u64,
}

/// Profile changes. Point balances only move through member actions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Strips everything but ASCII digits, so `010-1234-5678` and `01012345678` match.
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}
