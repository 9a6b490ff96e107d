//! Registered participant records

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// A registered participant (rider or driver)
///
/// Created on registration; never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub phone: Option<String>,
    pub is_driver: bool,
}
