use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::category::Category;

/// Placeholder shown when an expense is created without a description.
pub const DESC_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category: Category,
    pub desc: String,
    pub amount: f64,
}

impl Expense {
    pub fn new(category: Category, desc: &str, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category,
            desc: normalize_desc(desc),
            amount,
        }
    }
}

pub fn normalize_desc(desc: &str) -> String {
    let trimmed = desc.trim();
    if trimmed.is_empty() {
        DESC_PLACEHOLDER.to_string()
    } else {
        trimmed.to_string()
    }
}
