use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{category::Category, expense::Expense};

/// Placeholder shown when a trip is created without a title.
pub const TITLE_PLACEHOLDER: &str = "名前なしの旅行";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Trip {
    pub fn new(title: &str, date: &str) -> Self {
        let trimmed = title.trim();
        Self {
            id: Uuid::new_v4().to_string(),
            title: if trimmed.is_empty() {
                TITLE_PLACEHOLDER.to_string()
            } else {
                trimmed.to_string()
            },
            date: date.to_string(),
            expenses: Vec::new(),
        }
    }

    /// Per-category sums in `Category::ALL` order. Every category appears,
    /// zero-valued when the trip has no expense carrying it.
    pub fn category_totals(&self) -> [(Category, f64); 5] {
        let mut totals = Category::ALL.map(|c| (c, 0.0));
        for expense in &self.expenses {
            for slot in &mut totals {
                if slot.0 == expense.category {
                    slot.1 += expense.amount;
                }
            }
        }
        totals
    }

    pub fn grand_total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Even split of the grand total, rounded up to the next whole yen.
    /// The headcount is coerced to a whole number of at least one person.
    pub fn per_person_split(&self, headcount: f64) -> f64 {
        (self.grand_total() / normalize_headcount(headcount) as f64).ceil()
    }

    pub fn expense(&self, expense_id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == expense_id)
    }

    pub fn expense_mut(&mut self, expense_id: &str) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == expense_id)
    }
}

/// Floor fractional headcounts, then clamp everything below one person
/// (including NaN and infinities) up to one.
pub fn normalize_headcount(raw: f64) -> u64 {
    if raw.is_finite() && raw >= 1.0 {
        raw.floor() as u64
    } else {
        1
    }
}
