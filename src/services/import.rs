use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{category::Category, expense::Expense, trip::Trip},
};

/// Rebuild a trip from an externally supplied JSON snapshot.
///
/// Every identifier is re-keyed, even when the snapshot came from this
/// very document, so imports can never collide with existing state.
/// Field handling is deliberately forgiving: unknown categories become
/// `Other`, a missing description becomes the placeholder, and a missing
/// or non-numeric amount becomes 0. Only two things abort the import:
/// unparseable JSON and an absent or empty `title`.
pub fn reconcile(raw_json: &str) -> Result<Trip, AppError> {
    let value: Value = serde_json::from_str(raw_json).map_err(AppError::MalformedImport)?;

    let title = value
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::MissingTitle)?;
    let date = value.get("date").and_then(Value::as_str).unwrap_or("");

    let mut trip = Trip {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        date: date.to_string(),
        expenses: Vec::new(),
    };

    if let Some(raw_expenses) = value.get("expenses").and_then(Value::as_array) {
        for raw in raw_expenses {
            let category = raw
                .get("category")
                .and_then(Value::as_str)
                .and_then(Category::parse_lenient)
                .unwrap_or_default();
            let desc = raw.get("desc").and_then(Value::as_str).unwrap_or("");
            let amount = raw.get("amount").map_or(0.0, coerce_amount);
            trip.expenses.push(Expense::new(category, desc, amount));
        }
    }

    Ok(trip)
}

fn coerce_amount(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}
