use tracing::{debug, info};

use crate::{
    config::AppConfig,
    error::AppError,
    models::{
        category::Category,
        document::Document,
        expense::{normalize_desc, Expense},
        trip::Trip,
    },
    services::{import, storage::StorageService},
};

type Subscriber = Box<dyn FnMut(&Document)>;

/// Owns the in-memory document and the storage slot behind it. Every
/// mutation validates, applies the change, persists the whole document,
/// then notifies subscribers so derived views recompute from scratch.
/// Failed validation leaves both the document and the slot untouched.
pub struct App {
    document: Document,
    storage: StorageService,
    subscribers: Vec<Subscriber>,
}

impl App {
    /// Open the document slot named by the environment configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(StorageService::new(config.data_root.clone()))
    }

    pub fn new(storage: StorageService) -> Self {
        let mut document = storage.load_document();
        document.repair_selection();
        Self {
            document,
            storage,
            subscribers: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn current_trip(&self) -> Option<&Trip> {
        self.document.current_trip()
    }

    /// Register a change listener; it fires after every persisted mutation
    /// with the full updated document.
    pub fn subscribe(&mut self, listener: impl FnMut(&Document) + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    fn commit(&mut self) -> Result<(), AppError> {
        self.storage.save_document(&self.document)?;
        for subscriber in &mut self.subscribers {
            subscriber(&self.document);
        }
        Ok(())
    }

    pub fn create_trip(&mut self, title: &str, date: &str) -> Result<String, AppError> {
        let trip = Trip::new(title, date);
        let id = trip.id.clone();
        info!("created trip {} ({})", trip.title, id);
        self.document.trips.push(trip);
        self.document.current_trip_id = Some(id.clone());
        self.commit()?;
        Ok(id)
    }

    /// Remove a trip. When it was the selected one, selection falls back
    /// to the first remaining trip, or to none.
    pub fn delete_trip(&mut self, trip_id: &str) -> Result<(), AppError> {
        if self.document.trip(trip_id).is_none() {
            return Err(AppError::TripNotFound);
        }
        self.document.trips.retain(|t| t.id != trip_id);
        self.document.repair_selection();
        info!("deleted trip {trip_id}");
        self.commit()
    }

    pub fn select_trip(&mut self, trip_id: &str) -> Result<(), AppError> {
        if self.document.trip(trip_id).is_none() {
            return Err(AppError::TripNotFound);
        }
        self.document.current_trip_id = Some(trip_id.to_string());
        self.commit()
    }

    pub fn create_expense(
        &mut self,
        trip_id: &str,
        category: Category,
        desc: &str,
        amount: f64,
    ) -> Result<String, AppError> {
        validate_amount(amount)?;
        let trip = self
            .document
            .trip_mut(trip_id)
            .ok_or(AppError::TripNotFound)?;
        let expense = Expense::new(category, desc, amount);
        let id = expense.id.clone();
        debug!("added expense {id} to trip {trip_id}");
        trip.expenses.push(expense);
        self.commit()?;
        Ok(id)
    }

    /// Replace the three mutable fields of an expense; id and ownership
    /// never change.
    pub fn edit_expense(
        &mut self,
        trip_id: &str,
        expense_id: &str,
        category: Category,
        desc: &str,
        amount: f64,
    ) -> Result<(), AppError> {
        validate_amount(amount)?;
        let trip = self
            .document
            .trip_mut(trip_id)
            .ok_or(AppError::TripNotFound)?;
        let expense = trip
            .expense_mut(expense_id)
            .ok_or(AppError::ExpenseNotFound)?;
        expense.category = category;
        expense.desc = normalize_desc(desc);
        expense.amount = amount;
        self.commit()
    }

    pub fn delete_expense(&mut self, trip_id: &str, expense_id: &str) -> Result<(), AppError> {
        let trip = self
            .document
            .trip_mut(trip_id)
            .ok_or(AppError::TripNotFound)?;
        let before = trip.expenses.len();
        trip.expenses.retain(|e| e.id != expense_id);
        if trip.expenses.len() == before {
            return Err(AppError::ExpenseNotFound);
        }
        self.commit()
    }

    /// Merge an external snapshot as a brand-new, freshly keyed trip and
    /// select it.
    pub fn import_trip(&mut self, raw_json: &str) -> Result<String, AppError> {
        let trip = import::reconcile(raw_json)?;
        let id = trip.id.clone();
        info!("imported trip {} ({})", trip.title, id);
        self.document.trips.push(trip);
        self.document.current_trip_id = Some(id.clone());
        self.commit()?;
        Ok(id)
    }

    /// First-run convenience carried over from the browser edition: an
    /// empty document gets a pre-filled Kyoto weekend trip.
    pub fn seed_demo_if_empty(&mut self) -> Result<(), AppError> {
        if !self.document.trips.is_empty() {
            return Ok(());
        }
        let mut demo = Trip::new("京都週末旅", "");
        demo.expenses = vec![
            Expense::new(Category::Transport, "新幹線往復", 14000.0),
            Expense::new(Category::Lodging, "ゲストハウス1泊", 8000.0),
            Expense::new(Category::Food, "夕食・昼食", 7000.0),
            Expense::new(Category::Sightseeing, "拝観料", 1200.0),
        ];
        self.document.current_trip_id = Some(demo.id.clone());
        self.document.trips.push(demo);
        self.commit()
    }
}

fn validate_amount(amount: f64) -> Result<(), AppError> {
    if amount.is_nan() || amount < 0.0 {
        Err(AppError::InvalidAmount)
    } else {
        Ok(())
    }
}
