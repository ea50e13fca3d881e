pub mod category;
pub mod document;
pub mod expense;
pub mod trip;
