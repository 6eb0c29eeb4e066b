//! SQLite storage implementation for expenses.

mod model;
mod repository;

pub use model::{ExpenseChangesDB, ExpenseDB, NewExpenseDB};
pub use repository::ExpenseRepository;
