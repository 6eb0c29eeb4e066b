//! Expenses module - ownership-scoped CRUD over dated, categorized amounts.

mod expenses_model;
mod expenses_service;
mod expenses_traits;


pub use expenses_model::{
    Expense, ExpenseInput, ExpenseRequest, ExpenseResponse, ExpenseUpdate, NewExpense,
};
pub use expenses_service::ExpenseService;
pub use expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
