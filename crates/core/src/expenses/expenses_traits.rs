use crate::errors::Result;
use crate::expenses::expenses_model::{
    Expense, ExpenseRequest, ExpenseResponse, ExpenseUpdate, NewExpense,
};
use crate::users::User;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for expense repository operations
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    /// All of a user's expenses, newest date first.
    fn list_by_user(&self, user_id: i64) -> Result<Vec<Expense>>;
    /// A user's expenses dated within `[start, end]`, both ends inclusive.
    fn list_by_user_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>>;
    fn find_by_id_and_user(&self, expense_id: i64, user_id: i64) -> Result<Option<Expense>>;
    async fn insert_new_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense>;
    async fn delete_expense(&self, expense_id: i64) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn create_expense(&self, user: &User, request: ExpenseRequest)
        -> Result<ExpenseResponse>;
    fn get_expenses(&self, user: &User) -> Result<Vec<ExpenseResponse>>;
    fn get_expense(&self, user: &User, expense_id: i64) -> Result<ExpenseResponse>;
    async fn update_expense(
        &self,
        user: &User,
        expense_id: i64,
        request: ExpenseRequest,
    ) -> Result<ExpenseResponse>;
    async fn delete_expense(&self, user: &User, expense_id: i64) -> Result<()>;
}
