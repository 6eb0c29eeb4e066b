use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::expenses_model::{
    Expense, ExpenseRequest, ExpenseResponse, ExpenseUpdate, NewExpense,
};
use super::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::errors::{Error, Result};
use crate::users::User;
use crate::utils::time_utils::local_today;

/// Service for managing a user's expenses
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        Self { repository }
    }

    /// Loads an expense only if `user` owns it.
    ///
    /// Someone else's expense is reported as missing so that its existence is
    /// not confirmed.
    fn owned_expense(&self, user: &User, expense_id: i64) -> Result<Expense> {
        self.repository
            .find_by_id_and_user(expense_id, user.id)?
            .ok_or_else(|| Error::not_found("Expense not found"))
    }
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn create_expense(
        &self,
        user: &User,
        request: ExpenseRequest,
    ) -> Result<ExpenseResponse> {
        let input = request.validate(local_today())?;
        let created = self
            .repository
            .insert_new_expense(NewExpense {
                user_id: user.id,
                category_id: input.category_id,
                amount: input.amount,
                description: input.description,
                date: input.date,
                payment_mode: input.payment_mode,
            })
            .await?;
        debug!("User {} created expense {}", user.id, created.id);
        Ok(ExpenseResponse::from(created))
    }

    fn get_expenses(&self, user: &User) -> Result<Vec<ExpenseResponse>> {
        let expenses = self.repository.list_by_user(user.id)?;
        Ok(expenses.into_iter().map(ExpenseResponse::from).collect())
    }

    fn get_expense(&self, user: &User, expense_id: i64) -> Result<ExpenseResponse> {
        self.owned_expense(user, expense_id)
            .map(ExpenseResponse::from)
    }

    async fn update_expense(
        &self,
        user: &User,
        expense_id: i64,
        request: ExpenseRequest,
    ) -> Result<ExpenseResponse> {
        let existing = self.owned_expense(user, expense_id)?;
        let input = request.validate(local_today())?;
        let updated = self
            .repository
            .update_expense(ExpenseUpdate {
                id: existing.id,
                category_id: input.category_id,
                amount: input.amount,
                description: input.description,
                date: input.date,
                payment_mode: input.payment_mode,
            })
            .await?;
        Ok(ExpenseResponse::from(updated))
    }

    async fn delete_expense(&self, user: &User, expense_id: i64) -> Result<()> {
        let existing = self.owned_expense(user, expense_id)?;
        if self.repository.delete_expense(existing.id).await? == 0 {
            return Err(Error::not_found("Expense not found"));
        }
        debug!("User {} deleted expense {}", user.id, existing.id);
        Ok(())
    }
}
