//! In-memory repositories shared by the unit tests.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::sync::Mutex;

use crate::categories::{Category, CategoryRepositoryTrait, NewCategory};
use crate::errors::{Error, Result};
use crate::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use crate::users::User;

pub fn user(id: i64) -> User {
    User {
        id,
        name: format!("user-{id}"),
        email: format!("user{id}@example.com"),
        password_hash: "hash".to_string(),
        role: "USER".to_string(),
        created_at: Utc::now().naive_utc(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn expense(id: i64, user_id: i64, category_id: i64, amount: Decimal, on: NaiveDate) -> Expense {
    let now = Utc::now().naive_utc();
    Expense {
        id,
        user_id,
        category_id,
        amount,
        description: None,
        date: on,
        payment_mode: "Card".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[derive(Default)]
pub struct InMemoryCategoryRepository {
    pub categories: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepository {
    pub fn with(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for InMemoryCategoryRepository {
    fn get_default_categories(&self) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id.is_none())
            .cloned()
            .collect())
    }

    fn get_user_categories(&self, user_id: i64) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    fn get_category_by_id(&self, category_id: i64) -> Result<Option<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == category_id)
            .cloned())
    }

    fn exists_default_by_name(&self, name: &str) -> Result<bool> {
        Ok(self
            .get_default_categories()?
            .iter()
            .any(|c| c.name == name))
    }

    fn exists_by_name_and_user(&self, name: &str, user_id: i64) -> Result<bool> {
        Ok(self
            .get_user_categories(user_id)?
            .iter()
            .any(|c| c.name == name))
    }

    async fn create_category(&self, new_category: NewCategory) -> Result<Category> {
        let mut categories = self.categories.lock().unwrap();
        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category {
            id,
            name: new_category.name,
            description: new_category.description,
            user_id: new_category.user_id,
        };
        categories.push(category.clone());
        Ok(category)
    }

    async fn delete_category(&self, category_id: i64) -> Result<usize> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != category_id);
        Ok(before - categories.len())
    }
}

#[derive(Default)]
pub struct InMemoryExpenseRepository {
    pub expenses: Mutex<Vec<Expense>>,
}

impl InMemoryExpenseRepository {
    pub fn with(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: Mutex::new(expenses),
        }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for InMemoryExpenseRepository {
    fn list_by_user(&self, user_id: i64) -> Result<Vec<Expense>> {
        let mut found: Vec<Expense> = self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(found)
    }

    fn list_by_user_between(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        Ok(self
            .list_by_user(user_id)?
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }

    fn find_by_id_and_user(&self, expense_id: i64, user_id: i64) -> Result<Option<Expense>> {
        Ok(self
            .expenses
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.id == expense_id && e.user_id == user_id)
            .cloned())
    }

    async fn insert_new_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        let mut expenses = self.expenses.lock().unwrap();
        let id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let now = Utc::now().naive_utc();
        let expense = Expense {
            id,
            user_id: new_expense.user_id,
            category_id: new_expense.category_id,
            amount: new_expense.amount,
            description: new_expense.description,
            date: new_expense.date,
            payment_mode: new_expense.payment_mode,
            created_at: now,
            updated_at: now,
        };
        expenses.push(expense.clone());
        Ok(expense)
    }

    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense> {
        let mut expenses = self.expenses.lock().unwrap();
        let existing = expenses
            .iter_mut()
            .find(|e| e.id == update.id)
            .ok_or_else(|| Error::not_found("Expense not found"))?;
        existing.category_id = update.category_id;
        existing.amount = update.amount;
        existing.description = update.description;
        existing.date = update.date;
        existing.payment_mode = update.payment_mode;
        existing.updated_at = Utc::now().naive_utc();
        Ok(existing.clone())
    }

    async fn delete_expense(&self, expense_id: i64) -> Result<usize> {
        let mut expenses = self.expenses.lock().unwrap();
        let before = expenses.len();
        expenses.retain(|e| e.id != expense_id);
        Ok(before - expenses.len())
    }
}
