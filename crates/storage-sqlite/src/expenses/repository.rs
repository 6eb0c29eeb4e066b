use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use fintrack_core::expenses::{Expense, ExpenseRepositoryTrait, ExpenseUpdate, NewExpense};
use fintrack_core::{Error, Result};

use super::model::{ExpenseChangesDB, ExpenseDB, NewExpenseDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::expenses;
use crate::schema::expenses::dsl::*;

pub struct ExpenseRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ExpenseRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ExpenseRepository { pool, writer }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ExpenseRepository {
    fn list_by_user(&self, owner_id: i64) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses
            .filter(user_id.eq(owner_id))
            .order((expense_date.desc(), id.desc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn list_by_user_between(
        &self,
        owner_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = expenses
            .filter(user_id.eq(owner_id))
            .filter(expense_date.between(start, end))
            .order((expense_date.desc(), id.desc()))
            .select(ExpenseDB::as_select())
            .load::<ExpenseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn find_by_id_and_user(&self, expense_id: i64, owner_id: i64) -> Result<Option<Expense>> {
        let mut conn = get_connection(&self.pool)?;
        let row = expenses
            .filter(id.eq(expense_id))
            .filter(user_id.eq(owner_id))
            .select(ExpenseDB::as_select())
            .first::<ExpenseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Expense::from))
    }

    async fn insert_new_expense(&self, new_expense: NewExpense) -> Result<Expense> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let new_expense_db: NewExpenseDB = new_expense.into();
                let result_db = diesel::insert_into(expenses::table)
                    .values(&new_expense_db)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn update_expense(&self, update: ExpenseUpdate) -> Result<Expense> {
        let expense_id = update.id;
        let changes: ExpenseChangesDB = update.into();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Expense> {
                let result_db = diesel::update(expenses.find(expense_id))
                    .set(&changes)
                    .returning(ExpenseDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| Error::not_found("Expense not found"))?;
                Ok(Expense::from(result_db))
            })
            .await
    }

    async fn delete_expense(&self, expense_id: i64) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(expenses.find(expense_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{insert_user, setup_db};
    use rust_decimal_macros::dec;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_expense(owner_id: i64, on: NaiveDate, value: rust_decimal::Decimal) -> NewExpense {
        NewExpense {
            user_id: owner_id,
            category_id: 1,
            amount: value,
            description: Some("coffee".to_string()),
            date: on,
            payment_mode: "Card".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list_ordering() {
        let (pool, writer, _dir) = setup_db();
        let alice = insert_user(&pool, "alice@example.com");
        let bob = insert_user(&pool, "bob@example.com");
        let repo = ExpenseRepository::new(pool, writer);

        let first = repo
            .insert_new_expense(new_expense(alice, day(2024, 1, 10), dec!(3.50)))
            .await
            .unwrap();
        let second = repo
            .insert_new_expense(new_expense(alice, day(2024, 3, 1), dec!(12.00)))
            .await
            .unwrap();
        let third = repo
            .insert_new_expense(new_expense(alice, day(2024, 3, 1), dec!(1.25)))
            .await
            .unwrap();
        repo.insert_new_expense(new_expense(bob, day(2024, 2, 1), dec!(99.00)))
            .await
            .unwrap();

        assert_eq!(first.amount, dec!(3.50));
        assert_eq!(first.amount.to_string(), "3.50");

        let ids: Vec<i64> = repo
            .list_by_user(alice)
            .unwrap()
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[tokio::test]
    async fn test_list_between_is_inclusive() {
        let (pool, writer, _dir) = setup_db();
        let alice = insert_user(&pool, "alice@example.com");
        let repo = ExpenseRepository::new(pool, writer);

        for on in [day(2024, 1, 31), day(2024, 2, 1), day(2024, 2, 29), day(2024, 3, 1)] {
            repo.insert_new_expense(new_expense(alice, on, dec!(1)))
                .await
                .unwrap();
        }

        let dates: Vec<NaiveDate> = repo
            .list_by_user_between(alice, day(2024, 2, 1), day(2024, 2, 29))
            .unwrap()
            .iter()
            .map(|e| e.date)
            .collect();
        assert_eq!(dates, vec![day(2024, 2, 29), day(2024, 2, 1)]);
    }

    #[tokio::test]
    async fn test_find_is_scoped_to_owner() {
        let (pool, writer, _dir) = setup_db();
        let alice = insert_user(&pool, "alice@example.com");
        let bob = insert_user(&pool, "bob@example.com");
        let repo = ExpenseRepository::new(pool, writer);

        let created = repo
            .insert_new_expense(new_expense(alice, day(2024, 1, 1), dec!(5)))
            .await
            .unwrap();
        assert!(repo.find_by_id_and_user(created.id, alice).unwrap().is_some());
        assert!(repo.find_by_id_and_user(created.id, bob).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (pool, writer, _dir) = setup_db();
        let alice = insert_user(&pool, "alice@example.com");
        let repo = ExpenseRepository::new(pool, writer);

        let created = repo
            .insert_new_expense(new_expense(alice, day(2024, 1, 1), dec!(5)))
            .await
            .unwrap();
        let updated = repo
            .update_expense(ExpenseUpdate {
                id: created.id,
                category_id: 7,
                amount: dec!(6.75),
                description: None,
                date: day(2024, 1, 2),
                payment_mode: "Cash".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.user_id, alice);
        assert_eq!(updated.category_id, 7);
        assert_eq!(updated.amount, dec!(6.75));
        assert_eq!(updated.description, None);
        assert_eq!(updated.created_at, created.created_at);

        assert_eq!(repo.delete_expense(created.id).await.unwrap(), 1);
        assert!(repo.list_by_user(alice).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_of_deleted_expense_is_not_found() {
        let (pool, writer, _dir) = setup_db();
        let alice = insert_user(&pool, "alice@example.com");
        let repo = ExpenseRepository::new(pool, writer);

        let created = repo
            .insert_new_expense(new_expense(alice, day(2024, 1, 1), dec!(5)))
            .await
            .unwrap();
        repo.delete_expense(created.id).await.unwrap();

        let err = repo
            .update_expense(ExpenseUpdate {
                id: created.id,
                category_id: 1,
                amount: dec!(1),
                description: None,
                date: day(2024, 1, 1),
                payment_mode: "Card".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(ref m) if m == "Expense not found"));
        assert_eq!(repo.delete_expense(created.id).await.unwrap(), 0);
    }
}
