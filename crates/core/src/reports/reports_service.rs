use log::{debug, error};
use std::collections::HashMap;
use std::sync::Arc;

use super::csv_writer::write_csv;
use super::pdf_writer::write_pdf;
use super::reports_model::{ReportRow, ReportTable};
use super::reports_traits::ReportServiceTrait;
use crate::categories::CategoryRepositoryTrait;
use crate::constants::UNKNOWN_CATEGORY_NAME;
use crate::errors::Result;
use crate::expenses::ExpenseRepositoryTrait;
use crate::users::User;

pub struct ReportService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        Self {
            expense_repository,
            category_repository,
        }
    }
}

impl ReportServiceTrait for ReportService {
    fn build_report_table(&self, user: &User) -> Result<ReportTable> {
        let expenses = self.expense_repository.list_by_user(user.id)?;
        let mut names: HashMap<i64, String> = HashMap::new();
        let mut rows = Vec::with_capacity(expenses.len());

        for expense in &expenses {
            let name = match names.get(&expense.category_id) {
                Some(name) => name.clone(),
                None => {
                    let name = self
                        .category_repository
                        .get_category_by_id(expense.category_id)?
                        .map(|category| category.name)
                        .unwrap_or_else(|| UNKNOWN_CATEGORY_NAME.to_string());
                    names.insert(expense.category_id, name.clone());
                    name
                }
            };
            rows.push(ReportRow::from_expense(expense, name));
        }

        debug!("Built report with {} rows for user {}", rows.len(), user.id);
        Ok(ReportTable { rows })
    }

    fn export_csv(&self, user: &User) -> Result<Vec<u8>> {
        let table = self.build_report_table(user)?;
        write_csv(&table)
    }

    fn export_pdf(&self, user: &User) -> Result<Vec<u8>> {
        let table = self.build_report_table(user)?;
        write_pdf(&table).inspect_err(|e| error!("Failed to render PDF report: {}", e))
    }
}
