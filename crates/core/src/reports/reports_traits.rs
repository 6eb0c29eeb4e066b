use super::reports_model::ReportTable;
use crate::errors::Result;
use crate::users::User;

/// Trait for report service operations
pub trait ReportServiceTrait: Send + Sync {
    /// Every expense of the user, newest first, with category names resolved.
    fn build_report_table(&self, user: &User) -> Result<ReportTable>;
    fn export_csv(&self, user: &User) -> Result<Vec<u8>>;
    fn export_pdf(&self, user: &User) -> Result<Vec<u8>>;
}
