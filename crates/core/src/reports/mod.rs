//! Reports module - exports a user's expenses as CSV or PDF.

mod csv_writer;
mod pdf_writer;
mod reports_model;
mod reports_service;
mod reports_traits;


pub use csv_writer::write_csv;
pub use pdf_writer::{
    layout, wrap_text, write_pdf, PageLayout, PlacedRow, DESCRIPTION_WIDTH_CHARS, LINES_PER_PAGE,
};
pub use reports_model::{ReportRow, ReportTable, REPORT_HEADERS, REPORT_TITLE};
pub use reports_service::ReportService;
pub use reports_traits::ReportServiceTrait;
