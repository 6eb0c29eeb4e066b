use csv::{QuoteStyle, WriterBuilder};

use super::reports_model::ReportTable;
use crate::errors::{Error, Result};

/// Writes the table as comma separated lines, header first.
///
/// Fields are never quoted. Commas inside descriptions become spaces so that
/// each line keeps exactly five columns.
pub fn write_csv(table: &ReportTable) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    writer
        .write_record(table.headers())
        .map_err(|e| Error::Report(e.to_string()))?;

    for row in &table.rows {
        let description = row.description.replace(',', " ");
        writer
            .write_record([
                row.date.as_str(),
                row.category.as_str(),
                row.amount.as_str(),
                row.payment_mode.as_str(),
                description.as_str(),
            ])
            .map_err(|e| Error::Report(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| Error::Report(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportRow;

    fn row(description: &str) -> ReportRow {
        ReportRow {
            date: "2024-03-01".to_string(),
            category: "Food".to_string(),
            amount: "12.00".to_string(),
            payment_mode: "Cash".to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_header_only_for_empty_table() {
        let bytes = write_csv(&ReportTable::default()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Date,Category,Amount,Payment Mode,Description\n"
        );
    }

    #[test]
    fn test_commas_in_description_are_replaced() {
        let table = ReportTable {
            rows: vec![row("bread, milk, eggs"), row("")],
        };
        let text = String::from_utf8(write_csv(&table).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2024-03-01,Food,12.00,Cash,bread  milk  eggs");
        assert_eq!(lines[2], "2024-03-01,Food,12.00,Cash,");
    }

    #[test]
    fn test_quotes_are_not_escaped() {
        let table = ReportTable {
            rows: vec![row("the \"good\" place")],
        };
        let text = String::from_utf8(write_csv(&table).unwrap()).unwrap();
        assert!(text.ends_with("Cash,the \"good\" place\n"));
    }
}
