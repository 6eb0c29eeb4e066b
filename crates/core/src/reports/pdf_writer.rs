use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::reports_model::{ReportTable, REPORT_TITLE};
use crate::errors::{Error, Result};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const TABLE_FONT_SIZE: f32 = 9.0;
const COLUMN_OFFSETS_MM: [f32; 5] = [0.0, 25.0, 65.0, 90.0, 125.0];
const LAYER_NAME: &str = "Table";

/// Text lines that fit between the top and bottom margins.
pub const LINES_PER_PAGE: usize = 44;
/// The title and the blank line below it.
const TITLE_LINES: usize = 2;
/// Characters per line in the description column before wrapping.
pub const DESCRIPTION_WIDTH_CHARS: usize = 40;

/// One table row as placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedRow {
    /// `None` for the header row, otherwise an index into `ReportTable::rows`.
    pub row: Option<usize>,
    /// The wrapped description; the row takes one text line per entry.
    pub description_lines: Vec<String>,
    /// True when this is the tail of a row that did not fit on the previous page.
    pub continued: bool,
}

impl PlacedRow {
    fn header() -> Self {
        Self {
            row: None,
            description_lines: Vec::new(),
            continued: false,
        }
    }

    pub fn height(&self) -> usize {
        self.description_lines.len().max(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub with_title: bool,
    pub rows: Vec<PlacedRow>,
}

impl PageLayout {
    pub fn lines_used(&self) -> usize {
        let title = if self.with_title { TITLE_LINES } else { 0 };
        title + self.rows.iter().map(PlacedRow::height).sum::<usize>()
    }
}

/// Splits `text` into lines of at most `width` characters, breaking on
/// whitespace and hard-splitting words longer than a line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for piece in chars.chunks(width) {
            if line_len > 0 && line_len + 1 + piece.len() > width {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(piece);
            line_len += piece.len();
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Lays the table out as a single header row followed by every data row,
/// continuing onto new pages as the line budget runs out.
///
/// The title and header appear on the first page only. A row moves to the
/// next page whole when it fits there; a row taller than a full page is
/// split, with the tail marked `continued`.
pub fn layout(table: &ReportTable) -> Vec<PageLayout> {
    let mut pages = Vec::new();
    let mut current = PageLayout {
        with_title: true,
        rows: vec![PlacedRow::header()],
    };
    let mut remaining = LINES_PER_PAGE - TITLE_LINES - 1;

    for (index, row) in table.rows.iter().enumerate() {
        let mut lines = wrap_text(&row.description, DESCRIPTION_WIDTH_CHARS);
        let mut continued = false;
        loop {
            let needed = lines.len().max(1);
            if needed > remaining && (needed <= LINES_PER_PAGE || remaining == 0) {
                pages.push(std::mem::take(&mut current));
                remaining = LINES_PER_PAGE;
            }
            let take = needed.min(remaining);
            let rest = if lines.len() > take {
                lines.split_off(take)
            } else {
                Vec::new()
            };
            current.rows.push(PlacedRow {
                row: Some(index),
                description_lines: lines,
                continued,
            });
            remaining -= take;
            if rest.is_empty() {
                break;
            }
            lines = rest;
            continued = true;
        }
    }

    pages.push(current);
    pages
}

/// Renders the table as an A4 PDF following [`layout`].
pub fn write_pdf(table: &ReportTable) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        REPORT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| Error::Report(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| Error::Report(e.to_string()))?;

    for (page_number, page) in layout(table).iter().enumerate() {
        let layer = if page_number == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
        if page.with_title {
            layer.use_text(REPORT_TITLE, TITLE_FONT_SIZE, Mm(MARGIN_MM), Mm(y), &bold);
            y -= LINE_HEIGHT_MM * TITLE_LINES as f32;
        }

        for placed in &page.rows {
            let Some(index) = placed.row else {
                draw_row(&layer, &bold, y, table.headers());
                y -= LINE_HEIGHT_MM;
                continue;
            };
            let Some(row) = table.rows.get(index) else {
                continue;
            };

            let mut cells = if placed.continued {
                [""; 5]
            } else {
                row.cells()
            };
            cells[4] = placed
                .description_lines
                .first()
                .map(String::as_str)
                .unwrap_or("");
            draw_row(&layer, &regular, y, cells);
            y -= LINE_HEIGHT_MM;

            for line in placed.description_lines.iter().skip(1) {
                layer.use_text(
                    line.as_str(),
                    TABLE_FONT_SIZE,
                    Mm(MARGIN_MM + COLUMN_OFFSETS_MM[4]),
                    Mm(y),
                    &regular,
                );
                y -= LINE_HEIGHT_MM;
            }
        }
    }

    doc.save_to_bytes().map_err(|e| Error::Report(e.to_string()))
}

fn draw_row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, cells: [&str; 5]) {
    for (cell, offset) in cells.iter().zip(COLUMN_OFFSETS_MM) {
        if !cell.is_empty() {
            layer.use_text(*cell, TABLE_FONT_SIZE, Mm(MARGIN_MM + offset), Mm(y), font);
        }
    }
}
