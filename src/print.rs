//! Printable Export
//!
//! Renders an export snapshot as a paginated HTML document and hands it
//! to the browser's print dialog (which also saves to PDF).

use chrono::{Local, NaiveDate};
use ingredient_lists_core::{format_quantity, ExportRow, ExportSnapshot, ListId, ListStore};

const PRINT_STYLE: &str = "\
body { font-family: Arial, sans-serif; color: #000; margin: 20px; }\
h1 { color: #1976d2; margin: 0 0 8px 0; font-size: 24px; }\
header p { margin: 0 0 4px 0; color: #666; font-size: 14px; }\
table.page { width: 100%; border-collapse: collapse; margin-top: 20px; }\
table.page + table.page { page-break-before: always; }\
th { background: #1976d2; color: #fff; padding: 10px; border: 1px solid #ddd; text-align: left; }\
td { padding: 10px; border: 1px solid #ddd; font-size: 14px; }\
tr.category td { font-weight: bold; color: #1976d2; background: #f9f9f9; }\
td.item { padding-left: 32px; }\
td.quantity { text-align: center; }\
p.empty { text-align: center; padding: 40px; color: #666; }";

/// Split rows into pages of at most `rows_per_page` rows
///
/// A category header never ends a page; it moves to the next one with
/// its first item.
pub fn paginate<'a>(
    rows: impl IntoIterator<Item = ExportRow<'a>>,
    rows_per_page: usize,
) -> Vec<Vec<ExportRow<'a>>> {
    let per_page = rows_per_page.max(1);
    let mut pages = Vec::new();
    let mut page: Vec<ExportRow<'a>> = Vec::with_capacity(per_page);

    for row in rows {
        let full = page.len() >= per_page;
        let orphan = per_page > 1 && row.is_category() && page.len() + 1 == per_page;
        if full || orphan {
            pages.push(std::mem::take(&mut page));
        }
        page.push(row);
    }
    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

/// `<head>` and `<body>` of the printable document
pub fn render_document(
    snapshot: &ExportSnapshot<'_>,
    rows_per_page: usize,
    generated_on: NaiveDate,
) -> String {
    let title = format!("{} - Ingredient List", escape_html(&snapshot.list().name));
    let mut html = String::new();

    html.push_str(&format!(
        "<head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body>",
        title, PRINT_STYLE
    ));
    html.push_str(&format!(
        "<header><h1>{}</h1><p class=\"people\">For {} people</p><p class=\"date\">Generated on: {}</p></header>",
        title,
        snapshot.number_of_people(),
        generated_on.format("%Y-%m-%d")
    ));

    if snapshot.is_empty() {
        html.push_str("<p class=\"empty\">No ingredients in this list.</p>");
    } else {
        for page in paginate(snapshot.rows(), rows_per_page) {
            html.push_str(
                "<table class=\"page\"><thead><tr><th>Ingredient</th><th>Quantity</th><th>Unit</th></tr></thead><tbody>",
            );
            for row in &page {
                html.push_str(&render_row(row));
            }
            html.push_str("</tbody></table>");
        }
    }

    html.push_str("</body>");
    html
}

fn render_row(row: &ExportRow<'_>) -> String {
    match row {
        ExportRow::Category { name } => format!(
            "<tr class=\"category\"><td>{}</td><td class=\"quantity\">-</td><td>-</td></tr>",
            escape_html(name)
        ),
        ExportRow::Item { name, quantity, unit } => format!(
            "<tr><td class=\"item\">&bull; {}</td><td class=\"quantity\">{}</td><td>{}</td></tr>",
            escape_html(name),
            format_quantity(*quantity),
            escape_html(unit)
        ),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// ========================
// Browser
// ========================

/// Render a list and open the print dialog for it
pub fn export_list(store: &ListStore, list_id: &ListId, rows_per_page: usize) -> Result<(), String> {
    let snapshot = store.export_snapshot(list_id).map_err(|e| e.to_string())?;
    let html = render_document(&snapshot, rows_per_page, Local::now().date_naive());
    log::info!(
        "[EXPORT] Printing {:?} for {} people",
        snapshot.list().name,
        snapshot.number_of_people()
    );
    print_html(&html)
}

fn print_html(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No browser window")?;
    let popup = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("Failed to open print window: {:?}", e))?
        .ok_or("Pop-up blocked. Please allow pop-ups to export PDF.")?;
    let root = popup
        .document()
        .and_then(|d| d.document_element())
        .ok_or("Print window has no document")?;
    root.set_inner_html(html);
    popup
        .print()
        .map_err(|e| format!("Failed to print: {:?}", e))
}
