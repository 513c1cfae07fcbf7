//! Non-interactive listing of the filtered products.

use unicode_width::UnicodeWidthStr;

use crate::catalog::EnrichedProduct;
use crate::state::AppState;

/// Shown instead of a table when no product passes the filters.
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

/// Pad `s` with spaces up to `width` terminal columns.
fn pad(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(s.width())));
    out
}

/// What: Render products as an aligned plain-text table.
///
/// Inputs:
/// - `items`: Products in display order.
///
/// Output:
/// - Header line plus one line per product (ID, Product, Category, User), columns aligned by
///   display width; the no-matches message when `items` is empty.
///
/// Details:
/// - Absent category/owner render as empty cells; trailing spaces are trimmed per line.
#[must_use]
pub fn format_listing(items: &[EnrichedProduct]) -> String {
    if items.is_empty() {
        return format!("{NO_MATCHES_MESSAGE}\n");
    }
    let header = ["ID", "Product", "Category", "User"];
    let rows: Vec<[String; 4]> = items
        .iter()
        .map(|p| {
            [
                p.id().to_string(),
                p.name().to_string(),
                p.category_label(),
                p.owner_name().to_string(),
            ]
        })
        .collect();
    let mut widths = header.map(UnicodeWidthStr::width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: [&str; 4]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad(cell, w))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };
    push_line(header);
    for row in &rows {
        push_line([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]);
    }
    out
}

/// What: Render products as a pretty JSON array of enriched records.
///
/// Output:
/// - JSON text, or the serialization error.
///
/// # Errors
/// - Returns `Err` when `serde_json` fails to serialize a record
pub fn format_json(items: &[EnrichedProduct]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}

/// What: Print the current result list and exit.
///
/// Inputs:
/// - `app`: State with criteria and sort already applied.
/// - `json`: Print JSON instead of the text table.
///
/// Output:
/// - Exits the process with 0 on success, 1 if JSON serialization fails.
///
/// Details:
/// - Exits immediately after listing (doesn't launch TUI).
pub fn handle_list(app: &AppState, json: bool) -> ! {
    tracing::info!(count = app.results.len(), json = json, "listing products");
    if json {
        match format_json(&app.results) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("failed to serialize products: {e}");
                tracing::error!(error = %e, "failed to serialize products");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", format_listing(&app.results));
    }
    std::process::exit(0);
}
