//! Plain-text rendering of the browser: filter panel and product table.

use std::fmt::Write as _;

use crate::browser::ProductBrowser;
use crate::catalog::EnrichedProduct;

pub const NO_MATCHES: &str = "No products matching selected criteria";

const HEADERS: [&str; 4] = ["ID", "Product", "Category", "User"];
const MISSING: &str = "-";

fn row_cells(product: &EnrichedProduct) -> [String; 4] {
    let user = match product.user() {
        Some(user) if user.is_female() => format!("{} (f)", user.name),
        Some(user) => user.name.clone(),
        None => MISSING.to_string(),
    };

    [
        product.id().to_string(),
        product.name().to_string(),
        product
            .category_label()
            .unwrap_or_else(|| MISSING.to_string()),
        user,
    ]
}

/// Renders `products` as an aligned table, or [`NO_MATCHES`] when empty.
pub fn render_table(products: &[&EnrichedProduct]) -> String {
    if products.is_empty() {
        return NO_MATCHES.to_string();
    }

    let rows: Vec<[String; 4]> = products.iter().map(|p| row_cells(p)).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Renders the owner tabs (active one bracketed) and the current search text.
pub fn render_filters(browser: &ProductBrowser) -> String {
    let tabs: Vec<String> = browser
        .owner_tabs()
        .into_iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                tab.label
            }
        })
        .collect();

    format!(
        "Owner: {}\nSearch: {:?}\n",
        tabs.join(" "),
        browser.search_query()
    )
}

/// Full view: filter panel, a blank line, then the table or the empty message.
pub fn render(browser: &ProductBrowser) -> String {
    let mut out = render_filters(browser);
    out.push('\n');
    out.push_str(&render_table(&browser.visible_products()));
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
