//! Plain-text rendering of the inventory listing.

use crate::types::InventoryItemView;

const HEADERS: [&str; 3] = ["ID", "Name", "Quantity"];

/// Render items as an aligned `ID | Name | Quantity` table.
pub fn render_table(items: &[InventoryItemView]) -> String {
    let rows: Vec<[String; 3]> = items
        .iter()
        .map(|i| [i.id.to_string(), i.name.clone(), i.quantity.to_string()])
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 3]| {
        cells
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(HEADERS));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &rows {
        out.push_str(&line([row[0].as_str(), row[1].as_str(), row[2].as_str()]));
        out.push('\n');
    }
    out
}
