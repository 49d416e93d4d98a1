//! Plain-text result table.

use movie_search_core::models::ScoredResult;

const HEADERS: [&str; 3] = ["title", "plot", "similarity"];
const ELLIPSIS: &str = "...";

/// Clip `text` to `max_width` characters, ending in `...` when clipped.
/// Newlines become spaces so each result stays on one line.
pub fn clip(text: &str, max_width: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    if flat.chars().count() <= max_width {
        return flat;
    }
    let keep = max_width.saturating_sub(ELLIPSIS.len());
    let mut out: String = flat.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Render results as an aligned table: text columns left-aligned,
/// similarity right-aligned with four decimals.
pub fn render_table(results: &[ScoredResult], max_colwidth: usize) -> String {
    if results.is_empty() {
        return "No results.\n".to_string();
    }

    let rows: Vec<[String; 3]> = results
        .iter()
        .map(|r| {
            [
                clip(&r.title, max_colwidth),
                clip(&r.plot, max_colwidth),
                format!("{:.4}", r.similarity),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: [&str; 3]| {
        let line = format!(
            "{:<tw$}  {:<pw$}  {:>sw$}",
            cells[0],
            cells[1],
            cells[2],
            tw = widths[0],
            pw = widths[1],
            sw = widths[2],
        );
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(HEADERS);
    for row in &rows {
        push_line([row[0].as_str(), row[1].as_str(), row[2].as_str()]);
    }

    out
}
