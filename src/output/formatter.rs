use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::compute::Standings;
use crate::standings::{EntrantStanding, SchoolStanding};

const SEPARATOR: &str = "  ";

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a cell to fit available width, accounting for Unicode
fn truncate_cell(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the entrant standings as an aligned table with a header row.
/// Columns: Entry, School, Tournaments, one column per tournament in
/// first-seen order, Total.
pub fn format_entrant_table(
    standings: &[EntrantStanding],
    tournaments: &[String],
    use_colors: bool,
) -> String {
    if standings.is_empty() {
        return "No results found.".to_string();
    }

    let mut headers = vec![
        "Entry".to_string(),
        "School".to_string(),
        "Tournaments".to_string(),
    ];
    headers.extend(tournaments.iter().cloned());
    headers.push("Total".to_string());

    let rows: Vec<Vec<String>> = standings
        .iter()
        .map(|s| {
            let mut row = vec![
                s.entrant_id.clone(),
                s.school.clone(),
                s.tournaments_attended.to_string(),
            ];
            row.extend(tournaments.iter().map(|t| s.points_in(t).to_string()));
            row.push(s.total_points.to_string());
            row
        })
        .collect();

    render_table(&headers, &rows, 2, use_colors)
}

/// Format the school standings as an aligned table with a header row.
/// Columns: School, one column per tournament in first-seen order, Total.
pub fn format_school_table(
    standings: &[SchoolStanding],
    tournaments: &[String],
    use_colors: bool,
) -> String {
    if standings.is_empty() {
        return "No results found.".to_string();
    }

    let mut headers = vec!["School".to_string()];
    headers.extend(tournaments.iter().cloned());
    headers.push("Total".to_string());

    let rows: Vec<Vec<String>> = standings
        .iter()
        .map(|s| {
            let mut row = vec![s.school.clone()];
            row.extend(tournaments.iter().map(|t| s.points_in(t).to_string()));
            row.push(s.total_points.to_string());
            row
        })
        .collect();

    render_table(&headers, &rows, 1, use_colors)
}

/// Render an aligned table. Columns at or past `numeric_from` are
/// right-aligned. The first column shrinks to the terminal when the full
/// table would not otherwise fit; in a pipe nothing is truncated.
fn render_table(
    headers: &[String],
    rows: &[Vec<String>],
    numeric_from: usize,
    use_colors: bool,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    if let Some(term_width) = get_terminal_width() {
        let fixed: usize =
            widths[1..].iter().sum::<usize>() + SEPARATOR.len() * (widths.len() - 1);
        if fixed + widths[0] > term_width && term_width > fixed + 10 {
            widths[0] = term_width - fixed;
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let header_line = format_row(headers, &widths, numeric_from);
    if use_colors {
        lines.push(header_line.bold().to_string());
    } else {
        lines.push(header_line);
    }
    for row in rows {
        lines.push(format_row(row, &widths, numeric_from));
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize], numeric_from: usize) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let cell = truncate_cell(cell, widths[i]);
            if i >= numeric_from {
                format!("{:>width$}", cell, width = widths[i])
            } else {
                format!("{:<width$}", cell, width = widths[i])
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Format the entrant standings as tab-separated values for scripting.
/// One header line (the per-tournament columns depend on the dataset),
/// then one line per entrant, no colors.
pub fn format_entrant_tsv(standings: &[EntrantStanding], tournaments: &[String]) -> String {
    if standings.is_empty() {
        return String::new();
    }

    let mut header = vec!["entry", "school", "tournaments"];
    header.extend(tournaments.iter().map(String::as_str));
    header.push("total");

    let mut lines = vec![header.join("\t")];
    for s in standings {
        let mut cells = vec![
            s.entrant_id.clone(),
            s.school.clone(),
            s.tournaments_attended.to_string(),
        ];
        cells.extend(tournaments.iter().map(|t| s.points_in(t).to_string()));
        cells.push(s.total_points.to_string());
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}

/// Format the school standings as tab-separated values for scripting.
pub fn format_school_tsv(standings: &[SchoolStanding], tournaments: &[String]) -> String {
    if standings.is_empty() {
        return String::new();
    }

    let mut header = vec!["school"];
    header.extend(tournaments.iter().map(String::as_str));
    header.push("total");

    let mut lines = vec![header.join("\t")];
    for s in standings {
        let mut cells = vec![s.school.clone()];
        cells.extend(tournaments.iter().map(|t| s.points_in(t).to_string()));
        cells.push(s.total_points.to_string());
        lines.push(cells.join("\t"));
    }
    lines.join("\n")
}

/// Serialize the full standings (both tables plus the tournament column
/// order) as one pretty-printed JSON document.
pub fn format_json(standings: &Standings) -> Result<String> {
    Ok(serde_json::to_string_pretty(standings)?)
}
