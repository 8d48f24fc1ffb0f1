//! Console output formatter for directory pages

use crate::table::{
    EMPTY_MESSAGE, NavItem, advocate_columns, cell_lines, column_widths, navigation_items,
};
use advocates_application::BrowseSession;
use advocates_domain::{Advocate, Page, PaginationMetadata};
use colored::Colorize;

const COLUMN_GAP: &str = "  ";

/// Formats a browse session for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force plain output when color is disabled in the configuration.
    ///
    /// When enabled, `colored` still decides based on the terminal.
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Table, summary and navigation line for the loaded page
    pub fn format(session: &BrowseSession) -> String {
        let mut output = String::new();

        if let Some(error) = session.error() {
            output.push_str(&format!("{}\n", error.red().bold()));
        }

        if !session.search().is_empty() {
            output.push_str(&format!(
                "{} {}\n\n",
                "Searching for:".cyan().bold(),
                session.search()
            ));
        }

        output.push_str(&Self::format_rows(session.visible()));

        if let Some(summary) = session.summary() {
            output.push_str(&format!("\n{}\n", summary.dimmed()));
        }
        if let Some(pagination) = session.pagination() {
            output.push_str(&Self::navigation_line(pagination));
            output.push('\n');
        }

        output
    }

    /// Visible rows with the page's metadata, as pretty JSON
    pub fn format_json(session: &BrowseSession) -> String {
        let Some(pagination) = session.pagination() else {
            return "{}".to_string();
        };
        let page = Page::new(session.visible().to_vec(), *pagination);
        serde_json::to_string_pretty(&page).unwrap_or_else(|_| "{}".to_string())
    }

    /// Header, separator and one (possibly multi-line) row per advocate
    pub fn format_rows(rows: &[Advocate]) -> String {
        let columns = advocate_columns();
        let cells = cell_lines(&columns, rows);
        let widths = column_widths(&columns, &cells);

        let mut output = String::new();

        let header = columns
            .iter()
            .zip(&widths)
            .map(|(c, &w)| format!("{:<w$}", c.header))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        output.push_str(&format!("{}\n", header.trim_end().cyan().bold()));

        let rule_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
        output.push_str(&format!("{}\n", "─".repeat(rule_width).dimmed()));

        if cells.is_empty() {
            output.push_str(&format!("{}\n", EMPTY_MESSAGE.yellow()));
            return output;
        }

        for row in &cells {
            let height = row.iter().map(Vec::len).max().unwrap_or(0).max(1);
            for line_idx in 0..height {
                let line = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &w)| {
                        let text = cell.get(line_idx).map(String::as_str).unwrap_or("");
                        format!("{text:<w$}")
                    })
                    .collect::<Vec<_>>()
                    .join(COLUMN_GAP);
                output.push_str(line.trim_end());
                output.push('\n');
            }
        }

        output
    }

    /// `‹ Previous  1 [2] 3  Next ›`, disabled controls dimmed
    pub fn navigation_line(pagination: &PaginationMetadata) -> String {
        let items = navigation_items(pagination);
        let render = |item: &NavItem| {
            if item.current {
                format!("[{}]", item.label).bold().to_string()
            } else if item.enabled {
                item.label.clone()
            } else {
                item.label.dimmed().to_string()
            }
        };

        // Always [Previous, pages.., Next]
        let (previous, next) = (&items[0], &items[items.len() - 1]);
        let pages = items[1..items.len() - 1]
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join(" ");

        if pages.is_empty() {
            format!("{}  {}", render(previous), render(next))
        } else {
            format!("{}  {}  {}", render(previous), pages, render(next))
        }
    }
}
