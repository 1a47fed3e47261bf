//! Plain-text tables and colored progress bars.

use colored::Colorize;
use macros_core::{DiaryReport, FoodDefinition, ProgressIndicator};

const COLUMN_GAP: &str = "  ";
const LABEL_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

struct Column {
    header: &'static str,
    align: Align,
}

const fn left(header: &'static str) -> Column {
    Column {
        header,
        align: Align::Left,
    }
}

const fn right(header: &'static str) -> Column {
    Column {
        header,
        align: Align::Right,
    }
}

/// Header, dashed rule, then one line per row.
fn table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_line = |cells: Vec<&str>| -> String {
        let line = cells
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (column, &width))| match column.align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(columns.iter().map(|column| column.header).collect()));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for row in rows {
        lines.push(format_line(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

pub fn food_table(foods: &[FoodDefinition]) -> String {
    let columns = [
        right("ID"),
        left("Name"),
        left("Per 100g"),
        right("Carbs"),
        right("Protein"),
        right("Fat"),
    ];
    let rows: Vec<Vec<String>> = foods
        .iter()
        .map(|food| {
            vec![
                food.id.to_string(),
                food.name.clone(),
                if food.unit_mode.is_per_100_grams() {
                    "yes".to_string()
                } else {
                    "no".to_string()
                },
                food.carbs.to_string(),
                food.protein.to_string(),
                food.fat.to_string(),
            ]
        })
        .collect();
    table(&columns, &rows)
}

pub fn diary_table(report: &DiaryReport) -> String {
    let columns = [
        left("Name"),
        right("Amount"),
        right("Carbs"),
        right("Protein"),
        right("Fat"),
        left("Time"),
    ];
    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.amount_label(),
                row.carbs.to_string(),
                row.protein.to_string(),
                row.fat.to_string(),
                row.time_of_day(),
            ]
        })
        .collect();
    table(&columns, &rows)
}

/// `  Label:    [=====...]    achieved / goal` with the achieved part green
/// and the remaining part red.
pub fn progress_line(indicator: &ProgressIndicator) -> String {
    let label = format!("{}:", indicator.label);
    let achieved = format!("[{}", "=".repeat(indicator.achieved_cells()));
    let remaining = format!("{}]", "=".repeat(indicator.remaining_cells()));
    format!(
        "  {label:<width$}{}{}    {:4} / {:4}",
        achieved.green(),
        remaining.red(),
        indicator.achieved_whole(),
        indicator.goal_whole(),
        width = LABEL_WIDTH + 1,
    )
}

pub fn diary(report: &DiaryReport) -> String {
    let mut out = diary_table(report);
    out.push_str("\n\n");
    for indicator in report.progress() {
        out.push_str(&progress_line(&indicator));
        out.push('\n');
    }
    out
}
