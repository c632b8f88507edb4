use crate::db::log::{LogEntry, load_log};
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 40;

/// ANSI colour for an operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "join" | "start" => Colour::Green,
        "leave" => Colour::Yellow,
        "end" => Colour::Cyan,
        "migration_applied" | "init" => Colour::Purple,
        other if other.ends_with("_add") => Colour::Green,
        other if other.ends_with("_del") => Colour::Red,
        other if other.ends_with("_edit") => Colour::Yellow,
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One line per entry: `id: date | operation (target) => message`.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let labels: Vec<String> = entries
            .iter()
            .map(|e| {
                let label = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                truncate(&label, MAX_OP_WIDTH)
            })
            .collect();
        let op_w = labels.iter().map(|l| l.chars().count()).max().unwrap_or(10);

        entries
            .iter()
            .zip(labels)
            .map(|(e, label)| {
                let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));
                // colour only the operation word, padding is computed on plain text
                let coloured = match label.split_once(' ') {
                    Some((op, rest)) => {
                        format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                    }
                    None => color_for_operation(&e.operation).paint(label.as_str()).to_string(),
                };
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    e.date,
                    coloured,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_log(conn)?;

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{}", line);
        }
        Ok(())
    }
}
