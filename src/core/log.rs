use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{DataPaths, audit};
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Colour of an operation in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "log" | "add" => Colour::Green,
        "remove" | "evict" => Colour::Red,
        "reset" | "rename" | "select" => Colour::Yellow,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        other if other.starts_with("migrate_to_") => Colour::Purple,
        _ => Colour::White,
    }
}

/// Cut `s` to `max` display columns, ending with "..." when shortened.
fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 3 >= max {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let paths = DataPaths::resolve(cfg, None);
        let entries = audit::read_entries(&paths.log)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(audit::AuditEntry, String)> = entries
            .into_iter()
            .map(|e| {
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    truncate(&format!("{} ({})", e.operation, e.target), 60)
                };
                (e, op_target)
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(e, _)| e.date.width()).max().unwrap_or(0);
        let op_w = rows.iter().map(|(_, o)| o.width()).max().unwrap_or(0);

        println!("📜 Internal log:\n");

        for (i, (entry, op_target)) in rows.iter().enumerate() {
            let color = color_for_operation(&entry.operation);

            // Only the operation word is coloured; padding uses the plain width.
            let colored = match op_target.split_once(' ') {
                Some((op, target)) => format!("{} {}", color.paint(op), target),
                None => color.paint(op_target.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(op_target.width()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                entry.date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
