use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::display_width;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

/// ANSI colour per audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "save" | "import" => Colour::Green,
        "replace" => Colour::Yellow,
        "del" => Colour::Red,
        "export" | "backup" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max - 3).collect();
    t.push_str("...");
    t
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        let op_w = OP_TARGET_MAX.min(
            entries
                .iter()
                .map(|x| x.operation.len() + x.target.len() + 3)
                .max()
                .unwrap_or(10),
        );

        println!("📜 Internal log:\n");

        for e in &entries {
            let plain = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let plain = truncate(&plain, OP_TARGET_MAX);

            // only the operation word is coloured
            let colored = match plain.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None => color_for_operation(&e.operation)
                    .paint(plain.as_str())
                    .to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(display_width(&colored)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
