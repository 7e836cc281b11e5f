use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::activity_log::{self, ActivityEntry};
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 40;

static ANSI_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_ESCAPE.replace_all(s, "").into_owned()
}

/// ANSI colour of an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" => Colour::Green,
        "stop" => Colour::Red,
        "lunch" | "resume" => Colour::Yellow,
        "clear" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        "report" => Colour::Blue,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(cfg: &Config) -> AppResult<()> {
        let entries = activity_log::read_entries(&cfg.activity_log_path())?;

        if entries.is_empty() {
            println!("📜 Activity log is empty.");
            return Ok(());
        }

        println!("📜 Activity log:\n");
        for line in Self::render(&entries) {
            println!("{line}");
        }
        Ok(())
    }

    /// One line per entry: `id: date | op (target) => message`.
    pub fn render(entries: &[ActivityEntry]) -> Vec<String> {
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let painted: Vec<String> = entries
            .iter()
            .map(|e| {
                let color = color_for_operation(&e.operation);
                let mut s = color.paint(e.operation.as_str()).to_string();
                if !e.target.is_empty() {
                    s.push_str(&format!(" ({})", e.target));
                }
                s
            })
            .collect();

        // width measured without escape codes
        let op_w = painted
            .iter()
            .map(|p| strip_ansi(p).chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_OP_WIDTH);

        entries
            .iter()
            .zip(painted)
            .enumerate()
            .map(|(i, (e, op))| {
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    i + 1,
                    e.date,
                    op,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }
}
