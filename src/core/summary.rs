use crate::config::Config;
use crate::core::logic::Summary;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::{RESET, YELLOW, color_for_count, colorize};
use crate::utils::table::{Column, Table};

pub struct SummaryLogic;

impl SummaryLogic {
    /// Render the summary as a terminal table.
    pub fn render(summary: &Summary, cfg: &Config) -> String {
        let thresholds = cfg.thresholds();
        let rule = cfg.separator_char.chars().next().unwrap_or('-');

        let mut table = Table::new(
            vec![
                Column::left("ID"),
                Column::left("Driver"),
                Column::right("LW"),
                Column::right("TW"),
                Column::right("14d"),
                Column::left("Suggestion"),
            ],
            rule,
        );

        for r in &summary.rows {
            let suggestion = if r.suggest {
                format!(
                    "{YELLOW}Suggest day off ({}){RESET}",
                    r.reasons_joined(&cfg.reasons_separator)
                )
            } else {
                "OK".to_string()
            };

            table.add_row(vec![
                r.driver_id.clone(),
                r.driver_name.clone(),
                r.days_last_week.to_string(),
                colorize(
                    &r.days_this_week.to_string(),
                    color_for_count(r.days_this_week, thresholds.max_days_this_week),
                ),
                colorize(
                    &r.days_14d.to_string(),
                    color_for_count(r.days_14d, thresholds.max_days_14d),
                ),
                suggestion,
            ]);
        }

        table.render()
    }

    pub fn print(summary: &Summary, cfg: &Config) {
        let w = &summary.windows;

        header(format!("Summary for week {}", w.this_week_start));
        println!("Last week: {} → {}", w.last_week_start, w.last_week_end());
        println!("This week: {} → {}", w.this_week_start, w.this_week_end());
        println!();

        if summary.rows.is_empty() {
            info("No data yet. Save a day (AM/PM) first.");
            return;
        }

        print!("{}", Self::render(summary, cfg));
        println!();

        let suggested = summary.suggested().count();
        if suggested == 0 {
            success(format!("All {} driver(s) within limits.", summary.rows.len()));
        } else {
            warning(format!(
                "{} of {} driver(s) should be offered a day off.",
                suggested,
                summary.rows.len()
            ));
        }
    }
}
