// ABOUTME: Built-in script computing weekly agenda variables for the agenda template
// ABOUTME: Produces ISO week number, week bounds, and a preformatted day listing

use chrono::{Datelike, Duration, Local, NaiveDate};

use super::error::{Result, ScriptError};
use super::{ScriptParams, TemplateScript};
use crate::renderer::RenderContext;

/// Generates the context for the weekly agenda template.
///
/// Reads the wall clock through an injectable `clock` function; tests pin it
/// to a fixed date. The optional `date` parameter (ISO `YYYY-MM-DD`) overrides
/// the clock entirely.
pub struct AgendaScript {
    clock: fn() -> NaiveDate,
}

impl AgendaScript {
    pub fn new() -> Self {
        Self {
            clock: || Local::now().date_naive(),
        }
    }

    pub fn with_clock(clock: fn() -> NaiveDate) -> Self {
        Self { clock }
    }
}

impl Default for AgendaScript {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateScript for AgendaScript {
    fn name(&self) -> &'static str {
        "agenda"
    }

    fn description(&self) -> &'static str {
        "Computes the current ISO week number, week bounds, and a day listing"
    }

    fn optional_parameters(&self) -> &'static [&'static str] {
        &["date"]
    }

    fn generate(&self, params: &ScriptParams) -> Result<RenderContext> {
        let today = match params.get("date") {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                ScriptError::Failed {
                    script: self.name().to_string(),
                    message: format!("invalid date '{raw}': {e}"),
                }
            })?,
            None => (self.clock)(),
        };

        let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        let week_end = week_start + Duration::days(6);

        let days = (0..7)
            .map(|offset| {
                let day = week_start + Duration::days(offset);
                format!("{} {}", day.format("%A"), day.format("%Y-%m-%d"))
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut context = RenderContext::new();
        context.insert(
            "week_number".to_string(),
            today.iso_week().week().to_string(),
        );
        context.insert(
            "week_start_date".to_string(),
            week_start.format("%Y-%m-%d").to_string(),
        );
        context.insert(
            "week_end_date".to_string(),
            week_end.format("%Y-%m-%d").to_string(),
        );
        context.insert("days".to_string(), days);
        Ok(context)
    }

    fn validate(&self, context: &RenderContext) -> bool {
        let keys = ["week_number", "week_start_date", "week_end_date", "days"];
        keys.iter().all(|k| context.contains_key(*k))
            && context
                .get("days")
                .is_some_and(|days| days.lines().count() == 7)
    }
}
