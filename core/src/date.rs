// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use jiff::civil::Date;
use regex::Regex;

use crate::TaskError;

/// Pattern used when a date is shown to the user, e.g. `Mar 15 2024`.
const DISPLAY_FORMAT: &str = "%b %d %Y";

/// Pattern used when a date is written to the task file, e.g. `2024-03-15`.
const ISO_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid ISO date regex"));

/// Parses a strict `yyyy-mm-dd` date. Surrounding whitespace is ignored.
pub fn parse_date(s: &str) -> Result<Date, TaskError> {
    let s = s.trim();
    if !ISO_DATE.is_match(s) {
        return Err(TaskError::InvalidDate(s.to_string()));
    }

    Date::strptime(ISO_FORMAT, s).map_err(|e| {
        tracing::debug!(input = s, err = %e, "rejected calendar date");
        TaskError::InvalidDate(s.to_string())
    })
}

/// Formats a date for display text.
pub fn format_display(date: Date) -> String {
    date.strftime(DISPLAY_FORMAT).to_string()
}

/// Formats a date for the task file.
pub fn format_iso(date: Date) -> String {
    date.strftime(ISO_FORMAT).to_string()
}
