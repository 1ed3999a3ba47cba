use chrono::{Months, NaiveDate};

use crate::domain::assumptions::MONTHS_IN_PROJECTION;

/// First trading month of the kitchen.
pub const OPENING_MONTH: NaiveDate = match NaiveDate::from_ymd_opt(2026, 3, 1) {
    Some(date) => date,
    None => panic!("invalid opening month"),
};

/// First day of the projected month at `index`, or `None` past the horizon.
pub fn month_start(index: usize) -> Option<NaiveDate> {
    if index >= MONTHS_IN_PROJECTION {
        return None;
    }
    OPENING_MONTH.checked_add_months(Months::new(u32::try_from(index).ok()?))
}

pub fn last_projected_month() -> Option<NaiveDate> {
    month_start(MONTHS_IN_PROJECTION - 1)
}

/// Short label such as `Mar '26`.
pub fn format_month_label(date: NaiveDate) -> String {
    date.format("%b '%y").to_string()
}

/// Long label such as `March 2026`.
pub fn format_month_long(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
