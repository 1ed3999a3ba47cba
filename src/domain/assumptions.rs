//! Fixed business assumptions behind the 24-month projection.
//!
//! Ratios are fractions of monthly revenue. Step schedules are lists of
//! `(first_index, value)` pairs sorted by index: the value of the last pair
//! whose index is `<=` the month index applies.

pub const MONTHS_IN_PROJECTION: usize = 24;
pub const MONTHS_PER_YEAR: usize = 12;

/// Average number of days in a month, used to turn daily orders into
/// monthly revenue.
pub const DAYS_PER_MONTH: f64 = 30.4;

/// Expected daily orders per month under the base scenario.
pub const BASELINE_DAILY_ORDERS: [u32; MONTHS_IN_PROJECTION] = [
    30, 45, 62, 78, 90, 95, 88, 92, 100, 95, 85, 90, //
    105, 118, 130, 142, 155, 160, 152, 158, 168, 162, 148, 155,
];

pub const MONTH_LABELS: [&str; MONTHS_IN_PROJECTION] = [
    "Mar '26", "Apr '26", "May '26", "Jun '26", "Jul '26", "Aug '26", "Sep '26", "Oct '26",
    "Nov '26", "Dec '26", "Jan '27", "Feb '27", "Mar '27", "Apr '27", "May '27", "Jun '27",
    "Jul '27", "Aug '27", "Sep '27", "Oct '27", "Nov '27", "Dec '27", "Jan '28", "Feb '28",
];

/// One linear piece of the average-order-value curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AovSegment {
    pub first_index: usize,
    pub starting_value: f64,
    pub monthly_increase: f64,
}

pub const AOV_SEGMENTS: [AovSegment; 2] = [
    AovSegment {
        first_index: 0,
        starting_value: 22.0,
        monthly_increase: 0.3,
    },
    AovSegment {
        first_index: MONTHS_PER_YEAR,
        starting_value: 26.0,
        monthly_increase: 0.35,
    },
];

pub const PRODUCE_RATIO: f64 = 0.20;
pub const PACKAGING_RATIO: f64 = 0.07;
/// Delivery platform commission.
pub const PLATFORM_FEE_RATIO: f64 = 0.25;
pub const SUPPLIES_RATIO: f64 = 0.02;

/// One prep person during launch, then scale efficiencies.
pub const LABOR_RATIOS: [(usize, f64); 3] = [(0, 0.14), (6, 0.12), (MONTHS_PER_YEAR, 0.11)];
/// Heavier spend for launch visibility.
pub const MARKETING_RATIOS: [(usize, f64); 2] = [(0, 0.08), (3, 0.05)];

/// Kitchen rent. The opening month is free.
pub const RENT_SCHEDULE: [(usize, i64); 3] = [(0, 0), (1, 950), (MONTHS_PER_YEAR, 1100)];
pub const UTILITIES_SCHEDULE: [(usize, i64); 2] = [(0, 180), (MONTHS_PER_YEAR, 220)];

/// One-off permit fees: opening permits, then the Year 2 renewal.
pub const PERMIT_FEES: [(usize, i64); 2] = [(0, 600), (MONTHS_PER_YEAR, 200)];

/// Reads a step schedule at `index`.
///
/// Schedules always start at index 0, so a value exists for every index.
pub fn step_value<T: Copy>(schedule: &[(usize, T)], index: usize) -> T {
    let mut value = schedule[0].1;
    for (first_index, step) in schedule {
        if *first_index <= index {
            value = *step;
        }
    }
    value
}

pub fn one_off_value(fees: &[(usize, i64)], index: usize) -> i64 {
    fees.iter()
        .find(|(fee_index, _)| *fee_index == index)
        .map(|(_, amount)| *amount)
        .unwrap_or(0)
}

pub fn aov_segment(index: usize) -> &'static AovSegment {
    let mut segment = &AOV_SEGMENTS[0];
    for candidate in &AOV_SEGMENTS {
        if candidate.first_index <= index {
            segment = candidate;
        }
    }
    segment
}
