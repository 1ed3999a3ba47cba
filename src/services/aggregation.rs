use serde::Serialize;

use crate::domain::assumptions::MONTHS_PER_YEAR;
use crate::domain::month_record::MonthRecord;
use crate::domain::scenario::Scenario;
use crate::services::projection::{generate_projection, margin_percent};
use crate::services::rounding::round_half_up;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionYear {
    One,
    Two,
}

impl ProjectionYear {
    pub fn label(self) -> &'static str {
        match self {
            ProjectionYear::One => "Year 1",
            ProjectionYear::Two => "Year 2",
        }
    }
}

/// Months belonging to `year`, clamped to what `records` holds.
pub fn year_slice(records: &[MonthRecord], year: ProjectionYear) -> &[MonthRecord] {
    let start = match year {
        ProjectionYear::One => 0,
        ProjectionYear::Two => MONTHS_PER_YEAR,
    };
    let start = start.min(records.len());
    let end = (start + MONTHS_PER_YEAR).min(records.len());
    &records[start..end]
}

pub fn sum_revenue(records: &[MonthRecord]) -> i64 {
    records.iter().map(|record| record.revenue).sum()
}

pub fn sum_profit(records: &[MonthRecord]) -> i64 {
    records.iter().map(|record| record.profit).sum()
}

pub fn sum_costs(records: &[MonthRecord]) -> i64 {
    records.iter().map(|record| record.total_costs).sum()
}

/// Rounded mean of the monthly margins.
///
/// `None` for an empty slice or when any month has no margin.
pub fn average_margin(records: &[MonthRecord]) -> Option<i64> {
    if records.is_empty() {
        return None;
    }
    let mut total = 0_i64;
    for record in records {
        total += record.margin_percent?;
    }
    Some(round_half_up(total as f64 / records.len() as f64) as i64)
}

/// Month with the highest profit; the earliest month wins a tie.
pub fn peak_profit_month(records: &[MonthRecord]) -> Option<&MonthRecord> {
    records.iter().fold(None, |best: Option<&MonthRecord>, record| match best {
        Some(current) if current.profit >= record.profit => Some(current),
        _ => Some(record),
    })
}

/// Growth of `second` over `first` in whole percent.
pub fn year_over_year_growth(first: i64, second: i64) -> Option<i64> {
    if first == 0 {
        return None;
    }
    Some(round_half_up((second as f64 / first as f64 - 1.0) * 100.0) as i64)
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PeakMonth {
    pub month: String,
    pub profit: i64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct YearSummary {
    pub year: ProjectionYear,
    pub revenue: i64,
    pub profit: i64,
    pub costs: i64,
    /// Margin of the year's totals, not the mean of monthly margins.
    pub margin_percent: Option<i64>,
    pub peak_month: Option<PeakMonth>,
}

pub fn summarize_year(records: &[MonthRecord], year: ProjectionYear) -> YearSummary {
    let months = year_slice(records, year);
    let revenue = sum_revenue(months);
    let profit = sum_profit(months);

    YearSummary {
        year,
        revenue,
        profit,
        costs: sum_costs(months),
        margin_percent: margin_percent(profit, revenue),
        peak_month: peak_profit_month(months).map(|record| PeakMonth {
            month: record.month.clone(),
            profit: record.profit,
        }),
    }
}

/// Headline figures for one scenario.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectionSummary {
    pub scenario: Scenario,
    pub year_one: YearSummary,
    pub year_two: YearSummary,
    pub year_over_year_growth: Option<i64>,
    pub average_margin: Option<i64>,
    pub total_revenue: i64,
    pub total_costs: i64,
    pub total_profit: i64,
}

pub fn summarize_projection(scenario: Scenario, records: &[MonthRecord]) -> ProjectionSummary {
    let year_one = summarize_year(records, ProjectionYear::One);
    let year_two = summarize_year(records, ProjectionYear::Two);
    let growth = year_over_year_growth(year_one.revenue, year_two.revenue);

    ProjectionSummary {
        scenario,
        year_over_year_growth: growth,
        average_margin: average_margin(records),
        total_revenue: sum_revenue(records),
        total_costs: sum_costs(records),
        total_profit: sum_profit(records),
        year_one,
        year_two,
    }
}

/// Summaries of every scenario, in [`Scenario::ALL`] order.
pub fn compare_scenarios() -> Vec<ProjectionSummary> {
    Scenario::ALL
        .into_iter()
        .map(|scenario| summarize_projection(scenario, &generate_projection(scenario)))
        .collect()
}
