use tracing::debug;

use crate::domain::assumptions::{
    aov_segment, one_off_value, step_value, BASELINE_DAILY_ORDERS, DAYS_PER_MONTH, LABOR_RATIOS,
    MARKETING_RATIOS, MONTH_LABELS, MONTHS_IN_PROJECTION, PACKAGING_RATIO, PERMIT_FEES,
    PLATFORM_FEE_RATIO, PRODUCE_RATIO, RENT_SCHEDULE, SUPPLIES_RATIO, UTILITIES_SCHEDULE,
};
use crate::domain::month_record::{CostBreakdown, MonthRecord};
use crate::domain::scenario::Scenario;
use crate::services::rounding::{round_half_up, round_to_cents};

/// Builds the full 24-month projection for `scenario`.
///
/// The result is recomputed on every call; nothing is cached.
pub fn generate_projection(scenario: Scenario) -> Vec<MonthRecord> {
    let records: Vec<MonthRecord> = (0..MONTHS_IN_PROJECTION)
        .filter_map(|index| project_month(scenario, index))
        .collect();

    debug!(
        scenario = %scenario,
        months = records.len(),
        revenue = records.iter().map(|r| r.revenue).sum::<i64>(),
        profit = records.iter().map(|r| r.profit).sum::<i64>(),
        "generated projection"
    );
    records
}

/// Computes the record for a single month, or `None` past the horizon.
pub fn project_month(scenario: Scenario, index: usize) -> Option<MonthRecord> {
    let month = MONTH_LABELS.get(index)?;
    let orders = daily_orders(scenario, index)?;
    let aov = average_order_value(index);
    // Revenue uses the unrounded AOV; only the stored field is rounded.
    let revenue = share(orders as f64 * aov, DAYS_PER_MONTH);
    let costs = month_costs(revenue, index);
    let total_costs = costs.total();
    let profit = revenue - total_costs;

    Some(MonthRecord {
        index,
        month: month.to_string(),
        orders,
        average_order_value: round_to_cents(aov),
        revenue,
        costs,
        total_costs,
        profit,
        margin_percent: margin_percent(profit, revenue),
        is_rent_free: index == 0,
    })
}

pub fn daily_orders(scenario: Scenario, index: usize) -> Option<u32> {
    let baseline = *BASELINE_DAILY_ORDERS.get(index)?;
    Some(round_half_up(baseline as f64 * scenario.multiplier()) as u32)
}

/// Unrounded average order value for the month at `index`.
pub fn average_order_value(index: usize) -> f64 {
    let segment = aov_segment(index);
    segment.starting_value + (index - segment.first_index) as f64 * segment.monthly_increase
}

pub fn month_costs(revenue: i64, index: usize) -> CostBreakdown {
    let revenue = revenue as f64;
    CostBreakdown {
        produce: share(revenue, PRODUCE_RATIO),
        packaging: share(revenue, PACKAGING_RATIO),
        rent: step_value(&RENT_SCHEDULE, index),
        labor: share(revenue, step_value(&LABOR_RATIOS, index)),
        platform_fee: share(revenue, PLATFORM_FEE_RATIO),
        marketing: share(revenue, step_value(&MARKETING_RATIOS, index)),
        utilities: step_value(&UTILITIES_SCHEDULE, index),
        permits: one_off_value(&PERMIT_FEES, index),
        supplies: share(revenue, SUPPLIES_RATIO),
    }
}

/// Net margin in whole percent, or `None` without revenue.
pub fn margin_percent(profit: i64, revenue: i64) -> Option<i64> {
    if revenue == 0 {
        return None;
    }
    Some(round_half_up(profit as f64 / revenue as f64 * 100.0) as i64)
}

fn share(amount: f64, ratio: f64) -> i64 {
    round_half_up(amount * ratio) as i64
}
