use crate::domain::month_record::{CostBreakdown, MonthRecord};
use crate::domain::scenario::Scenario;
use crate::services::projection::generate_projection;

pub fn base_projection() -> Vec<MonthRecord> {
    generate_projection(Scenario::Base)
}

// A month with revenue 100, so the margin equals the profit.
pub fn record_with_profit(index: usize, profit: i64) -> MonthRecord {
    let revenue = 100;
    let costs = CostBreakdown {
        produce: revenue - profit,
        ..CostBreakdown::default()
    };
    MonthRecord {
        index,
        month: format!("M{index}"),
        orders: 1,
        average_order_value: 22.0,
        revenue,
        costs,
        total_costs: costs.total(),
        profit,
        margin_percent: Some(profit),
        is_rent_free: index == 0,
    }
}

pub fn zero_revenue_record(index: usize) -> MonthRecord {
    let costs = CostBreakdown {
        rent: 950,
        utilities: 180,
        ..CostBreakdown::default()
    };
    MonthRecord {
        index,
        month: format!("M{index}"),
        orders: 0,
        average_order_value: 22.0,
        revenue: 0,
        costs,
        total_costs: costs.total(),
        profit: -costs.total(),
        margin_percent: None,
        is_rent_free: false,
    }
}
