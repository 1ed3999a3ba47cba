use proptest::prelude::*;

use projections::domain::assumptions::{
    step_value, BASELINE_DAILY_ORDERS, LABOR_RATIOS, MARKETING_RATIOS, MONTH_LABELS,
    MONTHS_IN_PROJECTION, PACKAGING_RATIO, PLATFORM_FEE_RATIO, PRODUCE_RATIO, SUPPLIES_RATIO,
};
use projections::domain::scenario::Scenario;
use projections::services::aggregation::average_margin;
use projections::services::projection::{generate_projection, project_month};
use projections::services::rounding::round_half_up;

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    prop_oneof![
        Just(Scenario::Conservative),
        Just(Scenario::Base),
        Just(Scenario::Optimistic),
    ]
}

proptest! {
    #[test]
    fn month_totals_are_consistent(scenario in scenario_strategy(), index in 0..MONTHS_IN_PROJECTION) {
        let record = project_month(scenario, index).unwrap();

        prop_assert_eq!(record.total_costs, record.costs.total());
        prop_assert_eq!(record.profit, record.revenue - record.total_costs);
        prop_assert_eq!(record.index, index);
    }

    #[test]
    fn fixed_costs_follow_the_calendar(scenario in scenario_strategy(), index in 0..MONTHS_IN_PROJECTION) {
        let record = project_month(scenario, index).unwrap();

        prop_assert_eq!(record.is_rent_free, index == 0);
        prop_assert_eq!(record.costs.rent == 0, index == 0);
        let permit_month = index == 0 || index == 12;
        prop_assert_eq!(record.costs.permits > 0, permit_month);
    }

    #[test]
    fn margins_stay_in_percent_range(scenario in scenario_strategy(), index in 0..MONTHS_IN_PROJECTION) {
        let record = project_month(scenario, index).unwrap();

        let margin = record.margin_percent.unwrap_or_default();
        prop_assert!((0..=100).contains(&margin));
    }

    #[test]
    fn base_orders_equal_the_baseline(index in 0..MONTHS_IN_PROJECTION) {
        let record = project_month(Scenario::Base, index).unwrap();
        prop_assert_eq!(record.orders, BASELINE_DAILY_ORDERS[index]);
    }

    #[test]
    fn orders_scale_the_baseline_by_the_multiplier(scenario in scenario_strategy(), index in 0..MONTHS_IN_PROJECTION) {
        let record = project_month(scenario, index).unwrap();

        let expected = round_half_up(BASELINE_DAILY_ORDERS[index] as f64 * scenario.multiplier()) as u32;
        prop_assert_eq!(record.orders, expected);
    }

    #[test]
    fn scenario_changes_nothing_but_order_driven_figures(scenario in scenario_strategy(), index in 0..MONTHS_IN_PROJECTION) {
        let record = project_month(scenario, index).unwrap();
        let base = project_month(Scenario::Base, index).unwrap();

        prop_assert_eq!(&record.month, &base.month);
        prop_assert_eq!(record.average_order_value, base.average_order_value);
        prop_assert_eq!(record.costs.rent, base.costs.rent);
        prop_assert_eq!(record.costs.utilities, base.costs.utilities);
        prop_assert_eq!(record.costs.permits, base.costs.permits);
        prop_assert_eq!(record.is_rent_free, base.is_rent_free);

        let revenue = record.revenue as f64;
        let share = |ratio: f64| round_half_up(revenue * ratio) as i64;
        prop_assert_eq!(record.costs.produce, share(PRODUCE_RATIO));
        prop_assert_eq!(record.costs.packaging, share(PACKAGING_RATIO));
        prop_assert_eq!(record.costs.labor, share(step_value(&LABOR_RATIOS, index)));
        prop_assert_eq!(record.costs.platform_fee, share(PLATFORM_FEE_RATIO));
        prop_assert_eq!(record.costs.marketing, share(step_value(&MARKETING_RATIOS, index)));
        prop_assert_eq!(record.costs.supplies, share(SUPPLIES_RATIO));
    }
}

#[test]
fn every_scenario_covers_the_calendar_in_order() {
    for scenario in Scenario::ALL {
        let records = generate_projection(scenario);

        assert_eq!(records.len(), MONTHS_IN_PROJECTION, "{scenario}");
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.index, index, "{scenario}");
            assert_eq!(record.month, MONTH_LABELS[index], "{scenario}");
        }
    }
}

#[test]
fn average_margin_of_a_full_run_is_a_percentage() {
    for scenario in Scenario::ALL {
        let margin = average_margin(&generate_projection(scenario)).unwrap();
        assert!((0..=100).contains(&margin), "{scenario}: {margin}");
    }
}
