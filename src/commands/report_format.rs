use crate::services::aggregation::{ProjectionSummary, YearSummary};
use crate::services::money_format::{format_currency, format_growth, format_percent};

pub fn format_projection_report(summary: &ProjectionSummary) -> String {
    let mut lines = Vec::new();
    lines.push("Projection Report".to_string());
    lines.push(format!("Scenario: {}", summary.scenario.display_name()));
    lines.push(format!("Total revenue: {}", format_currency(summary.total_revenue)));
    lines.push(format!("Total profit: {}", format_currency(summary.total_profit)));
    lines.push(format!(
        "Year-over-year growth: {}",
        format_growth(summary.year_over_year_growth)
    ));
    lines.push(format!(
        "Average monthly margin: {}",
        format_percent(summary.average_margin)
    ));
    lines.push(String::new());
    lines.push("Year | Revenue | Costs | Profit | Margin | Peak Month".to_string());
    lines.push("-----|---------|-------|--------|--------|-----------".to_string());
    lines.push(format_year_row(&summary.year_one));
    lines.push(format_year_row(&summary.year_two));

    lines.join("\n")
}

fn format_year_row(year: &YearSummary) -> String {
    let peak = year
        .peak_month
        .as_ref()
        .map(|peak| format!("{} ({})", peak.month, format_currency(peak.profit)))
        .unwrap_or_else(|| "n/a".to_string());
    format!(
        "{label} | {revenue} | {costs} | {profit} | {margin} | {peak}",
        label = year.year.label(),
        revenue = format_currency(year.revenue),
        costs = format_currency(year.costs),
        profit = format_currency(year.profit),
        margin = format_percent(year.margin_percent),
        peak = peak
    )
}
