//! Text rendering of the projection dashboard.
//!
//! Rendering is a pure function of [`DashboardState`]: the projection is
//! regenerated from the selected scenario on every call and the previous
//! output is simply dropped.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::assumptions::MONTHS_PER_YEAR;
use crate::domain::benchmarks::{
    channel_comparison, material_totals, COST_REDUCTION_STRATEGIES, COST_STRUCTURE,
    MATERIAL_COSTS, PRODUCT_MARGINS,
};
use crate::domain::calendar::{format_month_long, last_projected_month, OPENING_MONTH};
use crate::domain::month_record::{CostCategory, MonthRecord};
use crate::domain::scenario::Scenario;
use crate::services::aggregation::{
    compare_scenarios, summarize_projection, ProjectionSummary, YearSummary,
};
use crate::services::money_format::{format_currency, format_growth, format_percent, format_price};
use crate::services::projection::generate_projection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Costs,
    Materials,
    Products,
    Monthly,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 5] = [
        DashboardTab::Overview,
        DashboardTab::Costs,
        DashboardTab::Materials,
        DashboardTab::Products,
        DashboardTab::Monthly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Overview => "Revenue",
            DashboardTab::Costs => "Costs",
            DashboardTab::Materials => "Materials",
            DashboardTab::Products => "Products",
            DashboardTab::Monthly => "Monthly",
        }
    }
}

/// What the dashboard shows. Changing the view means building a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub scenario: Scenario,
    pub tab: DashboardTab,
}

impl DashboardState {
    pub fn new(scenario: Scenario, tab: DashboardTab) -> Self {
        Self { scenario, tab }
    }

    pub fn with_scenario(self, scenario: Scenario) -> Self {
        Self { scenario, ..self }
    }

    pub fn with_tab(self, tab: DashboardTab) -> Self {
        Self { tab, ..self }
    }
}

pub fn render_dashboard(state: &DashboardState) -> String {
    let records = generate_projection(state.scenario);
    let summary = summarize_projection(state.scenario, &records);

    let mut lines = Vec::new();
    lines.extend(render_header(state.scenario));
    lines.push(String::new());
    lines.extend(render_kpis(&summary));
    lines.push(String::new());
    lines.push(render_tab_bar(state.tab));
    lines.push(String::new());

    let body = match state.tab {
        DashboardTab::Overview => render_overview(&records, &summary),
        DashboardTab::Costs => render_costs(&records),
        DashboardTab::Materials => render_materials(),
        DashboardTab::Products => render_products(),
        DashboardTab::Monthly => render_monthly(&records, &summary),
    };
    lines.extend(body);

    lines.join("\n")
}

/// One row per scenario with the headline figures.
pub fn render_scenario_comparison() -> String {
    let mut lines = Vec::new();
    lines.push("Scenario Comparison".to_string());
    lines.push(
        "Scenario | Y1 Revenue | Y1 Profit | Y2 Revenue | Y2 Profit | YoY | Avg Margin".to_string(),
    );
    lines.push("---------|------------|-----------|------------|-----------|-----|-----------".to_string());
    for summary in compare_scenarios() {
        lines.push(format!(
            "{} | {} | {} | {} | {} | {} | {}",
            summary.scenario.display_name(),
            format_currency(summary.year_one.revenue),
            format_currency(summary.year_one.profit),
            format_currency(summary.year_two.revenue),
            format_currency(summary.year_two.profit),
            format_growth(summary.year_over_year_growth),
            format_percent(summary.average_margin),
        ));
    }
    lines.join("\n")
}

fn render_header(scenario: Scenario) -> Vec<String> {
    let period = match last_projected_month() {
        Some(last) => format!(
            "{} to {}",
            format_month_long(OPENING_MONTH),
            format_month_long(last)
        ),
        None => format_month_long(OPENING_MONTH),
    };
    vec![
        "Ghost Kitchen Financial Model".to_string(),
        format!("2-Year Delivery Projection, {period}"),
        format!("Scenario: {}", scenario.display_name()),
    ]
}

fn render_kpis(summary: &ProjectionSummary) -> Vec<String> {
    vec![
        format!("Year 1 Revenue: {} (gross)", format_currency(summary.year_one.revenue)),
        format!(
            "Year 1 Net Profit: {} (after all costs)",
            format_currency(summary.year_one.profit)
        ),
        format!(
            "Year 2 Revenue: {} ({} YoY)",
            format_currency(summary.year_two.revenue),
            format_growth(summary.year_over_year_growth)
        ),
        format!(
            "Year 2 Net Profit: {} (after all costs)",
            format_currency(summary.year_two.profit)
        ),
        format!("Avg Net Margin: {}", format_percent(summary.average_margin)),
    ]
}

fn render_tab_bar(active: DashboardTab) -> String {
    DashboardTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn render_overview(records: &[MonthRecord], summary: &ProjectionSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Revenue vs. Net Profit (24 Months)".to_string());
    lines.push("Month | Orders/day | Avg Order | Revenue | Net Profit | Margin".to_string());
    lines.push("------|------------|-----------|---------|------------|-------".to_string());
    for record in records {
        lines.push(format!(
            "{} | {} | {} | {} | {} | {}",
            record.month,
            record.orders,
            format_price(record.average_order_value),
            format_currency(record.revenue),
            format_currency(record.profit),
            format_percent(record.margin_percent),
        ));
    }
    lines.push(String::new());
    lines.extend(render_year_summary(&summary.year_one));
    lines.push(String::new());
    lines.extend(render_year_summary(&summary.year_two));
    lines
}

fn render_year_summary(year: &YearSummary) -> Vec<String> {
    let peak = match &year.peak_month {
        Some(peak) => format!("{} ({})", format_currency(peak.profit), peak.month),
        None => "n/a".to_string(),
    };
    vec![
        format!("{} Summary", year.year.label()),
        format!("Total Revenue: {}", format_currency(year.revenue)),
        format!("Total Net Profit: {}", format_currency(year.profit)),
        format!("Avg Net Margin: {}", format_percent(year.margin_percent)),
        format!("Total Costs: {}", format_currency(year.costs)),
        format!("Peak Month: {peak}"),
    ]
}

fn render_costs(records: &[MonthRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Cost Stack by Month".to_string());

    let mut header = vec!["Month".to_string()];
    header.extend(CostCategory::ALL.iter().map(|c| c.label().to_string()));
    header.push("Total".to_string());
    lines.push(header.join(" | "));
    lines.push(header.iter().map(|h| "-".repeat(h.len())).collect::<Vec<_>>().join("|"));

    for record in records {
        let mut row = vec![record.month.clone()];
        row.extend(
            CostCategory::ALL
                .iter()
                .map(|category| format_currency(record.costs.amount(*category))),
        );
        row.push(format_currency(record.total_costs));
        lines.push(row.join(" | "));
    }

    lines.push(String::new());
    lines.push("Cost Structure as % of Revenue".to_string());
    for row in &COST_STRUCTURE {
        lines.push(format!("{} ({}): {}", row.category, row.share, row.note));
    }
    lines
}

fn render_materials() -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Per-Order Material Costs".to_string());
    lines.push("Ingredient | Low | Mid | High | Note".to_string());
    lines.push("-----------|-----|-----|------|-----".to_string());
    for material in &MATERIAL_COSTS {
        lines.push(format!(
            "{} | {} | {} | {} | {}",
            material.item,
            format_price(material.low),
            format_price(material.mid),
            format_price(material.high),
            material.note,
        ));
    }
    let totals = material_totals(&MATERIAL_COSTS);
    lines.push(format!(
        "TOTAL PER ORDER | {} | {} | {} |",
        format_price(totals.low),
        format_price(totals.mid),
        format_price(totals.high),
    ));

    lines.push(String::new());
    lines.push("Cost Reduction Strategies".to_string());
    for strategy in &COST_REDUCTION_STRATEGIES {
        lines.push(format!("{} [{}]: {}", strategy.title, strategy.timing, strategy.detail));
    }
    lines
}

fn render_products() -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Margin by Product Type".to_string());
    lines.push("Product | Menu Price | COGS | Gross Margin | After Platform | Note".to_string());
    lines.push("--------|------------|------|--------------|----------------|-----".to_string());
    for product in &PRODUCT_MARGINS {
        lines.push(format!(
            "{} | {} | {} | {}% | {}% | {}",
            product.name,
            format_price(product.menu_price),
            format_price(product.cogs),
            product.gross_margin_percent,
            product.after_platform_percent,
            product.note,
        ));
    }

    lines.push(String::new());
    lines.push("Direct Orders vs. Platform: Profit Impact".to_string());
    lines.push("Channel Mix | Revenue | Platform Fees | You Keep".to_string());
    lines.push("------------|---------|---------------|---------".to_string());
    for mix in channel_comparison() {
        lines.push(format!(
            "{} | {} | {} | {}",
            mix.title,
            format_currency(mix.revenue),
            format_currency(mix.platform_fees),
            format_currency(mix.kept),
        ));
    }
    lines
}

fn render_monthly(records: &[MonthRecord], summary: &ProjectionSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Full 24-month breakdown. Scenario: {}",
        summary.scenario.display_name()
    ));
    lines.push("Month | Orders/day | Revenue | Costs | Profit | Margin".to_string());
    lines.push("------|------------|---------|-------|--------|-------".to_string());
    for record in records {
        if record.index == MONTHS_PER_YEAR {
            lines.push("-- YEAR 2 --".to_string());
        }
        let month = if record.is_rent_free {
            format!("{} (FREE RENT)", record.month)
        } else {
            record.month.clone()
        };
        lines.push(format!(
            "{} | {} | {} | {} | {} | {}",
            month,
            record.orders,
            format_currency(record.revenue),
            format_currency(record.total_costs),
            format_currency(record.profit),
            format_percent(record.margin_percent),
        ));
    }
    lines.push(format!(
        "2-YEAR TOTAL | | {} | {} | {} | {} avg",
        format_currency(summary.total_revenue),
        format_currency(summary.total_costs),
        format_currency(summary.total_profit),
        format_percent(summary.average_margin),
    ));

    lines.push(String::new());
    if let Some(first) = records.first() {
        lines.push(format!(
            "Month 1 Advantage: free kitchen rent and {} net profit.",
            format_currency(first.profit)
        ));
    }
    lines.push(format!(
        "Year 2 Growth: revenue grows to {} in Year 2 ({} vs Year 1).",
        format_currency(summary.year_two.revenue),
        format_growth(summary.year_over_year_growth),
    ));
    lines.push(
        "Investor Repayment: at base scenario, $1,000/month is comfortably covered from Month 1. Full $6,000 return by Month 6."
            .to_string(),
    );
    lines
}
