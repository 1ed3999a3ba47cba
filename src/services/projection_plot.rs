use clap::ValueEnum;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::domain::month_record::{CostCategory, MonthRecord};
use crate::services::money_format::format_currency;

#[derive(Error, Debug)]
pub enum ProjectionPlotError {
    #[error("projection has no months to plot")]
    EmptyProjection,
    #[error("failed to render projection chart: {0}")]
    Plot(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    RevenueProfit,
    OrdersAov,
    Margin,
    CostStack,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::RevenueProfit,
        ChartKind::OrdersAov,
        ChartKind::Margin,
        ChartKind::CostStack,
    ];

    pub fn file_suffix(self) -> &'static str {
        match self {
            ChartKind::RevenueProfit => "revenue-profit",
            ChartKind::OrdersAov => "orders-aov",
            ChartKind::Margin => "margin",
            ChartKind::CostStack => "cost-stack",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::RevenueProfit => "Revenue vs. Net Profit (24 Months)",
            ChartKind::OrdersAov => "Daily Orders & Avg Order Value",
            ChartKind::Margin => "Net Profit Margin % by Month",
            ChartKind::CostStack => "Cost Stack by Month",
        }
    }
}

/// Path of the PNG written for `kind` under `prefix`.
pub fn chart_path(prefix: &str, kind: ChartKind) -> String {
    format!("{prefix}.{}.png", kind.file_suffix())
}

const REVENUE_COLOR: RGBColor = RGBColor(82, 183, 136);
const PROFIT_COLOR: RGBColor = RGBColor(201, 168, 76);
const ORDERS_COLOR: RGBColor = RGBColor(45, 106, 79);
const AOV_COLOR: RGBColor = RGBColor(201, 168, 76);
const STRONG_MARGIN_COLOR: RGBColor = RGBColor(82, 183, 136);
const FAIR_MARGIN_COLOR: RGBColor = RGBColor(45, 106, 79);
const WEAK_MARGIN_COLOR: RGBColor = RGBColor(74, 106, 85);

const COST_COLORS: [RGBColor; 9] = [
    RGBColor(74, 156, 110),
    RGBColor(53, 122, 85),
    RGBColor(42, 74, 53),
    RGBColor(107, 114, 128),
    RGBColor(139, 94, 60),
    RGBColor(201, 168, 76),
    RGBColor(122, 138, 128),
    RGBColor(26, 60, 46),
    RGBColor(149, 213, 178),
];

pub fn write_chart_png(
    output_path: &str,
    kind: ChartKind,
    records: &[MonthRecord],
    size: (u32, u32),
) -> Result<(), ProjectionPlotError> {
    if records.is_empty() {
        return Err(ProjectionPlotError::EmptyProjection);
    }
    match kind {
        ChartKind::RevenueProfit => render_revenue_profit(output_path, records, size)?,
        ChartKind::OrdersAov => render_orders_aov(output_path, records, size)?,
        ChartKind::Margin => render_margin(output_path, records, size)?,
        ChartKind::CostStack => render_cost_stack(output_path, records, size)?,
    }
    info!(chart = kind.file_suffix(), path = output_path, "wrote chart");
    Ok(())
}

fn plot_error<E: std::fmt::Display>(error: E) -> ProjectionPlotError {
    ProjectionPlotError::Plot(error.to_string())
}

fn month_label(records: &[MonthRecord], index: i32) -> String {
    if index < 0 {
        return String::new();
    }
    records
        .get(index as usize)
        .map(|record| record.month.clone())
        .unwrap_or_default()
}

fn render_revenue_profit(
    output_path: &str,
    records: &[MonthRecord],
    size: (u32, u32),
) -> Result<(), ProjectionPlotError> {
    let max_y = records
        .iter()
        .map(|record| record.revenue.max(record.profit))
        .max()
        .unwrap_or(0)
        .max(1);
    let min_y = records.iter().map(|record| record.profit).min().unwrap_or(0).min(0);
    let max_x = records.len() as i32;

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(ChartKind::RevenueProfit.title(), ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, min_y..max_y)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Dollars")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(8)
        .x_label_formatter(&|index| month_label(records, *index))
        .y_label_formatter(&|value| format_currency(*value))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(
            AreaSeries::new(
                records.iter().map(|record| (record.index as i32, record.revenue)),
                0,
                &REVENUE_COLOR.mix(0.3),
            )
            .border_style(REVENUE_COLOR.stroke_width(2)),
        )
        .map_err(plot_error)?
        .label("Gross Revenue")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REVENUE_COLOR.stroke_width(2)));

    chart
        .draw_series(
            AreaSeries::new(
                records.iter().map(|record| (record.index as i32, record.profit)),
                0,
                &PROFIT_COLOR.mix(0.3),
            )
            .border_style(PROFIT_COLOR.stroke_width(2)),
        )
        .map_err(plot_error)?
        .label("Net Profit")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PROFIT_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn render_orders_aov(
    output_path: &str,
    records: &[MonthRecord],
    size: (u32, u32),
) -> Result<(), ProjectionPlotError> {
    let max_orders = records
        .iter()
        .map(|record| record.orders)
        .max()
        .unwrap_or(0)
        .saturating_add(10) as i32;
    let max_aov = records
        .iter()
        .map(|record| record.average_order_value)
        .fold(0.0_f64, f64::max)
        + 2.0;
    let max_x = records.len() as i32;

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(ChartKind::OrdersAov.title(), ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .right_y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_orders)
        .map_err(plot_error)?
        .set_secondary_coord(0..max_x, 0.0..max_aov);

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Daily orders")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(8)
        .x_label_formatter(&|index| month_label(records, *index))
        .draw()
        .map_err(plot_error)?;

    chart
        .configure_secondary_axes()
        .y_desc("Avg order ($)")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .y_label_formatter(&|value| format!("${value:.0}"))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(
            records
                .iter()
                .map(|record| (record.index as i32, record.orders as i32)),
            ORDERS_COLOR.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("Daily Orders")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ORDERS_COLOR.stroke_width(2)));

    chart
        .draw_secondary_series(LineSeries::new(
            records
                .iter()
                .map(|record| (record.index as i32, record.average_order_value)),
            AOV_COLOR.stroke_width(2),
        ))
        .map_err(plot_error)?
        .label("Avg Order ($)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], AOV_COLOR.stroke_width(2)));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn margin_color(margin: i64) -> RGBColor {
    if margin > 20 {
        STRONG_MARGIN_COLOR
    } else if margin > 15 {
        FAIR_MARGIN_COLOR
    } else {
        WEAK_MARGIN_COLOR
    }
}

fn render_margin(
    output_path: &str,
    records: &[MonthRecord],
    size: (u32, u32),
) -> Result<(), ProjectionPlotError> {
    let margins: Vec<(i32, i64)> = records
        .iter()
        .filter_map(|record| record.margin_percent.map(|m| (record.index as i32, m)))
        .collect();
    let max_y = margins.iter().map(|(_, m)| *m + 5).max().unwrap_or(0).max(35);
    let min_y = margins.iter().map(|(_, m)| *m).min().unwrap_or(0).min(0);
    let max_x = records.len() as i32;

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(ChartKind::Margin.title(), ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, min_y..max_y)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Net margin")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(8)
        .x_label_formatter(&|index| month_label(records, *index))
        .y_label_formatter(&|value| format!("{value}%"))
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(margins.iter().map(|(index, margin)| {
            Rectangle::new(
                [(*index, 0), (*index + 1, *margin)],
                margin_color(*margin).filled(),
            )
        }))
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

fn render_cost_stack(
    output_path: &str,
    records: &[MonthRecord],
    size: (u32, u32),
) -> Result<(), ProjectionPlotError> {
    let max_y = records
        .iter()
        .map(|record| record.total_costs)
        .max()
        .unwrap_or(0)
        .max(1);
    let max_x = records.len() as i32;

    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(ChartKind::CostStack.title(), ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Month")
        .y_desc("Dollars")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 20))
        .x_labels(8)
        .x_label_formatter(&|index| month_label(records, *index))
        .y_label_formatter(&|value| format_currency(*value))
        .draw()
        .map_err(plot_error)?;

    let mut bottoms = vec![0_i64; records.len()];
    for (category, color) in CostCategory::ALL.iter().zip(COST_COLORS) {
        let mut bars = Vec::with_capacity(records.len());
        for (slot, record) in records.iter().enumerate() {
            let amount = record.costs.amount(*category);
            let bottom = bottoms[slot];
            bars.push(Rectangle::new(
                [(record.index as i32, bottom), (record.index as i32 + 1, bottom + amount)],
                color.filled(),
            ));
            bottoms[slot] = bottom + amount;
        }

        chart
            .draw_series(bars)
            .map_err(plot_error)?
            .label(category.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::base_projection;
    use assert_fs::prelude::*;
    use predicates::prelude::*;

    #[test]
    fn write_chart_png_renders_every_kind() {
        let records = base_projection();
        let temp = assert_fs::TempDir::new().unwrap();

        for kind in ChartKind::ALL {
            let output = temp.child(format!("{}.png", kind.file_suffix()));
            write_chart_png(output.path().to_str().unwrap(), kind, &records, (900, 600)).unwrap();

            output.assert(predicate::path::exists());
            let metadata = std::fs::metadata(output.path()).unwrap();
            assert!(metadata.len() > 0, "{} chart is empty", kind.file_suffix());
        }
    }

    #[test]
    fn write_chart_png_rejects_empty_projection() {
        let output = assert_fs::NamedTempFile::new("empty.png").unwrap();
        let error = write_chart_png(output.path().to_str().unwrap(), ChartKind::Margin, &[], (900, 600))
            .expect_err("expected empty projection error");
        assert!(matches!(error, ProjectionPlotError::EmptyProjection));
    }

    #[test]
    fn chart_paths_use_kind_suffix() {
        assert_eq!(chart_path("out/base", ChartKind::CostStack), "out/base.cost-stack.png");
    }

    #[test]
    fn margin_bands() {
        assert_eq!(margin_color(27).rgb(), STRONG_MARGIN_COLOR.rgb());
        assert_eq!(margin_color(20).rgb(), FAIR_MARGIN_COLOR.rgb());
        assert_eq!(margin_color(15).rgb(), WEAK_MARGIN_COLOR.rgb());
    }
}
