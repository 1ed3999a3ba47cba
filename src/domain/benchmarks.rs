//! Industry reference figures shown next to the projection.
//!
//! These are static tables, not outputs of the projection engine. The only
//! derived table is the channel comparison, which applies the platform fee
//! ratio to a fixed monthly revenue.

use serde::Serialize;

use crate::domain::assumptions::PLATFORM_FEE_RATIO;
use crate::services::rounding::round_half_up;

/// Per-order cost range of one ingredient or consumable.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct MaterialCost {
    pub item: &'static str,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    pub note: &'static str,
}

pub const MATERIAL_COSTS: [MaterialCost; 8] = [
    MaterialCost {
        item: "Organic Produce",
        low: 2.80,
        mid: 3.40,
        high: 4.20,
        note: "Biggest cost driver; bulk and seasonal buying from local farms cuts 15-25%",
    },
    MaterialCost {
        item: "Botanical Herbs & Adaptogens",
        low: 0.60,
        mid: 0.90,
        high: 1.40,
        note: "Sea moss, elderberry, ashwagandha",
    },
    MaterialCost {
        item: "Sweeteners (honey, agave)",
        low: 0.20,
        mid: 0.35,
        high: 0.55,
        note: "Raw honey carries a premium ingredient cost",
    },
    MaterialCost {
        item: "Packaging (bottles, cups)",
        low: 0.85,
        mid: 1.10,
        high: 1.50,
        note: "Glass adds brand value but costs more than plastic",
    },
    MaterialCost {
        item: "Labels & Branding",
        low: 0.15,
        mid: 0.25,
        high: 0.40,
        note: "Drops sharply at volume (500+ units/day)",
    },
    MaterialCost {
        item: "Insulated Delivery Liners",
        low: 0.10,
        mid: 0.15,
        high: 0.22,
        note: "Keeps cold-pressed quality on delivery",
    },
    MaterialCost {
        item: "Kitchen Consumables",
        low: 0.08,
        mid: 0.12,
        high: 0.18,
        note: "Gloves and sanitizer for health department compliance",
    },
    MaterialCost {
        item: "Add-in Upsells (collagen, chia)",
        low: 0.40,
        mid: 0.65,
        high: 1.00,
        note: "About 40% attach rate; customer pays $2-3 extra",
    },
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct MaterialTotals {
    pub low: f64,
    pub mid: f64,
    pub high: f64,
}

pub fn material_totals(materials: &[MaterialCost]) -> MaterialTotals {
    MaterialTotals {
        low: materials.iter().map(|m| m.low).sum(),
        mid: materials.iter().map(|m| m.mid).sum(),
        high: materials.iter().map(|m| m.high).sum(),
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ProductMargin {
    pub name: &'static str,
    pub menu_price: f64,
    pub cogs: f64,
    pub gross_margin_percent: u32,
    /// Margin kept after the delivery platform commission.
    pub after_platform_percent: u32,
    pub note: &'static str,
}

pub const PRODUCT_MARGINS: [ProductMargin; 6] = [
    ProductMargin {
        name: "Cold-Pressed Juice (12oz)",
        menu_price: 14.0,
        cogs: 3.50,
        gross_margin_percent: 75,
        after_platform_percent: 48,
        note: "Core volume driver",
    },
    ProductMargin {
        name: "Smoothie (16oz)",
        menu_price: 16.0,
        cogs: 4.20,
        gross_margin_percent: 74,
        after_platform_percent: 47,
        note: "High perceived value",
    },
    ProductMargin {
        name: "Herbal Syrup / Honey (4oz)",
        menu_price: 18.0,
        cogs: 3.80,
        gross_margin_percent: 79,
        after_platform_percent: 52,
        note: "Best margin item",
    },
    ProductMargin {
        name: "Sea Moss / Wellness Blend",
        menu_price: 22.0,
        cogs: 5.50,
        gross_margin_percent: 75,
        after_platform_percent: 48,
        note: "High repeat purchase",
    },
    ProductMargin {
        name: "Detox Bundle (3 items)",
        menu_price: 38.0,
        cogs: 9.50,
        gross_margin_percent: 75,
        after_platform_percent: 48,
        note: "Boosts average order value",
    },
    ProductMargin {
        name: "Seasonal Wellness Box",
        menu_price: 55.0,
        cogs: 14.00,
        gross_margin_percent: 75,
        after_platform_percent: 48,
        note: "High ticket, autumn and winter",
    },
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostStructureNote {
    pub category: &'static str,
    pub share: &'static str,
    pub note: &'static str,
}

pub const COST_STRUCTURE: [CostStructureNote; 8] = [
    CostStructureNote {
        category: "Platform Commission",
        share: "25%",
        note: "Lite plan is 15% but loses featured placement. Build direct orders over time.",
    },
    CostStructureNote {
        category: "Produce & Botanicals",
        share: "20%",
        note: "Biggest COGS line. Bulk buying from local farms can reduce it to 16-17%.",
    },
    CostStructureNote {
        category: "Labor",
        share: "11-14%",
        note: "One prep person scales to two by month 8-10. No front-of-house staff.",
    },
    CostStructureNote {
        category: "Packaging",
        share: "7%",
        note: "Glass bottles signal a premium brand. Volume buying drops it to about 5%.",
    },
    CostStructureNote {
        category: "Marketing",
        share: "5-8%",
        note: "Heavier in months 1-3 for visibility. Organic reviews reduce it over time.",
    },
    CostStructureNote {
        category: "Kitchen Rent",
        share: "$0 M1, then $950-$1,100",
        note: "The first month is rent free.",
    },
    CostStructureNote {
        category: "Utilities & Misc",
        share: "~1.5%",
        note: "Shared kitchen means shared utility costs.",
    },
    CostStructureNote {
        category: "Net Margin",
        share: "15-26%",
        note: "Well above the restaurant average of 3-5%.",
    },
];

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostReductionStrategy {
    pub title: &'static str,
    pub detail: &'static str,
    pub timing: &'static str,
}

pub const COST_REDUCTION_STRATEGIES: [CostReductionStrategy; 6] = [
    CostReductionStrategy {
        title: "Bulk Produce",
        detail: "Weekly volume commitment with a farm co-op drops produce cost 15-25%.",
        timing: "Months 3-4",
    },
    CostReductionStrategy {
        title: "Volume Labels",
        detail: "At 60+ orders/day bulk label printing drops unit cost from $0.25 to $0.10.",
        timing: "Month 3+",
    },
    CostReductionStrategy {
        title: "Direct Orders",
        detail: "Website orders carry no commission, saving $5-6 per order.",
        timing: "Month 2+",
    },
    CostReductionStrategy {
        title: "Seasonal Menus",
        detail: "Seasonal produce cuts ingredient costs in peak growing seasons.",
        timing: "Ongoing",
    },
    CostReductionStrategy {
        title: "Upsell Add-ins",
        detail: "Add-ons cost $0.65 and sell for $2-3; a 40% attach rate lifts revenue 15%.",
        timing: "Month 1",
    },
    CostReductionStrategy {
        title: "Lock Kitchen Rate",
        detail: "A 6-12 month lease at a fixed rate avoids rent escalation.",
        timing: "Months 4-6",
    },
];

/// Baseline monthly revenue used for the channel comparison.
pub const CHANNEL_COMPARISON_REVENUE: i64 = 52_000;

/// Shares of orders placed directly instead of through the platform.
pub const DIRECT_ORDER_SHARES: [f64; 3] = [0.0, 0.2, 0.4];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChannelMix {
    pub title: String,
    pub direct_share: f64,
    pub revenue: i64,
    pub platform_fees: i64,
    pub kept: i64,
}

pub fn channel_mix(revenue: i64, direct_share: f64) -> ChannelMix {
    let platform_share = 1.0 - direct_share;
    let platform_fees = round_half_up(revenue as f64 * PLATFORM_FEE_RATIO * platform_share) as i64;
    let platform_percent = round_half_up(platform_share * 100.0) as i64;
    let direct_percent = 100 - platform_percent;
    let title = if direct_percent == 0 {
        "100% Platform".to_string()
    } else {
        format!("{platform_percent}% Platform / {direct_percent}% Direct")
    };

    ChannelMix {
        title,
        direct_share,
        revenue,
        platform_fees,
        kept: revenue - platform_fees,
    }
}

pub fn channel_comparison() -> Vec<ChannelMix> {
    DIRECT_ORDER_SHARES
        .iter()
        .map(|share| channel_mix(CHANNEL_COMPARISON_REVENUE, *share))
        .collect()
}
