use serde::Serialize;

/// Cost lines tracked for every month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostCategory {
    Produce,
    Packaging,
    Rent,
    Labor,
    PlatformFee,
    Marketing,
    Utilities,
    Permits,
    Supplies,
}

impl CostCategory {
    pub const ALL: [CostCategory; 9] = [
        CostCategory::Produce,
        CostCategory::Packaging,
        CostCategory::Rent,
        CostCategory::Labor,
        CostCategory::PlatformFee,
        CostCategory::Marketing,
        CostCategory::Utilities,
        CostCategory::Permits,
        CostCategory::Supplies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CostCategory::Produce => "Produce",
            CostCategory::Packaging => "Packaging",
            CostCategory::Rent => "Rent",
            CostCategory::Labor => "Labor",
            CostCategory::PlatformFee => "Platform Fees",
            CostCategory::Marketing => "Marketing",
            CostCategory::Utilities => "Utilities",
            CostCategory::Permits => "Permits",
            CostCategory::Supplies => "Supplies",
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CostBreakdown {
    pub produce: i64,
    pub packaging: i64,
    pub rent: i64,
    pub labor: i64,
    pub platform_fee: i64,
    pub marketing: i64,
    pub utilities: i64,
    pub permits: i64,
    pub supplies: i64,
}

impl CostBreakdown {
    pub fn amount(&self, category: CostCategory) -> i64 {
        match category {
            CostCategory::Produce => self.produce,
            CostCategory::Packaging => self.packaging,
            CostCategory::Rent => self.rent,
            CostCategory::Labor => self.labor,
            CostCategory::PlatformFee => self.platform_fee,
            CostCategory::Marketing => self.marketing,
            CostCategory::Utilities => self.utilities,
            CostCategory::Permits => self.permits,
            CostCategory::Supplies => self.supplies,
        }
    }

    /// Sum of the already-rounded components.
    pub fn total(&self) -> i64 {
        CostCategory::ALL
            .iter()
            .map(|category| self.amount(*category))
            .sum()
    }
}

/// Financial figures for one projected month.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct MonthRecord {
    pub index: usize,
    pub month: String,
    /// Daily orders.
    pub orders: u32,
    pub average_order_value: f64,
    pub revenue: i64,
    pub costs: CostBreakdown,
    pub total_costs: i64,
    pub profit: i64,
    /// `None` when the month has no revenue.
    pub margin_percent: Option<i64>,
    pub is_rent_free: bool,
}
