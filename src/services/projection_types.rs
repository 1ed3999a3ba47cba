use serde::Serialize;

use crate::domain::month_record::MonthRecord;
use crate::domain::scenario::Scenario;
use crate::services::aggregation::{summarize_projection, ProjectionSummary};
use crate::services::projection::generate_projection;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProjectionOutput {
    pub summary: ProjectionSummary,
    pub months: Vec<MonthRecord>,
}

impl ProjectionOutput {
    pub fn for_scenario(scenario: Scenario) -> Self {
        let months = generate_projection(scenario);
        Self {
            summary: summarize_projection(scenario, &months),
            months,
        }
    }
}
