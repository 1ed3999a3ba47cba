use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::projection_types::ProjectionOutput;

#[derive(Error, Debug)]
pub enum ProjectionExportError {
    #[error("failed to serialize projection to yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize projection to json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write projection: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Yaml,
    Json,
}

pub fn serialize_projection<W: Write>(
    writer: &mut W,
    output: &ProjectionOutput,
    format: ExportFormat,
) -> Result<(), ProjectionExportError> {
    let contents = match format {
        ExportFormat::Yaml => serde_yaml::to_string(output)?,
        ExportFormat::Json => serde_json::to_string_pretty(output)?,
    };
    writer.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::Scenario;
    use crate::test_support::zero_revenue_record;

    #[test]
    fn yaml_export_lists_summary_and_months() {
        let output = ProjectionOutput::for_scenario(Scenario::Base);
        let mut buf = Vec::new();
        serialize_projection(&mut buf, &output, ExportFormat::Yaml).unwrap();
        let yaml = String::from_utf8(buf).unwrap();

        assert!(yaml.contains("summary:"));
        assert!(yaml.contains("scenario: base"));
        assert!(yaml.contains("months:"));
        assert!(yaml.contains("month: Mar '26") || yaml.contains("month: 'Mar ''26'"));
        assert!(yaml.contains("revenue: 20064"));
        assert!(yaml.contains("platform_fee: 5016"));
        assert!(yaml.contains("is_rent_free: true"));
    }

    #[test]
    fn json_export_round_trips_through_value() {
        let output = ProjectionOutput::for_scenario(Scenario::Optimistic);
        let mut buf = Vec::new();
        serialize_projection(&mut buf, &output, ExportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["summary"]["scenario"], "optimistic");
        assert_eq!(value["months"].as_array().unwrap().len(), 24);
        assert_eq!(value["months"][0]["orders"], 37);
        assert_eq!(value["months"][0]["costs"]["permits"], 600);
    }

    #[test]
    fn missing_margin_serializes_as_null() {
        let mut output = ProjectionOutput::for_scenario(Scenario::Base);
        output.months[3] = zero_revenue_record(3);
        let mut buf = Vec::new();
        serialize_projection(&mut buf, &output, ExportFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value["months"][3]["margin_percent"].is_null());
    }
}
