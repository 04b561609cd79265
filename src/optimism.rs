//! Optimism bias uplifts for cost estimates
//!
//! Green Book supplementary guidance gives upper-bound uplifts by project
//! type, applied to the initial cost estimate to correct for the historical
//! tendency of appraisals to underestimate costs.

use crate::error::{AppraisalError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Project types with a published optimism bias uplift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum ProjectType {
    StandardBuilding,
    NonStandardBuilding,
    #[default]
    StandardCivilEngineering,
    NonStandardCivilEngineering,
    EquipmentDevelopment,
    Outsourcing,
}

impl ProjectType {
    pub const ALL: [ProjectType; 6] = [
        ProjectType::StandardBuilding,
        ProjectType::NonStandardBuilding,
        ProjectType::StandardCivilEngineering,
        ProjectType::NonStandardCivilEngineering,
        ProjectType::EquipmentDevelopment,
        ProjectType::Outsourcing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::StandardBuilding => "standard_building",
            ProjectType::NonStandardBuilding => "non_standard_building",
            ProjectType::StandardCivilEngineering => "standard_civil_engineering",
            ProjectType::NonStandardCivilEngineering => "non_standard_civil_engineering",
            ProjectType::EquipmentDevelopment => "equipment_development",
            ProjectType::Outsourcing => "outsourcing",
        }
    }

    /// Upper-bound uplift as a fraction of the estimate
    pub fn uplift(&self) -> f64 {
        match self {
            ProjectType::StandardBuilding => 0.24,
            ProjectType::NonStandardBuilding => 0.51,
            ProjectType::StandardCivilEngineering => 0.44,
            ProjectType::NonStandardCivilEngineering => 0.66,
            ProjectType::EquipmentDevelopment => 0.54,
            ProjectType::Outsourcing => 0.41,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = AppraisalError;

    fn from_str(s: &str) -> Result<Self> {
        ProjectType::ALL
            .into_iter()
            .find(|project_type| project_type.as_str() == s)
            .ok_or_else(|| AppraisalError::UnknownProjectType {
                given: s.to_string(),
                valid: ProjectType::ALL.iter().map(|p| p.as_str()).collect(),
            })
    }
}

/// Apply the optimism bias uplift for a project type to a cost estimate
pub fn apply_optimism_bias(cost_estimate: f64, project_type: ProjectType) -> f64 {
    cost_estimate * (1.0 + project_type.uplift())
}

/// Apply optimism bias where the project type arrives as text
pub fn apply_optimism_bias_named(cost_estimate: f64, project_type: &str) -> Result<f64> {
    let project_type: ProjectType = project_type.parse()?;
    Ok(apply_optimism_bias(cost_estimate, project_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_civil_engineering_uplift() {
        let adjusted = apply_optimism_bias(10_000_000.0, ProjectType::StandardCivilEngineering);
        assert_eq!(adjusted, 14_400_000.0);
    }

    #[test]
    fn test_default_project_type() {
        assert_eq!(ProjectType::default(), ProjectType::StandardCivilEngineering);
    }

    #[test]
    fn test_all_uplifts() {
        let expected = [
            ("standard_building", 0.24),
            ("non_standard_building", 0.51),
            ("standard_civil_engineering", 0.44),
            ("non_standard_civil_engineering", 0.66),
            ("equipment_development", 0.54),
            ("outsourcing", 0.41),
        ];

        for (name, uplift) in expected {
            let project_type: ProjectType = name.parse().unwrap();
            assert_eq!(project_type.uplift(), uplift);
            assert_eq!(project_type.to_string(), name);

            let adjusted = apply_optimism_bias_named(1_000.0, name).unwrap();
            assert!((adjusted - 1_000.0 * (1.0 + uplift)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_unknown_project_type_lists_valid_options() {
        let err = apply_optimism_bias_named(1_000.0, "bridge").unwrap_err();
        match &err {
            AppraisalError::UnknownProjectType { given, valid } => {
                assert_eq!(given, "bridge");
                assert_eq!(valid.len(), 6);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("outsourcing"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ProjectType::NonStandardBuilding).unwrap();
        assert_eq!(json, "\"non_standard_building\"");
    }
}
