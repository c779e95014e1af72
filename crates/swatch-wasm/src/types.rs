//! JS-facing mirror types for the plugin boundary.

use serde::{Deserialize, Serialize};
use swatch_core::VariableMapping;
use swatch_resolver::{ModeInfo, ModePlan, ModeTarget};

/// One mapping as the plugin UI sees it: three plain strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMappingJs {
    pub variable_name: String,
    pub light_reference: String,
    pub dark_reference: String,
}

impl VariableMappingJs {
    pub fn from_core(mapping: &VariableMapping) -> Self {
        Self {
            variable_name: mapping.target.clone(),
            light_reference: mapping.light.canonical(),
            dark_reference: mapping.dark.canonical(),
        }
    }
}

/// The message posted back to the UI after a successful parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseSummaryJs {
    pub sentiment: Option<String>,
    pub total_found: usize,
    pub variables: Vec<VariableMappingJs>,
}

/// A collection mode as reported by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfoJs {
    pub mode_id: String,
    pub name: String,
}

impl ModeInfoJs {
    pub fn into_core(self) -> ModeInfo {
        ModeInfo {
            mode_id: self.mode_id,
            name: self.name,
        }
    }
}

/// A rename the host should apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeRenameJs {
    pub mode_id: String,
    pub new_name: String,
}

/// The mode plan, flattened for JS consumption: exactly one of
/// `existingDarkModeId` / `createDarkMode` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModePlanJs {
    pub light_mode_id: String,
    pub existing_dark_mode_id: Option<String>,
    pub create_dark_mode: Option<String>,
    pub renames: Vec<ModeRenameJs>,
}

impl ModePlanJs {
    pub fn from_core(plan: ModePlan) -> Self {
        let (existing_dark_mode_id, create_dark_mode) = match plan.dark_mode {
            ModeTarget::Existing(id) => (Some(id), None),
            ModeTarget::Create { name } => (None, Some(name)),
        };
        Self {
            light_mode_id: plan.light_mode_id,
            existing_dark_mode_id,
            create_dark_mode,
            renames: plan
                .renames
                .into_iter()
                .map(|r| ModeRenameJs {
                    mode_id: r.mode_id,
                    new_name: r.new_name,
                })
                .collect(),
        }
    }
}
