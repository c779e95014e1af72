//! Mode planning: deciding how a target collection's modes map to Light and
//! Dark.
//!
//! The host owns the collection; this module only computes a declarative
//! plan (which mode to use for each side, what to rename, what to create)
//! that the caller applies through the host API.

use serde::{Deserialize, Serialize};

/// A mode as reported by the host collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub mode_id: String,
    pub name: String,
}

/// A rename the host should apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeRename {
    pub mode_id: String,
    pub new_name: String,
}

/// Where dark-mode values go: an existing mode, or one the host must create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeTarget {
    Existing(String),
    Create { name: String },
}

/// The full plan for a target collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePlan {
    pub light_mode_id: String,
    pub dark_mode: ModeTarget,
    pub renames: Vec<ModeRename>,
}

/// Plan the Light/Dark mode setup for a collection.
///
/// A single-mode collection keeps its default mode as Light (renaming it)
/// and creates a Dark mode. With multiple modes, names are matched
/// case-insensitively: a name containing `light` (or exactly `default`)
/// claims the light side, a name containing `dark` claims the dark side,
/// later matches winning over earlier ones. A missing dark mode is created;
/// a default mode chosen as light but not already named `Light` is renamed.
pub fn plan_modes(modes: &[ModeInfo], default_mode_id: &str) -> ModePlan {
    if modes.len() <= 1 {
        return ModePlan {
            light_mode_id: default_mode_id.to_string(),
            dark_mode: ModeTarget::Create {
                name: "Dark".to_string(),
            },
            renames: vec![ModeRename {
                mode_id: default_mode_id.to_string(),
                new_name: "Light".to_string(),
            }],
        };
    }

    let mut light_mode_id = default_mode_id.to_string();
    let mut dark_mode_id = None;

    for mode in modes {
        let name = mode.name.to_lowercase();
        if name.contains("light") || name == "default" {
            light_mode_id = mode.mode_id.clone();
        } else if name.contains("dark") {
            dark_mode_id = Some(mode.mode_id.clone());
        }
    }

    let mut renames = Vec::new();
    if light_mode_id == default_mode_id {
        let default_mode = modes.iter().find(|m| m.mode_id == default_mode_id);
        if let Some(mode) = default_mode {
            if !mode.name.eq_ignore_ascii_case("light") {
                renames.push(ModeRename {
                    mode_id: light_mode_id.clone(),
                    new_name: "Light".to_string(),
                });
            }
        }
    }

    ModePlan {
        light_mode_id,
        dark_mode: dark_mode_id.map_or(
            ModeTarget::Create {
                name: "Dark".to_string(),
            },
            ModeTarget::Existing,
        ),
        renames,
    }
}
