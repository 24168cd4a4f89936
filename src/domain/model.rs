use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Client device classification, supplied per request by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Normal,
    Mobile,
    Tablet,
}

impl DeviceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceCategory::Normal => "normal",
            DeviceCategory::Mobile => "mobile",
            DeviceCategory::Tablet => "tablet",
        }
    }
}

impl std::fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeviceCategory {
    type Err = crate::utils::error::ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(DeviceCategory::Normal),
            "mobile" => Ok(DeviceCategory::Mobile),
            "tablet" => Ok(DeviceCategory::Tablet),
            other => Err(crate::utils::error::ViewError::ValidationError {
                message: format!(
                    "Unknown device category '{}', expected normal, mobile or tablet",
                    other
                ),
            }),
        }
    }
}

/// Per-request values handed to the template engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderContext {
    pub values: HashMap<String, serde_json::Value>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: serde_json::Value) {
        self.values.insert(key.to_string(), value);
    }
}

/// Output of a completed render.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub body: String,
    pub template_path: String,
    pub encoding: String,
    pub device: DeviceCategory,
}
