use super::Component;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A CycloneDX document as read from disk.
///
/// Only `components` is interpreted (missing means empty); the header and
/// any other top-level fields are captured in `extra` so a filtered
/// document keeps the header its scanner wrote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SbomDocument {
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SbomDocument {
    /// Returns the same document with its component list replaced
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    /// Serializes the document with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}

/// The combined SBOM produced by the merge stage.
///
/// Unlike `SbomDocument` this is always written with a fresh CycloneDX 1.4
/// header; nothing from the input fragments' headers survives the merge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedBom {
    #[serde(rename = "bomFormat")]
    pub bom_format: String,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
    pub version: u32,
    pub components: Vec<Component>,
}

impl CombinedBom {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.4".to_string(),
            version: 1,
            components,
        }
    }

    /// Serializes the document with two-space indentation
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }
}
