use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single SBOM component.
///
/// Only `type`, `purl`, and `licenses` are interpreted by the pipeline;
/// every other field is captured in `extra` and serialized back unmodified,
/// so fragments produced by different scanners survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<LicenseEntry>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of a component's `licenses` array.
///
/// Entries that are not of the `{"license": {"id": ...}}` shape (such as
/// SPDX expressions) ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<LicenseRef>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LicenseEntry {
    /// A `{"license": {"id": <id>}}` entry carrying just the identifier
    pub fn with_id(id: &str) -> Self {
        Self {
            license: Some(LicenseRef {
                id: Some(id.to_string()),
                extra: Map::new(),
            }),
            extra: Map::new(),
        }
    }
}

impl Component {
    /// Whether this component is a library entry
    pub fn is_library(&self) -> bool {
        self.component_type.as_deref() == Some("library")
    }

    /// The component's purl, or the empty string when absent
    pub fn purl_str(&self) -> &str {
        self.purl.as_deref().unwrap_or("")
    }

    /// Whether the component already carries license data.
    /// An empty `licenses` array counts as absent.
    pub fn has_license(&self) -> bool {
        self.licenses.as_ref().is_some_and(|entries| !entries.is_empty())
    }

    /// Replaces the `licenses` field with a single identifier entry.
    /// Callers must check `has_license` first; enrichment never overwrites.
    pub fn attach_license(&mut self, id: &str) {
        self.licenses = Some(vec![LicenseEntry::with_id(id)]);
    }
}
