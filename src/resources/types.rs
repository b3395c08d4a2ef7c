//! Type definitions for discovered resources

use serde::{Deserialize, Serialize};

/// Kind of resource discovered during a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Stylesheet,
    Image,
    Script,
    Video,
    VideoPoster,
    CssAsset,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Stylesheet => write!(f, "stylesheet"),
            ResourceKind::Image => write!(f, "image"),
            ResourceKind::Script => write!(f, "script"),
            ResourceKind::Video => write!(f, "video"),
            ResourceKind::VideoPoster => write!(f, "video poster"),
            ResourceKind::CssAsset => write!(f, "CSS asset"),
        }
    }
}

/// Where the bytes of a resource come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceSource {
    /// Absolute URL (or the raw reference when it could not be resolved)
    Url(String),
    /// Content already known at discovery time, such as a rewritten stylesheet
    Resolved(Vec<u8>),
}

/// A discovered external asset plus its assigned local archive path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub source: ResourceSource,
    pub local_path: String,
    pub kind: ResourceKind,
}

impl ResourceRecord {
    /// Record whose bytes must be fetched from `url`
    #[must_use]
    pub fn remote(url: impl Into<String>, local_path: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            source: ResourceSource::Url(url.into()),
            local_path: local_path.into(),
            kind,
        }
    }

    /// Record whose bytes are already known
    #[must_use]
    pub fn resolved(
        content: impl Into<Vec<u8>>,
        local_path: impl Into<String>,
        kind: ResourceKind,
    ) -> Self {
        Self {
            source: ResourceSource::Resolved(content.into()),
            local_path: local_path.into(),
            kind,
        }
    }

    /// Source URL, or `None` for already-resolved content
    #[must_use]
    pub fn source_url(&self) -> Option<&str> {
        match &self.source {
            ResourceSource::Url(url) => Some(url),
            ResourceSource::Resolved(_) => None,
        }
    }
}

/// Rewritten document plus the ordered resource list, handed from
/// rewriting to fetching
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureResult {
    pub document: String,
    pub resources: Vec<ResourceRecord>,
}

/// A resource record and its bytes, `None` when the fetch failed
#[derive(Debug, Clone)]
pub struct FetchedResource {
    pub record: ResourceRecord,
    pub bytes: Option<Vec<u8>>,
}

impl FetchedResource {
    /// Whether the bytes were obtained
    #[must_use]
    pub fn is_fetched(&self) -> bool {
        self.bytes.is_some()
    }
}
