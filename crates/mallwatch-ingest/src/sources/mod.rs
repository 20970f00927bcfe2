//! Vendor-specific payload mapping.
//!
//! Each supported mall API gets one module that knows the endpoint path and
//! how to extract `Point` fields from the vendor's JSON shape. The diff
//! engine never sees any of this; everything vendor-flavored ends here.

mod aviapark;
mod riviera;

use std::fmt;
use std::str::FromStr;

use mallwatch_core::Point;

use crate::error::IngestError;

/// A supported mall tenant API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Aviapark mall, `GET /v1/departments`.
    Aviapark,
    /// Riviera mall, `GET /api/v1/tenants`. Category data is not exposed by
    /// this endpoint, so `parsed_categories` is always empty.
    Riviera,
}

impl Source {
    /// The vendor's production API origin.
    #[must_use]
    pub fn default_base_url(self) -> &'static str {
        match self {
            Source::Aviapark => "https://api.aviapark.com",
            Source::Riviera => "https://api.riviera.su",
        }
    }

    /// Full endpoint URL against the given base origin.
    #[must_use]
    pub fn endpoint_url(self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            Source::Aviapark => format!("{base}/v1/departments"),
            Source::Riviera => format!("{base}/api/v1/tenants?category&limit=1500"),
        }
    }

    /// Maps a decoded vendor payload into `Point`s.
    ///
    /// Extraction is best-effort per field (missing attributes fall back to
    /// empty strings / `"unknown"`), but a payload without the vendor's
    /// envelope field is a hard error — that distinguishes "zero tenants"
    /// from "not the response we expected".
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::MissingPayload`] when the envelope field is
    /// absent or not an array.
    pub(crate) fn parse_points(
        self,
        payload: &serde_json::Value,
        url: &str,
        parsing_date: &str,
    ) -> Result<Vec<Point>, IngestError> {
        match self {
            Source::Aviapark => aviapark::parse_points(payload, url, parsing_date),
            Source::Riviera => riviera::parse_points(payload, url, parsing_date),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Aviapark => write!(f, "aviapark"),
            Source::Riviera => write!(f, "riviera"),
        }
    }
}

impl FromStr for Source {
    type Err = IngestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aviapark" => Ok(Source::Aviapark),
            "riviera" => Ok(Source::Riviera),
            other => Err(IngestError::UnknownSource(other.to_string())),
        }
    }
}

/// Renders a vendor `id` value as a string: strings pass through, numbers
/// are stringified, anything missing becomes empty.
pub(crate) fn id_to_string(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Extracts a string field, defaulting to empty when absent or non-string.
pub(crate) fn str_field(value: &serde_json::Value, field: &str) -> String {
    value
        .get(field)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Extracts the vendor status field, defaulting to `"unknown"`.
pub(crate) fn status_field(value: &serde_json::Value) -> String {
    value
        .get("status")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}
