//! Riviera tenants API.
//!
//! Response shape: `{"payload": {"data": [{"id", "title", "status"}]}}`.
//! Tenant ids come back as numbers and are stringified; the endpoint does
//! not expose per-tenant categories.

use mallwatch_core::Point;

use crate::error::IngestError;
use crate::sources::{id_to_string, status_field, str_field};

pub(super) fn parse_points(
    payload: &serde_json::Value,
    url: &str,
    parsing_date: &str,
) -> Result<Vec<Point>, IngestError> {
    let Some(tenants) = payload
        .get("payload")
        .and_then(|p| p.get("data"))
        .and_then(serde_json::Value::as_array)
    else {
        return Err(IngestError::MissingPayload {
            url: url.to_owned(),
            field: "payload.data",
        });
    };

    let points = tenants
        .iter()
        .map(|entry| Point {
            id: id_to_string(entry.get("id")),
            name: str_field(entry, "title"),
            parsed_categories: vec![],
            assigned_categories: vec![],
            parsing_date: parsing_date.to_string(),
            status: status_field(entry),
        })
        .collect();

    Ok(points)
}
