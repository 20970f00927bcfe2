//! Aviapark departments API.
//!
//! Response shape: `{"departments": [{"id", "title", "categories", "status"}]}`.

use mallwatch_core::Point;

use crate::error::IngestError;
use crate::sources::{id_to_string, status_field, str_field};

pub(super) fn parse_points(
    payload: &serde_json::Value,
    url: &str,
    parsing_date: &str,
) -> Result<Vec<Point>, IngestError> {
    let Some(departments) = payload
        .get("departments")
        .and_then(serde_json::Value::as_array)
    else {
        return Err(IngestError::MissingPayload {
            url: url.to_owned(),
            field: "departments",
        });
    };

    let points = departments
        .iter()
        .map(|entry| Point {
            id: id_to_string(entry.get("id")),
            name: str_field(entry, "title"),
            parsed_categories: entry
                .get("categories")
                .and_then(serde_json::Value::as_array)
                .map(|cats| {
                    cats.iter()
                        .filter_map(serde_json::Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            assigned_categories: vec![],
            parsing_date: parsing_date.to_string(),
            status: status_field(entry),
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_points;
    use crate::error::IngestError;

    const STAMP: &str = "2026-08-30 12:00:00";

    #[test]
    fn maps_departments_into_points() {
        let payload = json!({
            "departments": [
                {
                    "id": "417",
                    "title": "Zara",
                    "categories": ["clothes", "shoes"],
                    "status": "opened"
                },
                {"title": "食堂"}
            ]
        });

        let points = parse_points(&payload, "http://test/v1/departments", STAMP).unwrap();
        assert_eq!(points.len(), 2);

        assert_eq!(points[0].id, "417");
        assert_eq!(points[0].name, "Zara");
        assert_eq!(points[0].parsed_categories, vec!["clothes", "shoes"]);
        assert_eq!(points[0].status, "opened");
        assert_eq!(points[0].parsing_date, STAMP);
        assert!(points[0].assigned_categories.is_empty());

        assert_eq!(points[1].id, "");
        assert_eq!(points[1].name, "食堂");
        assert!(points[1].parsed_categories.is_empty());
        assert_eq!(points[1].status, "unknown");
    }

    #[test]
    fn empty_departments_is_a_valid_zero_result() {
        let payload = json!({"departments": []});
        let points = parse_points(&payload, "http://test/v1/departments", STAMP).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn missing_envelope_field_is_an_error() {
        let payload = json!({"items": []});
        let err = parse_points(&payload, "http://test/v1/departments", STAMP).unwrap_err();
        assert!(
            matches!(err, IngestError::MissingPayload { field: "departments", .. }),
            "expected MissingPayload(departments), got: {err:?}"
        );
    }
}
