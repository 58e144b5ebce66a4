use crate::error::ApiError;
use crate::models::dict::DictOption;
use crate::services::http::RequestDescriptor;
use crate::services::request::ApiClient;

// Short form codes used by lead forms → backend dictionary types
const DICT_TYPE_ALIASES: &[(&str, &str)] = &[
    ("status", "lead_status"),
    ("source", "lead_source"),
    ("level", "lead_level"),
    ("loss_reason", "loss_reason"),
];

fn normalize_dict_type(dict_type: &str) -> &str {
    DICT_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == dict_type)
        .map(|(_, full)| *full)
        .unwrap_or(dict_type)
}

/// Fetch the items of one dictionary type.
///
/// Tolerates both response shapes the backend has used: a bare array or a
/// `{dictType, items}` object.
pub async fn get_dict_items(client: &ApiClient, dict_type: &str) -> Result<Vec<DictOption>, ApiError> {
    let url = format!("/api/v1/dict/{}", normalize_dict_type(dict_type));
    let payload = client.request(RequestDescriptor::get(&url)).await?;

    if payload.is_array() {
        return serde_json::from_value(payload)
            .map_err(|e| ApiError::Decode(format!("Parse error: {}", e)));
    }
    match payload.get("items") {
        Some(items) => serde_json::from_value(items.clone())
            .map_err(|e| ApiError::Decode(format!("Parse error: {}", e))),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_aliases_resolve_to_backend_types() {
        assert_eq!(normalize_dict_type("status"), "lead_status");
        assert_eq!(normalize_dict_type("source"), "lead_source");
        assert_eq!(normalize_dict_type("level"), "lead_level");
    }

    #[test]
    fn unknown_types_pass_through() {
        assert_eq!(normalize_dict_type("tag"), "tag");
        assert_eq!(normalize_dict_type("loss_reason"), "loss_reason");
    }
}
