use serde::{Deserialize, Serialize};

/// A `{value, label}` dictionary option used by lead form selects
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DictOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

impl DictOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DictItemsData {
    pub dict_type: String,
    pub items: Vec<DictOption>,
}
