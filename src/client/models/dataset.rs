//! Dataset catalog wire model

use serde::{Deserialize, Serialize};

/// A training dataset registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Dataset id
    pub id: u64,

    /// Display name
    pub data_name: String,

    /// Creation timestamp (as string from API)
    pub create_time: String,

    /// Last update timestamp (as string from API)
    pub update_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_wire_names() {
        let json = r#"{
            "id": 5,
            "dataName": "MNIST",
            "createTime": "2026-01-01 09:30:00",
            "updateTime": "2026-01-02 09:30:00"
        }"#;

        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.data_name, "MNIST");
    }
}
