//! Algorithm catalog wire model

use serde::{Deserialize, Serialize};

/// A federated-learning algorithm registered on the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Algorithm {
    /// Algorithm id
    pub id: u64,

    /// Display name
    pub algorithm_name: String,

    /// Creation timestamp (as string from API)
    pub create_time: String,

    /// Last update timestamp (as string from API)
    pub update_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_wire_names() {
        let json = r#"{
            "id": 3,
            "algorithmName": "FedAvg",
            "createTime": "2026-01-01 09:30:00",
            "updateTime": "2026-01-02 09:30:00"
        }"#;

        let algorithm: Algorithm = serde_json::from_str(json).unwrap();
        assert_eq!(algorithm.algorithm_name, "FedAvg");
        assert_eq!(algorithm.id, 3);
    }
}
