//! System resource wire models

use serde::{Deserialize, Serialize};

/// Host resource snapshot reported by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemResources {
    /// CPU usage and topology
    pub cpu: CpuInfo,

    /// Memory usage in GB
    pub memory: MemoryInfo,

    /// GPU memory usage in GB (absent on CPU-only hosts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<GpuInfo>,
}

/// CPU usage and topology
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    /// Usage percentage
    pub usage_percent: f64,

    /// Physical core count
    pub cores: u32,

    /// Logical core count
    pub cores_logical: u32,
}

/// Memory usage in GB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    pub total: f64,
    pub used: f64,
    pub free: f64,
    pub usage_percent: f64,
}

/// GPU memory usage in GB
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpuInfo {
    pub total: f64,
    pub used: f64,
    pub free: f64,
    pub usage_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_without_gpu() {
        let json = r#"{
            "cpu": {"usagePercent": 12.5, "cores": 8, "coresLogical": 16},
            "memory": {"total": 32.0, "used": 9.8, "free": 22.2, "usagePercent": 30.6}
        }"#;

        let resources: SystemResources = serde_json::from_str(json).unwrap();
        assert_eq!(resources.cpu.cores, 8);
        assert!(resources.gpu.is_none());
    }

    #[test]
    fn test_resources_with_gpu() {
        let json = r#"{
            "cpu": {"usagePercent": 50.0, "cores": 16, "coresLogical": 32},
            "memory": {"total": 64.0, "used": 30.0, "free": 34.0, "usagePercent": 46.9},
            "gpu": {"total": 24.0, "used": 20.5, "free": 3.5, "usagePercent": 85.4}
        }"#;

        let resources: SystemResources = serde_json::from_str(json).unwrap();
        assert_eq!(resources.gpu.unwrap().total, 24.0);
    }
}
