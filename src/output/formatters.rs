//! Reusable formatting utilities for CLI output

/// Format a gigabyte quantity for the resources view.
pub fn format_gb(value: f64) -> String {
    format!("{:.1} GB", value)
}

/// Format a usage percentage.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Display an optional string, falling back to "N/A".
pub fn format_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gb() {
        assert_eq!(format_gb(9.84), "9.8 GB");
        assert_eq!(format_gb(0.0), "0.0 GB");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(30.55), "30.6%");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some("x")), "x");
        assert_eq!(format_optional(Some("")), "N/A");
        assert_eq!(format_optional(None), "N/A");
    }
}
