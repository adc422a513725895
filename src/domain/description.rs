use chrono::{DateTime, SecondsFormat, Utc};

/// Default prefix for version and deployment descriptions.
pub const DEFAULT_DESCRIPTION_PREFIX: &str = "Auto deploy";

/// Description attached to both the created version and the deployment.
///
/// The timestamp is captured once when the run starts and handed in here,
/// so every step of a run sees the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDescription {
    prefix: String,
    started_at: DateTime<Utc>,
}

impl ReleaseDescription {
    pub fn new(prefix: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        ReleaseDescription {
            prefix: prefix.into(),
            started_at,
        }
    }

    /// ISO-8601 UTC timestamp with millisecond precision, e.g. `2024-05-01T12:30:00.000Z`
    pub fn timestamp(&self) -> String {
        self.started_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

impl std::fmt::Display for ReleaseDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = self.prefix.trim();
        if prefix.is_empty() {
            write!(f, "{}", self.timestamp())
        } else {
            write!(f, "{} {}", prefix, self.timestamp())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_timestamp_is_iso8601_millis() {
        let description = ReleaseDescription::new(DEFAULT_DESCRIPTION_PREFIX, fixed_instant());
        assert_eq!(description.timestamp(), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn test_description_text() {
        let description = ReleaseDescription::new(DEFAULT_DESCRIPTION_PREFIX, fixed_instant());
        assert_eq!(
            description.to_string(),
            "Auto deploy 2024-05-01T12:30:00.000Z"
        );
    }

    #[test]
    fn test_blank_prefix_leaves_timestamp_only() {
        let description = ReleaseDescription::new("  ", fixed_instant());
        assert_eq!(description.to_string(), "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn test_description_is_stable() {
        let description = ReleaseDescription::new("Release", fixed_instant());
        assert_eq!(description.to_string(), description.clone().to_string());
    }
}
