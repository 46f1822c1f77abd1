//! Conversion Warning System
//!
//! Soft omissions never abort a conversion; they are collected here and
//! reported once the export is built.

/// Warning severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    /// Informational - a field the destination has no slot for was skipped
    Info,
    /// Warning - part of the structure was dropped or moved
    Warning,
}

impl std::fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A conversion warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionWarning {
    /// Path to the item (e.g., "collection/folder/request")
    pub path: String,
    /// Human-readable description of the issue
    pub message: String,
    /// Severity level
    pub severity: WarningSeverity,
}

impl ConversionWarning {
    /// Create a new warning
    pub fn new(
        path: impl Into<String>,
        message: impl Into<String>,
        severity: WarningSeverity,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            severity,
        }
    }

    /// Create an info-level warning
    pub fn info(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, message, WarningSeverity::Info)
    }

    /// Create a warning-level warning
    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(path, message, WarningSeverity::Warning)
    }

    /// Emits the warning through `tracing` at a matching level.
    pub fn log(&self) {
        match self.severity {
            WarningSeverity::Info => tracing::info!(path = %self.path, "{}", self.message),
            WarningSeverity::Warning => tracing::warn!(path = %self.path, "{}", self.message),
        }
    }
}

impl std::fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.path, self.message)
    }
}

/// Aggregate statistics from warnings
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WarningStats {
    /// Count of informational warnings
    pub info_count: usize,
    /// Count of warning-level warnings
    pub warning_count: usize,
}

impl WarningStats {
    /// Calculate stats from a list of warnings
    #[must_use]
    pub fn from_warnings(warnings: &[ConversionWarning]) -> Self {
        let mut stats = Self::default();
        for w in warnings {
            match w.severity {
                WarningSeverity::Info => stats.info_count += 1,
                WarningSeverity::Warning => stats.warning_count += 1,
            }
        }
        stats
    }

    /// Total count of all warnings
    #[must_use]
    pub const fn total(&self) -> usize {
        self.info_count + self.warning_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_creation() {
        let warning = ConversionWarning::warning("api/users", "Something was dropped");
        assert_eq!(warning.path, "api/users");
        assert_eq!(warning.severity, WarningSeverity::Warning);
        assert_eq!(warning.to_string(), "[warning] api/users: Something was dropped");
    }

    #[test]
    fn test_warning_stats() {
        let warnings = vec![
            ConversionWarning::info("a", "info"),
            ConversionWarning::warning("b", "warn"),
            ConversionWarning::warning("c", "warn"),
        ];

        let stats = WarningStats::from_warnings(&warnings);
        assert_eq!(stats.info_count, 1);
        assert_eq!(stats.warning_count, 2);
        assert_eq!(stats.total(), 3);
    }
}
