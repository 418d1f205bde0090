//! Render Configuration

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp format of the header comment
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Stylesheet render options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Emit only styles that were looked up
    pub dynamic: bool,

    /// Spaces per indentation level
    pub indent_width: usize,

    /// Write the "Made with violetear" header
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dynamic: false,
            indent_width: 4,
            header: true,
        }
    }
}

impl RenderOptions {
    pub fn dynamic(dynamic: bool) -> Self {
        Self {
            dynamic,
            ..Self::default()
        }
    }
}

/// Source of the generation timestamp
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(!options.dynamic);
        assert_eq!(options.indent_width, 4);
        assert!(options.header);
    }

    #[test]
    fn test_partial_json() {
        let options: RenderOptions = serde_json::from_str(r#"{ "dynamic": true }"#).unwrap();
        assert_eq!(options, RenderOptions::dynamic(true));
    }

    #[test]
    fn test_fixed_clock() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 42)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now().format(TIMESTAMP_FORMAT).to_string(), "2024-03-01 09:30:00.000042");
    }
}
