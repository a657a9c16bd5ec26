use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Lifecycle phase of a scheduled appointment.
///
/// Past days carry only `Completed` records; the current day mixes all three
/// depending on how the slot hour compares to the clock; future days are
/// always `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Pending,
    InProgress,
    Completed,
}

impl AppointmentStatus {
    /// Returns the status exactly as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pending" => Ok(AppointmentStatus::Pending),
            "in-progress" => Ok(AppointmentStatus::InProgress),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(ModelError::InvalidStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for status in [
            AppointmentStatus::Pending,
            AppointmentStatus::InProgress,
            AppointmentStatus::Completed,
        ] {
            let parsed: AppointmentStatus = status.as_str().parse().expect("parse status");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&AppointmentStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in-progress\"");
        let back: AppointmentStatus = serde_json::from_str("\"completed\"").expect("deserialize");
        assert_eq!(back, AppointmentStatus::Completed);
    }

    #[test]
    fn unknown_status_rejected() {
        assert!("cancelled".parse::<AppointmentStatus>().is_err());
    }
}
