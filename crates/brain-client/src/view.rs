//! The dashboard's active-view selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which panel the dashboard is showing.
///
/// Switching is unconditional and never touches the network; every view reads
/// whatever the store currently holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Dashboard,
    Properties,
    Maintenance,
    Documents,
    Upload,
}

impl View {
    /// All views in tab order
    pub const ALL: [View; 5] = [
        View::Dashboard,
        View::Properties,
        View::Maintenance,
        View::Documents,
        View::Upload,
    ];

    pub fn name(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Properties => "properties",
            View::Maintenance => "maintenance",
            View::Documents => "documents",
            View::Upload => "upload",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| format!("Unknown view: {}", s.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Maintenance".parse::<View>(), Ok(View::Maintenance));
        assert_eq!(" upload ".parse::<View>(), Ok(View::Upload));
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for view in View::ALL {
            assert_eq!(view.to_string().parse::<View>(), Ok(view));
        }
    }
}
