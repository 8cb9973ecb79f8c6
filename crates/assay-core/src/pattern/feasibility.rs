use std::fmt;

use serde::{Deserialize, Serialize};

/// Automation feasibility levels, ordered from most to least automatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feasibility {
    Automatable,
    PartiallyAutomatable,
    NotAutomatable,
}

impl Feasibility {
    /// Parse a feasibility label, ignoring case and `_`/`-`/space separators.
    /// Also accepts the short `Yes` / `Partial` / `No` labels.
    pub fn parse(label: &str) -> Option<Self> {
        let key: String = label
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "automatable" | "yes" | "fullyautomatable" => Some(Self::Automatable),
            "partiallyautomatable" | "partial" | "partially" => Some(Self::PartiallyAutomatable),
            "notautomatable" | "no" => Some(Self::NotAutomatable),
            _ => None,
        }
    }

    /// Position on the automatable -> not-automatable scale.
    pub fn rank(self) -> u8 {
        match self {
            Self::Automatable => 0,
            Self::PartiallyAutomatable => 1,
            Self::NotAutomatable => 2,
        }
    }

    /// Adjacent levels are exactly one step apart.
    pub fn is_adjacent(self, other: Self) -> bool {
        self.rank().abs_diff(other.rank()) == 1
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Automatable => "Automatable",
            Self::PartiallyAutomatable => "Partially Automatable",
            Self::NotAutomatable => "Not Automatable",
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_labels_and_aliases() {
        assert_eq!(Feasibility::parse("Automatable"), Some(Feasibility::Automatable));
        assert_eq!(
            Feasibility::parse("Partially Automatable"),
            Some(Feasibility::PartiallyAutomatable)
        );
        assert_eq!(
            Feasibility::parse("not_automatable"),
            Some(Feasibility::NotAutomatable)
        );
        assert_eq!(Feasibility::parse("Partial"), Some(Feasibility::PartiallyAutomatable));
        assert_eq!(Feasibility::parse("YES"), Some(Feasibility::Automatable));
        assert_eq!(Feasibility::parse("maybe"), None);
    }

    #[test]
    fn adjacency_is_one_step() {
        use Feasibility::*;
        assert!(Automatable.is_adjacent(PartiallyAutomatable));
        assert!(NotAutomatable.is_adjacent(PartiallyAutomatable));
        assert!(!Automatable.is_adjacent(NotAutomatable));
        assert!(!Automatable.is_adjacent(Automatable));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for level in [
            Feasibility::Automatable,
            Feasibility::PartiallyAutomatable,
            Feasibility::NotAutomatable,
        ] {
            assert_eq!(Feasibility::parse(&level.to_string()), Some(level));
        }
    }
}
