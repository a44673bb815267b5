use std::fmt;

use serde::{Deserialize, Serialize};

/// The two alternative rule-sets a filer can be assessed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    Old,
    #[default]
    New,
}

impl Regime {
    pub const ALL: [Regime; 2] = [Regime::New, Regime::Old];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Old => "Old Regime",
            Self::New => "New Regime",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_codes_case_insensitively() {
        assert_eq!(Regime::parse("old"), Some(Regime::Old));
        assert_eq!(Regime::parse(" NEW "), Some(Regime::New));
        assert_eq!(Regime::parse("legacy"), None);
    }

    #[test]
    fn default_regime_is_new() {
        assert_eq!(Regime::default(), Regime::New);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        let json = serde_json::to_string(&Regime::Old).unwrap();

        assert_eq!(json, "\"old\"");
    }
}
