use core::fmt;

use serde::{Deserialize, Serialize};

/// Card suite, keyed by its single-letter code at the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suite {
    #[serde(rename = "s")]
    Spade,
    #[serde(rename = "h")]
    Heart,
    #[serde(rename = "c")]
    Club,
    #[serde(rename = "d")]
    Diamond,
}

impl Suite {
    pub const ALL: [Suite; 4] = [Suite::Spade, Suite::Heart, Suite::Club, Suite::Diamond];

    pub const fn code(self) -> char {
        match self {
            Suite::Spade => 's',
            Suite::Heart => 'h',
            Suite::Club => 'c',
            Suite::Diamond => 'd',
        }
    }

    /// Display name used when a decision is rendered for people.
    pub const fn name(self) -> &'static str {
        match self {
            Suite::Spade => "Spade",
            Suite::Heart => "Heart",
            Suite::Club => "Club",
            Suite::Diamond => "Diamond",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Suite;

    #[test]
    fn codes_map_to_display_names() {
        let table: Vec<_> = Suite::ALL
            .into_iter()
            .map(|suite| (suite.code(), suite.name()))
            .collect();
        assert_eq!(
            table,
            vec![('s', "Spade"), ('h', "Heart"), ('c', "Club"), ('d', "Diamond")]
        );
    }

    #[test]
    fn serializes_by_code() {
        assert_eq!(serde_json::to_string(&Suite::Spade).unwrap(), "\"s\"");
        let parsed: Suite = serde_json::from_str("\"c\"").unwrap();
        assert_eq!(parsed, Suite::Club);
    }
}
