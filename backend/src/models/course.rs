use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::mark::{Mark, Symbol};

/// Side on which a boat must leave a mark.
///
/// Deserializes from `"P"`/`"S"` (or `port`/`starboard`); `null` and a blank
/// string fall back to starboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<String>", into = "String")]
pub enum Rounding {
    Port,
    #[default]
    Starboard,
}

impl Rounding {
    pub fn code(&self) -> &'static str {
        match self {
            Rounding::Port => "P",
            Rounding::Starboard => "S",
        }
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "p" | "port" => Ok(Rounding::Port),
            "s" | "stbd" | "starboard" => Ok(Rounding::Starboard),
            other => Err(format!("Unknown rounding '{}', expected P or S", other)),
        }
    }
}

impl TryFrom<Option<String>> for Rounding {
    type Error = String;

    fn try_from(value: Option<String>) -> Result<Self, Self::Error> {
        match value.as_deref().map(str::trim) {
            None | Some("") => Ok(Rounding::default()),
            Some(code) => code.parse(),
        }
    }
}

impl From<Rounding> for String {
    fn from(rounding: Rounding) -> Self {
        rounding.code().to_string()
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One entry of a requested course: which mark, and which side to leave it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseMarkRef {
    #[serde(rename = "name")]
    pub mark_id: String,
    #[serde(default)]
    pub rounding: Rounding,
}

impl CourseMarkRef {
    pub fn new(mark_id: impl Into<String>, rounding: Rounding) -> Self {
        Self {
            mark_id: mark_id.into(),
            rounding,
        }
    }

    /// Reference with the default (starboard) rounding.
    pub fn starboard(mark_id: impl Into<String>) -> Self {
        Self::new(mark_id, Rounding::Starboard)
    }
}

/// Start/finish annotation on a leg endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkTag {
    Start,
    Finish,
    #[serde(rename = "Start/Finish")]
    StartFinish,
}

impl MarkTag {
    /// Merge two tags seen on the same mark.
    pub fn combine(self, other: MarkTag) -> MarkTag {
        if self == other {
            self
        } else {
            MarkTag::StartFinish
        }
    }
}

impl fmt::Display for MarkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MarkTag::Start => "Start",
            MarkTag::Finish => "Finish",
            MarkTag::StartFinish => "Start/Finish",
        };
        f.write_str(label)
    }
}

/// One end of a leg: the resolved mark plus course metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegEndpoint {
    pub name: String,
    pub description: String,
    pub symbol: Symbol,
    pub lat: f64,
    pub lon: f64,
    pub rounding: Rounding,
    pub tag: Option<MarkTag>,
}

impl LegEndpoint {
    pub fn new(mark: &Mark, rounding: Rounding, tag: Option<MarkTag>) -> Self {
        Self {
            name: mark.id.clone(),
            description: mark.description.clone(),
            symbol: mark.symbol.clone(),
            lat: mark.lat,
            lon: mark.lon,
            rounding,
            tag,
        }
    }
}

/// Directed segment between two consecutive course marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub leg_number: usize,
    pub from: LegEndpoint,
    pub to: LegEndpoint,
    /// Initial bearing in whole degrees
    pub bearing: f64,
    /// Nautical miles
    pub distance: f64,
}
