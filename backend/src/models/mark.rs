use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geodesy::GeoPoint;

/// Display colour code of a mark as recorded in the waypoint file.
///
/// Single colours get their own variant; striped and other codes
/// (`YBY`, `BYB`, `RWR`, ...) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Symbol {
    Red,
    Green,
    Yellow,
    Black,
    Other(String),
    #[default]
    Unspecified,
}

impl Symbol {
    pub fn code(&self) -> &str {
        match self {
            Symbol::Red => "R",
            Symbol::Green => "G",
            Symbol::Yellow => "Y",
            Symbol::Black => "B",
            Symbol::Other(code) => code,
            Symbol::Unspecified => "",
        }
    }
}

impl From<&str> for Symbol {
    fn from(code: &str) -> Self {
        match code.trim() {
            "" => Symbol::Unspecified,
            "R" => Symbol::Red,
            "G" => Symbol::Green,
            "Y" => Symbol::Yellow,
            "B" => Symbol::Black,
            other => Symbol::Other(other.to_string()),
        }
    }
}

impl From<String> for Symbol {
    fn from(code: String) -> Self {
        Symbol::from(code.as_str())
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.code().to_string()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A named navigation mark (buoy).
///
/// `id` is unique within a waypoint file and compared case-sensitively.
/// Over JSON the id travels as `name`, which is what course requests refer to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "name")]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub symbol: Symbol,
    pub lat: f64,
    pub lon: f64,
}

impl Mark {
    pub fn new(id: impl Into<String>, description: impl Into<String>, symbol: Symbol, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            symbol,
            lat,
            lon,
        }
    }

    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }

    /// Zone facet of this mark: the first character of its id.
    pub fn zone(&self) -> Option<char> {
        self.id.chars().next()
    }
}
