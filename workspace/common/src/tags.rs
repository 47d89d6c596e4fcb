use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status classification attached to metrics and aggregated in reports.
///
/// The set is closed: counting and styling code matches on all four
/// variants, and `ALL` fixes their display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TrafficTag {
    Red,
    Green,
    White,
    Black,
}

impl TrafficTag {
    pub const ALL: [TrafficTag; 4] = [
        TrafficTag::Red,
        TrafficTag::Green,
        TrafficTag::White,
        TrafficTag::Black,
    ];

    /// Wire name, also used as the badge label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficTag::Red => "RED",
            TrafficTag::Green => "GREEN",
            TrafficTag::White => "WHITE",
            TrafficTag::Black => "BLACK",
        }
    }
}

impl fmt::Display for TrafficTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTagError(pub String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown traffic tag '{}', expected one of RED, GREEN, WHITE, BLACK", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl FromStr for TrafficTag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RED" => Ok(TrafficTag::Red),
            "GREEN" => Ok(TrafficTag::Green),
            "WHITE" => Ok(TrafficTag::White),
            "BLACK" => Ok(TrafficTag::Black),
            _ => Err(ParseTagError(s.to_string())),
        }
    }
}

/// Directional classification of a metric's recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Rising,
    Falling,
    Stable,
    #[default]
    Unknown,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Rising => "Rising",
            Trend::Falling => "Falling",
            Trend::Stable => "Stable",
            Trend::Unknown => "Unknown",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Rising => "↑",
            Trend::Falling => "↓",
            Trend::Stable => "→",
            Trend::Unknown => "?",
        }
    }
}

/// Count per traffic tag. Every tag is always present on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TagCounts {
    #[serde(rename = "RED")]
    pub red: u32,
    #[serde(rename = "GREEN")]
    pub green: u32,
    #[serde(rename = "WHITE")]
    pub white: u32,
    #[serde(rename = "BLACK")]
    pub black: u32,
}

impl TagCounts {
    /// Tallies tags in a single pass.
    pub fn tally<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = TrafficTag>,
    {
        let mut counts = Self::default();
        for tag in tags {
            counts.increment(tag);
        }
        counts
    }

    pub fn get(&self, tag: TrafficTag) -> u32 {
        match tag {
            TrafficTag::Red => self.red,
            TrafficTag::Green => self.green,
            TrafficTag::White => self.white,
            TrafficTag::Black => self.black,
        }
    }

    pub fn increment(&mut self, tag: TrafficTag) {
        let slot = match tag {
            TrafficTag::Red => &mut self.red,
            TrafficTag::Green => &mut self.green,
            TrafficTag::White => &mut self.white,
            TrafficTag::Black => &mut self.black,
        };
        *slot += 1;
    }

    pub fn total(&self) -> u32 {
        self.red + self.green + self.white + self.black
    }

    /// Counts in canonical tag order.
    pub fn iter(&self) -> impl Iterator<Item = (TrafficTag, u32)> + '_ {
        TrafficTag::ALL.into_iter().map(move |tag| (tag, self.get(tag)))
    }

    /// Badge labels such as `RED: 2`, one per tag.
    pub fn badges(&self) -> Vec<String> {
        self.iter()
            .map(|(tag, count)| format!("{}: {}", tag, count))
            .collect()
    }
}
