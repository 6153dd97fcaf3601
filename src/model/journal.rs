//! Journal entries: one JSON object per line of a `Journal.*.log` file.
//!
//! Every line shares a small header (`timestamp`, `event`). The `event`
//! field picks the payload shape. Kinds this crate doesn't model still
//! parse, as [`Event::Other`], so new game events never break a scan.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Loadout, Statistics};

/// A single journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: Timestamp,

    #[serde(flatten)]
    pub event: Event,
}

impl JournalEntry {
    /// Parse one journal line.
    pub fn parse(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }
}

/// Event payload, discriminated by the `event` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    /// Arrived in a new system by hyperspace jump.
    #[serde(rename = "FSDJump")]
    FsdJump(JumpEvent),

    /// Position at game load or respawn.
    Location(LocationEvent),

    /// Docked at a station or carrier.
    Docked(DockedEvent),

    /// Left a station.
    Undocked(UndockedEvent),

    /// Current ship and modules.
    ///
    /// Boxed to keep variant sizes balanced.
    Loadout(Box<Loadout>),

    /// Lifetime statistics, written at game load.
    ///
    /// Boxed to keep variant sizes balanced.
    Statistics(Box<Statistics>),

    /// Any kind not modelled above.
    #[serde(other)]
    Other,
}

impl Event {
    /// The journal's name for this event kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FsdJump(_) => "FSDJump",
            Self::Location(_) => "Location",
            Self::Docked(_) => "Docked",
            Self::Undocked(_) => "Undocked",
            Self::Loadout(_) => "Loadout",
            Self::Statistics(_) => "Statistics",
            Self::Other => "Other",
        }
    }

    /// The star system this event places the player in, if any.
    pub fn star_system(&self) -> Option<&str> {
        match self {
            Self::FsdJump(e) => Some(&e.star_system),
            Self::Location(e) => Some(&e.star_system),
            _ => None,
        }
    }

    /// The station this event leaves the player at.
    ///
    /// `Some("")` for an undock: the player is at no station.
    /// `None` for events that say nothing about docking.
    pub fn station(&self) -> Option<&str> {
        match self {
            Self::Docked(e) => Some(&e.station_name),
            Self::Undocked(_) => Some(""),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JumpEvent {
    #[serde(rename = "StarSystem")]
    pub star_system: String,

    #[serde(rename = "SystemAddress", default, skip_serializing_if = "Option::is_none")]
    pub system_address: Option<u64>,

    #[serde(rename = "StarPos", default, skip_serializing_if = "Option::is_none")]
    pub star_pos: Option<[f64; 3]>,

    #[serde(rename = "JumpDist", default, skip_serializing_if = "Option::is_none")]
    pub jump_dist: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEvent {
    #[serde(rename = "StarSystem")]
    pub star_system: String,

    #[serde(rename = "SystemAddress", default, skip_serializing_if = "Option::is_none")]
    pub system_address: Option<u64>,

    #[serde(rename = "Docked", default)]
    pub docked: bool,

    #[serde(rename = "StationName", default, skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DockedEvent {
    #[serde(rename = "StationName")]
    pub station_name: String,

    #[serde(rename = "StationType", default, skip_serializing_if = "Option::is_none")]
    pub station_type: Option<String>,

    #[serde(rename = "StarSystem", default, skip_serializing_if = "Option::is_none")]
    pub star_system: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UndockedEvent {
    #[serde(rename = "StationName", default, skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fsd_jump() {
        let entry = JournalEntry::parse(
            r#"{ "timestamp":"2018-03-11T19:56:15Z", "event":"FSDJump", "StarSystem":"Shinrarta Dezhra", "SystemAddress":3932277478106, "StarPos":[55.719,17.594,27.156], "JumpDist":8.342, "FuelUsed":0.6 }"#,
        )
        .unwrap();

        assert_eq!(entry.event.kind(), "FSDJump");
        assert_eq!(entry.event.star_system(), Some("Shinrarta Dezhra"));
        assert_eq!(entry.event.station(), None);
        let Event::FsdJump(jump) = &entry.event else {
            panic!("expected FSDJump");
        };
        assert_eq!(jump.system_address, Some(3_932_277_478_106));
    }

    #[test]
    fn docked_and_undocked_report_station() {
        let docked = JournalEntry::parse(
            r#"{"timestamp":"2018-03-11T20:01:02Z","event":"Docked","StationName":"Abraham Lincoln","StationType":"Orbis","StarSystem":"Sol"}"#,
        )
        .unwrap();
        let undocked = JournalEntry::parse(
            r#"{"timestamp":"2018-03-11T20:11:02Z","event":"Undocked","StationName":"Abraham Lincoln"}"#,
        )
        .unwrap();

        assert_eq!(docked.event.station(), Some("Abraham Lincoln"));
        assert_eq!(undocked.event.station(), Some(""));
    }

    #[test]
    fn unknown_kinds_parse_as_other() {
        let entry = JournalEntry::parse(
            r#"{"timestamp":"2018-03-11T19:50:00Z","event":"Music","MusicTrack":"NoTrack"}"#,
        )
        .unwrap();

        assert_eq!(entry.event, Event::Other);
        assert_eq!(entry.event.star_system(), None);
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!(JournalEntry::parse(r#"{"event":"FSDJump","StarSystem":"Sol"}"#).is_err());
        assert!(JournalEntry::parse(r#"{"timestamp":"2018-03-11T19:50:00Z"}"#).is_err());
        assert!(JournalEntry::parse("not json").is_err());
    }

    #[test]
    fn jump_without_star_system_is_an_error() {
        let jump = r#"{"timestamp":"2018-03-11T20:00:00Z","event":"FSDJump"}"#;
        let location = r#"{"timestamp":"2018-03-11T20:00:00Z","event":"Location","Docked":false}"#;

        assert!(JournalEntry::parse(jump).is_err());
        assert!(JournalEntry::parse(location).is_err());
    }
}
