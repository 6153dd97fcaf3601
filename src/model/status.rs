//! Status snapshot: the decoded contents of `Status.json`.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::StatusFlags;

/// The current state of the player and ship, as last written by the game.
///
/// Rebuilt from scratch on every read. The `timestamp` doubles as a
/// revision marker: two snapshots with the same timestamp describe the
/// same write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub timestamp: Timestamp,

    pub event: String,

    #[serde(rename = "Flags", default, with = "flag_word")]
    pub flags: StatusFlags,

    /// Power distributor pips for systems, engines and weapons, in half-pips.
    #[serde(rename = "Pips", default)]
    pub pips: [i32; 3],

    #[serde(rename = "FireGroup", default)]
    pub fire_group: i32,

    #[serde(rename = "GuiFocus", default)]
    pub gui_focus: GuiFocus,

    #[serde(rename = "Fuel", default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<Fuel>,

    #[serde(rename = "Cargo", default, skip_serializing_if = "Option::is_none")]
    pub cargo: Option<f64>,

    // Only present while `HAS_LAT_LONG` is set.
    #[serde(rename = "Latitude", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(rename = "Longitude", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(rename = "Heading", default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<i32>,

    #[serde(rename = "Altitude", default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<i32>,
}

impl Status {
    /// Decode a snapshot from the raw bytes of `Status.json`.
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// The raw status word, as the game wrote it (minus unnamed bits).
    pub fn raw_flags(&self) -> u32 {
        self.flags.encode()
    }
}

/// Fuel readouts in tons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    #[serde(rename = "FuelMain")]
    pub main: f64,

    #[serde(rename = "FuelReservoir")]
    pub reservoir: f64,
}

/// Which panel or screen currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum GuiFocus {
    #[default]
    None,
    InternalPanel,
    ExternalPanel,
    CommsPanel,
    RolePanel,
    StationServices,
    GalaxyMap,
    SystemMap,
    Orrery,
    FssMode,
    SaaMode,
    Codex,
    /// A focus value this crate doesn't know yet.
    Unknown(u32),
}

impl GuiFocus {
    /// Right-hand panel.
    pub const RIGHT: Self = Self::InternalPanel;
    /// Left-hand panel.
    pub const LEFT: Self = Self::ExternalPanel;
    /// Top panel.
    pub const TOP: Self = Self::CommsPanel;
    /// Bottom panel.
    pub const BOTTOM: Self = Self::RolePanel;
}

impl From<u32> for GuiFocus {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::None,
            1 => Self::InternalPanel,
            2 => Self::ExternalPanel,
            3 => Self::CommsPanel,
            4 => Self::RolePanel,
            5 => Self::StationServices,
            6 => Self::GalaxyMap,
            7 => Self::SystemMap,
            8 => Self::Orrery,
            9 => Self::FssMode,
            10 => Self::SaaMode,
            11 => Self::Codex,
            n => Self::Unknown(n),
        }
    }
}

impl From<GuiFocus> for u32 {
    fn from(focus: GuiFocus) -> Self {
        match focus {
            GuiFocus::None => 0,
            GuiFocus::InternalPanel => 1,
            GuiFocus::ExternalPanel => 2,
            GuiFocus::CommsPanel => 3,
            GuiFocus::RolePanel => 4,
            GuiFocus::StationServices => 5,
            GuiFocus::GalaxyMap => 6,
            GuiFocus::SystemMap => 7,
            GuiFocus::Orrery => 8,
            GuiFocus::FssMode => 9,
            GuiFocus::SaaMode => 10,
            GuiFocus::Codex => 11,
            GuiFocus::Unknown(n) => n,
        }
    }
}

/// Serde adapter: flags travel as the integer word, not as names.
mod flag_word {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::StatusFlags;

    pub fn serialize<S: Serializer>(flags: &StatusFlags, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(flags.encode())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<StatusFlags, D::Error> {
        u32::deserialize(deserializer).map(StatusFlags::decode)
    }
}
