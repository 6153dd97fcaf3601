//! Status flags: the 32-bit word in `Status.json`, one condition per bit.
//!
//! The `bitflags!` table below is the only place bit positions are defined.
//! Decoding, encoding and display names all derive from it.

use bitflags::bitflags;

bitflags! {
    /// Boolean conditions describing the player and ship.
    ///
    /// Combinations are not validated: "landed" and "supercruise" can both
    /// be set if the game says so.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StatusFlags: u32 {
        /// The ship is docked.
        const DOCKED                       = 1 << 0;
        /// The ship is landed.
        const LANDED                       = 1 << 1;
        /// Landing gear is deployed.
        const LANDING_GEAR_DOWN            = 1 << 2;
        /// Shields are up.
        const SHIELDS_UP                   = 1 << 3;
        /// The ship is in supercruise.
        const SUPERCRUISE                  = 1 << 4;
        /// Flight assist is disabled.
        const FLIGHT_ASSIST_OFF            = 1 << 5;
        /// Hardpoints are deployed.
        const HARDPOINTS_DEPLOYED          = 1 << 6;
        /// The player is in a wing.
        const IN_WING                      = 1 << 7;
        /// Ship lights are on.
        const LIGHTS_ON                    = 1 << 8;
        /// Cargo scoop is deployed.
        const CARGO_SCOOP_DEPLOYED         = 1 << 9;
        /// Silent running is on.
        const SILENT_RUNNING               = 1 << 10;
        /// The ship is scooping fuel.
        const SCOOPING_FUEL                = 1 << 11;
        /// SRV handbrake is on.
        const SRV_HANDBRAKE                = 1 << 12;
        /// SRV turret is deployed.
        const SRV_TURRET                   = 1 << 13;
        /// SRV is positioned under the ship.
        const SRV_UNDER_SHIP               = 1 << 14;
        /// SRV drive assist is on.
        const SRV_DRIVE_ASSIST             = 1 << 15;
        /// Frame shift drive is mass locked.
        const FSD_MASS_LOCKED              = 1 << 16;
        /// Frame shift drive is charging.
        const FSD_CHARGING                 = 1 << 17;
        /// Frame shift drive is cooling down.
        const FSD_COOLDOWN                 = 1 << 18;
        /// Fuel is low.
        const LOW_FUEL                     = 1 << 19;
        /// The ship is overheating.
        const OVERHEATING                  = 1 << 20;
        /// Latitude and longitude are present in the snapshot.
        const HAS_LAT_LONG                 = 1 << 21;
        /// The player is in danger.
        const IS_IN_DANGER                 = 1 << 22;
        /// The ship is being interdicted.
        const BEING_INTERDICTED            = 1 << 23;
        /// The player is in the main ship.
        const IN_MAIN_SHIP                 = 1 << 24;
        /// The player is in a fighter.
        const IN_FIGHTER                   = 1 << 25;
        /// The player is in an SRV.
        const IN_SRV                       = 1 << 26;
        /// HUD is in analysis mode.
        const IN_ANALYSIS_MODE             = 1 << 27;
        /// Night vision is on.
        const NIGHT_VISION                 = 1 << 28;
        /// Altitude is measured from the body's average radius rather than
        /// by raycast to the surface below.
        const ALTITUDE_FROM_AVERAGE_RADIUS = 1 << 29;
        /// The ship is mid frame shift jump.
        const FSD_JUMP                     = 1 << 30;
        /// SRV high beams are on.
        const SRV_HIGH_BEAM                = 1 << 31;
    }
}

impl StatusFlags {
    /// Decode a raw status word. Bits without a name are dropped.
    pub fn decode(word: u32) -> Self {
        Self::from_bits_truncate(word)
    }

    /// Encode back to a raw status word.
    pub fn encode(self) -> u32 {
        self.bits()
    }

    /// Names of the set flags, in bit order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        self.iter_names().map(|(name, _)| name)
    }

    /// Every named flag with its state, in bit order.
    pub fn states(self) -> impl Iterator<Item = (&'static str, bool)> {
        Self::all()
            .iter_names()
            .map(move |(name, flag)| (name, self.contains(flag)))
    }
}
