//! Core data model for flightlog.
//!
//! These types mirror what the game writes to disk:
//! the status snapshot, its flag word, and journal entries.

mod flags;
mod journal;
mod loadout;
mod location;
mod statistics;
mod status;

pub use flags::StatusFlags;
pub use journal::{DockedEvent, Event, JournalEntry, JumpEvent, LocationEvent, UndockedEvent};
pub use loadout::{Engineering, FuelCapacity, Loadout, Modifier, Module};
pub use location::Location;
pub use statistics::{
    BankAccount, Combat, Crafting, Crime, Exploration, MaterialTrader, Mining, Multicrew,
    Passengers, SearchAndRescue, Smuggling, Statistics, Trading,
};
pub use status::{Fuel, GuiFocus, Status};
