//! Read-only access to what Elite Dangerous writes to its log directory.
//!
//! - [`logdir`]: the status snapshot and the rotated journal files
//! - [`model`]: the data written there
//! - [`watch`]: change notifications for the player's location
//! - [`bridge`]: telemetry forwarding to a serial controller
//! - [`config`]: `~/.flightlog/config.toml`

pub mod bridge;
pub mod config;
pub mod logdir;
pub mod model;
pub mod watch;
