//! Platform abstraction layer
//!
//! The game core never reaches for ambient host services. Everything it
//! needs from the platform arrives as an injected value:
//! - Time comes from a [`clock::Clock`] handed to the engine at construction
//! - Randomness comes from a `rand::Rng` handed over the same way
//! - Sensor, orientation and timer callbacks stay in the host app, which
//!   forwards them to the engine as plain method calls

pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};
