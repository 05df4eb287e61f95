//! Hinge It - fold a dual-screen device to a hidden hinge angle
//!
//! Core modules:
//! - `game`: Deterministic game core (capability gate, round engine, view model)
//! - `platform`: Host abstraction (injectable clocks)
//!
//! The crate is the decision-making core only. Sensor drivers, orientation
//! listeners, the randomizer timer and the rendering layer live in the host
//! app and talk to [`game::HingeGame`] through plain method calls, pulling a
//! fresh [`game::ViewModel`] after every event.

pub mod game;
pub mod platform;

pub use game::{DeviceFacts, GamePhase, HingeGame, ViewModel, classify};
pub use platform::clock::{Clock, ManualClock, SystemClock};

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Inclusive lower bound of the target angle range, in degrees
    pub const ANGLE_MIN: i32 = 0;
    /// Exclusive upper bound of the target angle range, in degrees
    pub const ANGLE_MAX: i32 = 360;
    /// Success window half-width around the hidden target, in degrees
    pub const ANGLE_THRESHOLD: i32 = 5;
    /// Sensor sentinel: the hinge driver reports 0 until the first real reading
    pub const ANGLE_UNKNOWN: i32 = 0;

    /// Proximity cutoff between the warm "close" ramp and the hot "far" ramp
    pub const PROXIMITY_CUTOFF: i32 = 45;

    /// Re-arm period of the cooperative target randomizer
    pub const RANDOMIZER_PERIOD: Duration = Duration::from_millis(500);
}
