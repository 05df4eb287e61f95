//! Device capability gate
//!
//! The game needs a hinge to measure and both screens to draw on, so it is
//! only playable on a hinge device spanned across two displays in portrait.
//! Classification is a pure function of the facts the host reports and is
//! re-run on every orientation change.

use serde::{Deserialize, Serialize};

/// Snapshot of the device and window facts the host platform reports.
///
/// The host translates whatever its windowing/sensor APIs expose into these
/// three booleans; the core never queries hardware itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceFacts {
    /// Device has a physical hinge (and therefore a hinge angle sensor).
    pub has_hinge: bool,
    /// App window spans both display panes.
    pub spanned: bool,
    /// Window is in portrait orientation.
    pub portrait: bool,
}

impl DeviceFacts {
    /// True when the facts permit gameplay at all.
    pub fn favorable(&self) -> bool {
        classify(*self) == GamePhase::Playing
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No hinge hardware; the game can never start here.
    UnsupportedDevice,
    /// Hinge present, but the window is not spanned across both panes in
    /// portrait. Recoverable by rotating or re-spanning the app.
    UnsupportedOrientation,
    /// Round in progress: randomizing until committed, listening after.
    Playing,
    /// The hinge angle matched the hidden target.
    Succeeded,
}

/// Map device facts to the most favorable phase they permit.
///
/// Checks run in severity order, so a device with no hinge reports
/// [`GamePhase::UnsupportedDevice`] no matter how the window is arranged.
/// Never yields [`GamePhase::Succeeded`] - success is the engine's call,
/// not the classifier's.
pub fn classify(facts: DeviceFacts) -> GamePhase {
    if !facts.has_hinge {
        GamePhase::UnsupportedDevice
    } else if !facts.spanned || !facts.portrait {
        GamePhase::UnsupportedOrientation
    } else {
        GamePhase::Playing
    }
}
