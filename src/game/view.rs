//! View model derivation
//!
//! The presentation layer renders these snapshots verbatim: every label,
//! gradient and visibility flag is decided here so the UI stays logic-free.
//! Derivation is a pure projection of phase plus round state - same inputs,
//! same snapshot, no clock or RNG reads.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::capability::GamePhase;
use super::round::RoundState;
use crate::consts::PROXIMITY_CUTOFF;

/// Two-stop color ramp behind the game surface. Stops are RGBA in 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub start: [f32; 4],
    pub end: [f32; 4],
}

/// Background gradients keyed by game situation
pub mod gradients {
    use super::Gradient;

    /// Muted slate behind the unsupported-device/orientation panels.
    pub const UNSUPPORTED: Gradient = Gradient {
        start: [0.55, 0.57, 0.62, 1.0],
        end: [0.27, 0.29, 0.35, 1.0],
    };
    /// Cool blue while the target is still being re-rolled.
    pub const IDLE: Gradient = Gradient {
        start: [0.25, 0.45, 0.85, 1.0],
        end: [0.10, 0.16, 0.45, 1.0],
    };
    /// Warm amber once the fold is within the proximity cutoff.
    pub const CLOSE: Gradient = Gradient {
        start: [1.0, 0.72, 0.30, 1.0],
        end: [0.95, 0.45, 0.10, 1.0],
    };
    /// Hot red while the fold is far from the target.
    pub const FAR: Gradient = Gradient {
        start: [0.95, 0.26, 0.21, 1.0],
        end: [0.55, 0.04, 0.10, 1.0],
    };
    /// Green for the win screen.
    pub const SUCCESS: Gradient = Gradient {
        start: [0.30, 0.85, 0.39, 1.0],
        end: [0.05, 0.43, 0.18, 1.0],
    };
}

/// Which page stack the UI shows. Exactly one flag is set per snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visibility {
    pub game: bool,
    pub win: bool,
    pub error: bool,
}

/// Immutable presentation snapshot of one engine state.
///
/// Labels come pre-formatted and unset ones are empty strings, so the UI
/// binds fields directly without any conditional formatting of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub phase: GamePhase,
    /// Headline for the error panel; empty outside the unsupported phases.
    pub error_title: String,
    /// Explanatory copy for the error panel; empty outside the unsupported
    /// phases.
    pub error_message: String,
    /// Current hidden target as a degree label, e.g. `"180°"`. Present in
    /// every snapshot; the UI decides when to reveal it.
    pub target_label: String,
    /// The matched target as a degree label; empty until the round is won.
    pub result_angle_label: String,
    /// Commit-to-success time, e.g. `"3.5 s"`; empty until the round is won.
    pub duration_label: String,
    pub gradient: Gradient,
    pub visibility: Visibility,
    /// Ready-to-post summary of a won round; empty until then.
    pub share_text: String,
}

/// Project phase plus round state into a presentation snapshot.
pub(crate) fn render(phase: GamePhase, round: &RoundState) -> ViewModel {
    let (error_title, error_message) = error_copy(phase);
    let won = phase == GamePhase::Succeeded;
    let duration = round.duration();

    ViewModel {
        phase,
        error_title: error_title.to_owned(),
        error_message: error_message.to_owned(),
        target_label: degrees(round.target_angle),
        result_angle_label: if won {
            degrees(round.target_angle)
        } else {
            String::new()
        },
        duration_label: match (won, duration) {
            (true, Some(elapsed)) => seconds(elapsed),
            _ => String::new(),
        },
        gradient: gradient_for(phase, round),
        visibility: Visibility {
            game: phase == GamePhase::Playing,
            win: won,
            error: matches!(
                phase,
                GamePhase::UnsupportedDevice | GamePhase::UnsupportedOrientation
            ),
        },
        share_text: match (won, duration) {
            (true, Some(elapsed)) => share_text(round.target_angle, elapsed),
            _ => String::new(),
        },
    }
}

/// Pick the ramp for the phase and, once committed, for angle proximity.
fn gradient_for(phase: GamePhase, round: &RoundState) -> Gradient {
    match phase {
        GamePhase::UnsupportedDevice | GamePhase::UnsupportedOrientation => {
            gradients::UNSUPPORTED
        }
        GamePhase::Succeeded => gradients::SUCCESS,
        GamePhase::Playing if !round.committed => gradients::IDLE,
        GamePhase::Playing => {
            // Strict comparison: exactly PROXIMITY_CUTOFF away is still far.
            if (round.target_angle - round.current_angle).abs() < PROXIMITY_CUTOFF {
                gradients::CLOSE
            } else {
                gradients::FAR
            }
        }
    }
}

/// Static copy for the error panel. Empty outside the unsupported phases.
fn error_copy(phase: GamePhase) -> (&'static str, &'static str) {
    match phase {
        GamePhase::UnsupportedDevice => (
            "Unsupported device",
            "HingeIt! is only supported on a Microsoft Surface Duo.",
        ),
        GamePhase::UnsupportedOrientation => (
            "Unsupported orientation",
            "Please use portrait mode and span the app across both displays.",
        ),
        GamePhase::Playing | GamePhase::Succeeded => ("", ""),
    }
}

/// Degree label, e.g. `180` renders as `"180°"`.
fn degrees(angle: i32) -> String {
    format!("{angle}°")
}

/// Duration label with a single decimal, e.g. `"3.5 s"`.
fn seconds(elapsed: Duration) -> String {
    format!("{:.1} s", elapsed.as_secs_f32())
}

fn share_text(target: i32, elapsed: Duration) -> String {
    format!(
        "I folded to the hidden {}° target in {} - can you beat that? #HingeIt",
        target,
        seconds(elapsed)
    )
}
