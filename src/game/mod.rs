//! Deterministic game core
//!
//! All decision logic lives here. This module must be pure and deterministic:
//! - Injected RNG and clock only (no ambient time or global randomness)
//! - Total operations: every event is defined for every reachable state
//! - No rendering or platform dependencies
//!
//! The host feeds events to [`HingeGame`] and renders the [`ViewModel`] it
//! derives; nothing in this module touches a screen or a sensor API.

pub mod capability;
pub mod engine;
pub(crate) mod round;
pub mod view;

pub use capability::{DeviceFacts, GamePhase, classify};
pub use engine::HingeGame;
pub use view::{Gradient, ViewModel, Visibility, gradients};
