//! Round lifecycle engine
//!
//! Owns the round state and consumes the host's event stream: orientation
//! changes, randomizer ticks, hinge sensor samples and the start button.
//! Every operation is total - defined for every reachable state - and runs
//! to completion on the caller's thread. Hosts deliver events one at a time
//! (a single logical queue) and pull a fresh [`ViewModel`] after any call
//! that may have changed state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::capability::{DeviceFacts, GamePhase, classify};
use super::round::{self, RoundState};
use super::view::{self, ViewModel};
use crate::platform::clock::{Clock, SystemClock};

/// The game engine. Holds the device facts, the round in progress and the
/// injected RNG and clock; nothing else in the crate carries state.
pub struct HingeGame<R = Pcg32, C = SystemClock> {
    facts: DeviceFacts,
    round: RoundState,
    rng: R,
    clock: C,
}

impl HingeGame<Pcg32, SystemClock> {
    /// Engine with a seeded PRNG and the system clock. Two engines built
    /// from the same seed and fed the same events agree on every target.
    pub fn new(facts: DeviceFacts, seed: u64) -> Self {
        log::info!("Engine initialized with seed: {}", seed);
        Self::with_parts(facts, Pcg32::seed_from_u64(seed), SystemClock::new())
    }
}

impl<R: Rng, C: Clock> HingeGame<R, C> {
    /// Engine with caller-supplied randomness and time, for tests and
    /// scripted replays.
    pub fn with_parts(facts: DeviceFacts, mut rng: R, clock: C) -> Self {
        let round = RoundState::new(&mut rng);
        Self {
            facts,
            round,
            rng,
            clock,
        }
    }

    /// Phase the UI should present right now.
    ///
    /// Success is an overlay on a playable device: the moment the facts
    /// stop being favorable, the phase falls back to whatever the
    /// classifier says.
    pub fn phase(&self) -> GamePhase {
        match classify(self.facts) {
            GamePhase::Playing if self.round.succeeded() => GamePhase::Succeeded,
            phase => phase,
        }
    }

    /// New device or window facts from the host.
    ///
    /// The round itself survives the change - a committed target stays
    /// committed through a rotation - but a success that is showing when
    /// capability regresses is discarded for good. Recovery lands back on
    /// [`GamePhase::Playing`]; only a fresh sensor sample can win again.
    pub fn on_orientation_changed(&mut self, facts: DeviceFacts) {
        let before = self.phase();
        if before == GamePhase::Succeeded && !facts.favorable() {
            self.round.succeeded_at = None;
        }
        self.facts = facts;
        let after = self.phase();
        if after != before {
            log::info!("Orientation update: {:?} -> {:?}", before, after);
        }
    }

    /// One firing of the host's 500ms randomizer timer.
    ///
    /// Re-rolls the hidden target and returns `true` while the round is
    /// uncommitted; returns `false` once committed, telling the host to
    /// stop re-arming the timer. Re-rolling keeps going on unsupported
    /// devices - the target is hidden, so a churning value is harmless and
    /// the round is ready the instant capability recovers.
    pub fn on_randomizer_tick(&mut self) -> bool {
        if self.round.committed {
            return false;
        }
        self.round.target_angle = round::roll_target(&mut self.rng);
        log::debug!("Target re-rolled: {}°", self.round.target_angle);
        true
    }

    /// Hinge angle reading from the sensor, in degrees.
    ///
    /// Readings are stored as delivered; the driver owns the unit contract,
    /// including the 0 sentinel for "no reading yet". While muted the
    /// stored value triggers no success check, which keeps a lucky
    /// pre-commit fold from flashing a win. This is the only event that can
    /// enter [`GamePhase::Succeeded`].
    pub fn on_sensor_sample(&mut self, angle: i32) {
        log::trace!("Hinge sample: {}°", angle);
        self.round.current_angle = angle;
        if self.round.sensor_muted {
            return;
        }
        self.check_success();
    }

    /// Start button: freeze the target and begin listening to the sensor.
    ///
    /// A second press while committed does nothing; the round timer keeps
    /// counting from the first press. The press itself never wins: even a
    /// sample retained while muted only counts once the next live sample
    /// arrives.
    pub fn on_start_pressed(&mut self) {
        if self.round.committed {
            return;
        }
        self.round.committed = true;
        self.round.sensor_muted = false;
        self.round.started_at = Some(self.clock.now());
        log::info!("Round committed, listening for hinge samples");
        log::debug!("Hidden target: {}°", self.round.target_angle);
    }

    /// Abandon the current round and roll a fresh hidden target.
    ///
    /// The new round is uncommitted, so `on_randomizer_tick` returns `true`
    /// again and the host should re-arm its timer.
    pub fn reset_round(&mut self) {
        self.round = RoundState::new(&mut self.rng);
        log::info!("Round reset");
    }

    /// Presentation snapshot of the current state. Pure: calling this any
    /// number of times changes nothing and yields equal snapshots.
    pub fn view_model(&self) -> ViewModel {
        view::render(self.phase(), &self.round)
    }

    /// Success check, run on each live sensor sample. Success is only
    /// reachable while the device stays playable and the round is
    /// committed; the instant is captured once and kept.
    fn check_success(&mut self) {
        if self.facts.favorable()
            && self.round.committed
            && !self.round.succeeded()
            && self.round.within_window()
        {
            self.round.succeeded_at = Some(self.clock.now());
            log::info!(
                "Success: hinge at {}°, target {}°",
                self.round.current_angle,
                self.round.target_angle
            );
        }
    }
}
