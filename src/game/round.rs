//! Per-round state
//!
//! Everything one round carries between events lives here. The struct is
//! owned exclusively by the engine; presentation code only ever sees it
//! through the derived view model.

use std::time::Duration;

use rand::Rng;

use crate::consts::*;

/// State of the round currently on screen.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Hidden target the player must fold to. Re-rolled on every randomizer
    /// tick until the round is committed.
    pub target_angle: i32,
    /// Last hinge reading in degrees. The driver reports 0 before the first
    /// real sample, so 0 doubles as "no reading yet" and a genuine flat fold
    /// is indistinguishable from silence.
    pub current_angle: i32,
    /// Set by the start button: freezes the target and switches the engine
    /// into sensor-listening mode.
    pub committed: bool,
    /// Samples are stored but trigger no re-evaluation while muted.
    pub sensor_muted: bool,
    /// Commit instant, from the injected clock.
    pub started_at: Option<Duration>,
    /// Success instant. Captured once, so later snapshots replay the same
    /// duration instead of re-reading the clock.
    pub succeeded_at: Option<Duration>,
}

impl RoundState {
    /// Fresh uncommitted round. The first target is rolled immediately so
    /// `target_angle` is in range from the very first snapshot.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            target_angle: roll_target(rng),
            current_angle: ANGLE_UNKNOWN,
            committed: false,
            sensor_muted: true,
            started_at: None,
            succeeded_at: None,
        }
    }

    /// True while the current reading sits inside the success window around
    /// the target.
    ///
    /// The window is a straight integer interval: it does not wrap at the
    /// 0/360 seam, and the 0 sentinel never matches (which also rules out a
    /// genuine fully-folded 0 degree reading).
    pub fn within_window(&self) -> bool {
        self.current_angle != ANGLE_UNKNOWN
            && (self.target_angle - ANGLE_THRESHOLD..=self.target_angle + ANGLE_THRESHOLD)
                .contains(&self.current_angle)
    }

    /// Time between commit and success, once both exist.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.succeeded_at) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded_at.is_some()
    }
}

/// Draw a target from the half-open `[ANGLE_MIN, ANGLE_MAX)` degree range.
pub fn roll_target<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(ANGLE_MIN..ANGLE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn round_at(target: i32, current: i32) -> RoundState {
        let mut rng = Pcg32::seed_from_u64(7);
        RoundState {
            target_angle: target,
            current_angle: current,
            ..RoundState::new(&mut rng)
        }
    }

    #[test]
    fn test_window_boundaries_at_180() {
        assert!(round_at(180, 175).within_window());
        assert!(round_at(180, 185).within_window());
        assert!(round_at(180, 180).within_window());
        assert!(!round_at(180, 174).within_window());
        assert!(!round_at(180, 186).within_window());
    }

    #[test]
    fn test_sentinel_reading_never_matches() {
        // Target 3 puts 0 inside the arithmetic window, but 0 means
        // "no reading yet" and must not count.
        assert!(!round_at(3, 0).within_window());
        assert!(round_at(3, 1).within_window());
    }

    #[test]
    fn test_window_does_not_wrap_at_seam() {
        // Target 2: the window is [-3, 7] taken literally, not mod 360.
        assert!(!round_at(2, 359).within_window());
        assert!(round_at(2, 7).within_window());
    }

    #[test]
    fn test_fresh_round_is_idle() {
        let mut rng = Pcg32::seed_from_u64(42);
        let round = RoundState::new(&mut rng);
        assert_eq!(round.current_angle, ANGLE_UNKNOWN);
        assert!(!round.committed);
        assert!(round.sensor_muted);
        assert!(!round.succeeded());
        assert_eq!(round.duration(), None);
    }

    #[test]
    fn test_duration_needs_both_instants() {
        let mut round = round_at(90, 0);
        round.started_at = Some(Duration::from_millis(200));
        assert_eq!(round.duration(), None);

        round.succeeded_at = Some(Duration::from_millis(3700));
        assert_eq!(round.duration(), Some(Duration::from_millis(3500)));
    }

    proptest! {
        /// Targets stay inside [ANGLE_MIN, ANGLE_MAX) for any seed and any
        /// number of re-rolls.
        #[test]
        fn prop_rolled_targets_stay_in_range(seed in any::<u64>(), rolls in 1usize..64) {
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..rolls {
                let target = roll_target(&mut rng);
                prop_assert!((ANGLE_MIN..ANGLE_MAX).contains(&target));
            }
        }

        /// Window membership agrees with plain distance arithmetic for real
        /// (non-sentinel) readings.
        #[test]
        fn prop_window_matches_distance(target in 0..360i32, current in 1..360i32) {
            let expected = (target - current).abs() <= ANGLE_THRESHOLD;
            prop_assert_eq!(round_at(target, current).within_window(), expected);
        }
    }
}
