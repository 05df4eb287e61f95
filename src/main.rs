//! Hinge It demo driver
//!
//! Simulates the host platform end to end: orientation events, the
//! cooperative randomizer loop, the start press and a scripted fold sweep.
//! Each stage prints its view-model snapshot as a JSON line, so the output
//! can be piped into jq or replayed against a UI prototype.

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use hinge_it::consts::RANDOMIZER_PERIOD;
use hinge_it::{DeviceFacts, GamePhase, HingeGame, ManualClock, ViewModel};

fn main() {
    env_logger::init();
    log::info!("Hinge It (demo) starting...");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|epoch| epoch.as_millis() as u64)
        .unwrap_or(0);
    log::info!("Demo seed: {}", seed);

    let clock = ManualClock::new();
    let launched = DeviceFacts {
        has_hinge: true,
        spanned: false,
        portrait: true,
    };
    let mut game = HingeGame::with_parts(launched, Pcg32::seed_from_u64(seed), clock.clone());
    dump("launched unspanned", &game.view_model());

    // Player spans the app across both displays.
    game.on_orientation_changed(DeviceFacts {
        has_hinge: true,
        spanned: true,
        portrait: true,
    });
    dump("spanned portrait", &game.view_model());

    // Cooperative randomizer loop: re-arm for as long as the engine asks.
    for _ in 0..4 {
        if !game.on_randomizer_tick() {
            break;
        }
        clock.advance(RANDOMIZER_PERIOD);
    }
    dump("randomizing", &game.view_model());

    game.on_start_pressed();
    dump("committed", &game.view_model());

    // Fold sweep: two degrees per sample until the hidden target matches.
    // Every possible target has a non-sentinel even angle in its window, so
    // the sweep always terminates in a win.
    for angle in (0..360).step_by(2) {
        clock.advance(Duration::from_millis(50));
        game.on_sensor_sample(angle);
        if game.phase() == GamePhase::Succeeded {
            break;
        }
    }
    dump("after sweep", &game.view_model());

    let vm = game.view_model();
    if vm.phase == GamePhase::Succeeded {
        println!("✓ Matched {} in {}", vm.result_angle_label, vm.duration_label);
    } else {
        println!("✗ Sweep ended without a match");
    }
}

/// Print one labeled snapshot as a JSON line.
fn dump(stage: &str, vm: &ViewModel) {
    match serde_json::to_string(vm) {
        Ok(json) => println!("{}: {}", stage, json),
        Err(err) => log::error!("Snapshot encode failed: {}", err),
    }
}
