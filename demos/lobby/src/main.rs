//! lobby — two cabs, six floors, one simulated rush.
//!
//! Builds the fleet from a JSON `FleetConfig` (first argument) or the
//! built-in default lobby, scripts a handful of calls, then lets seeded
//! random traffic run.  Every tick is printed; snapshots go to
//! `output/lobby/*.csv`.  Set `RUST_LOG=debug` to see assignments.

use std::path::Path;

use anyhow::{Context, Result};

use lift_cab::MotionState;
use lift_core::{CabId, CabinRequest, FloorRequest};
use lift_dispatch::StrategyKind;
use lift_output::{CsvWriter, FleetOutputObserver};
use lift_sim::{FleetBuilder, FleetConfig, FleetView, RandomTraffic, Shared};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 42;
const SCRIPT_TICKS:  u64 = 12;
const TRAFFIC_TICKS: u64 = 40;
const DRAIN_LIMIT:   u64 = 200;
const OUTPUT_DIR:    &str = "output/lobby";

// ── Console rendering ─────────────────────────────────────────────────────────

fn render(view: &FleetView<'_>) {
    let cabs: Vec<String> = view
        .cabs
        .iter()
        .map(|cab| {
            let glyph = match cab.state() {
                MotionState::Idle       => '·',
                MotionState::MovingUp   => '↑',
                MotionState::MovingDown => '↓',
                MotionState::DoorsOpen  => '□',
            };
            let queue: Vec<String> = cab.destinations().iter().map(i32::to_string).collect();
            format!("{} {}@{} [{}]", cab.id(), glyph, cab.position(), queue.join(","))
        })
        .collect();
    println!("{:>5}  {:<10} {}", view.tick, view.strategy, cabs.join("   "));
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading fleet config {path}"))?;
            serde_json::from_str::<FleetConfig>(&text)
                .with_context(|| format!("parsing fleet config {path}"))?
        }
        None => FleetConfig::default_lobby(),
    };

    println!("=== lobby — lift simulator ===");
    println!(
        "Floors: 0..={}  |  Cabs: {}  |  Strategy: {}  |  Seed: {SEED}",
        config.total_floors,
        config.cabs.len(),
        config.strategy,
    );
    println!();

    // 1. Fleet with console and CSV observers.
    let recorder = Shared::new(FleetOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?));
    let mut fleet = FleetBuilder::from_config(&config)
        .observer(render)
        .observer(recorder.clone())
        .build()?;

    // 2. Scripted morning: calls from the lobby and upper floors.
    let top = fleet.total_floors();
    let first = config.cabs[0].id;
    fleet.add_floor_request(FloorRequest::up(0));
    fleet.add_floor_request(FloorRequest::down(top));
    fleet.add_cabin_request(CabinRequest::new(first, top.min(3)))?;
    fleet.step();
    // A button in a cab that does not exist: reported, not fatal.
    if let Err(diagnostic) = fleet.add_cabin_request(CabinRequest::new(CabId(99), 2)) {
        println!("       ! {diagnostic}");
    }
    fleet.run_ticks(SCRIPT_TICKS - 1);

    // 3. Random traffic; switch policy halfway.
    let mut traffic = RandomTraffic::new(SEED);
    for i in 0..TRAFFIC_TICKS {
        if i == TRAFFIC_TICKS / 2 {
            let next = StrategyKind::ALL
                .into_iter()
                .find(|k| k.as_str() != fleet.strategy_name())
                .unwrap_or_default();
            println!("       -- switching to {next}");
            fleet.set_strategy_kind(next);
        }
        traffic.inject(&mut fleet);
        fleet.step();
    }

    // 4. Let the cabs finish their queues.
    let drained = fleet.run_until_idle(DRAIN_LIMIT);
    fleet.finish();

    if let Some(e) = recorder.with(|r| r.take_error()) {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    println!();
    match drained {
        Some(ticks) => println!("All cabs idle after {ticks} more ticks ({} total).", fleet.current_tick()),
        None        => println!("Cabs still busy after {DRAIN_LIMIT} extra ticks."),
    }
    let diagnostics = fleet.take_diagnostics();
    println!("Diagnostics: {}", diagnostics.len());
    for d in diagnostics {
        println!("  {d}");
    }
    println!("Output written to {OUTPUT_DIR}/");

    Ok(())
}
