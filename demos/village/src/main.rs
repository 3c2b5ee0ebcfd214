//! village — compare two delivery robots on the village road graph.
//!
//! Runs both robots over the same batch of random tasks and prints the mean
//! number of turns each needed, then walks through the persistent group.
//! See `config.rs` for the environment variables; `RUST_LOG=debug` shows
//! every run and `RUST_LOG=trace` every turn.

mod config;

use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use rv_behavior::{AnyRobot, Robot, RobotContext};
use rv_core::SimRng;
use rv_pgroup::PGroup;
use rv_sim::compare_robots;
use rv_spatial::{BfsRouter, village_graph};

use config::DemoConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = DemoConfig::from_env()?;

    println!("=== village — delivery robot comparison ===");
    println!(
        "Robots: {} vs {}  |  Tasks: {}  |  Parcels: {}  |  Seed: {}",
        cfg.robot_a, cfg.robot_b, cfg.compare.task_count, cfg.compare.parcel_count, cfg.compare.seed,
    );
    println!();

    // ── Build graph and robots ────────────────────────────────────────────
    let graph = village_graph()?;
    println!(
        "Village: {} locations, {} roads",
        graph.location_count(),
        graph.edge_count() / 2,
    );
    let ctx = RobotContext::new(&graph, &BfsRouter);
    let robot_a = AnyRobot::from_kind(cfg.robot_a, &graph)?;
    let robot_b = AnyRobot::from_kind(cfg.robot_b, &graph)?;

    // ── Compare ───────────────────────────────────────────────────────────
    let t0 = Instant::now();
    let result = compare_robots(
        &ctx,
        &cfg.compare,
        &robot_a,
        robot_a.initial_memory(),
        &robot_b,
        robot_b.initial_memory(),
        &mut SimRng::new(cfg.compare.seed),
    )?;
    let elapsed = t0.elapsed();

    println!();
    println!("{:<10} {:>12}", "Robot", "Avg turns");
    println!("{}", "-".repeat(23));
    println!("{:<10} {:>12.2}", robot_a.name(), result.robot_a);
    println!("{:<10} {:>12.2}", robot_b.name(), result.robot_b);
    println!();
    println!("Compared {} tasks in {:.3} s", result.tasks, elapsed.as_secs_f64());
    println!();

    // ── Persistent group ──────────────────────────────────────────────────
    let a = PGroup::empty().add("a");
    let ab = a.add("b");
    let b = ab.delete(&"a");

    println!("=== persistent group ===");
    println!("a  = {a:?}");
    println!("ab = {ab:?}");
    println!("b  = {b:?}");
    println!("b.has(\"b\") = {}", b.has(&"b"));
    println!("a.has(\"b\") = {}", a.has(&"b"));
    println!("b.has(\"a\") = {}", b.has(&"a"));

    Ok(())
}
