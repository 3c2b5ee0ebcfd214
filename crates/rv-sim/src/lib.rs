//! `rv-sim` — run loop and comparison harness for robot_village.
//!
//! # Run loop
//!
//! ```text
//! turn = 0
//! while state has parcels:
//!   ① Act   — robot.act(state, memory) → { direction, memory' }
//!   ② Move  — state = state.move_to(direction)   (no-op if not a neighbor)
//!   ③ Carry — memory = memory'; turn += 1
//! return turn
//! ```
//!
//! # Comparison
//!
//! [`compare_robots`] draws `task_count` random tasks up front, runs both
//! robots on every task, and reports the mean turns per robot.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs comparison tasks on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rv_behavior::{GoalOrientedRobot, Robot, RobotContext, SmartRobot};
//! use rv_core::{CompareConfig, SimRng};
//! use rv_sim::compare_robots;
//! use rv_spatial::{BfsRouter, village_graph};
//!
//! let graph = village_graph()?;
//! let ctx = RobotContext::new(&graph, &BfsRouter);
//! let config = CompareConfig::default();
//! let result = compare_robots(
//!     &ctx, &config,
//!     &SmartRobot, SmartRobot.initial_memory(),
//!     &GoalOrientedRobot, GoalOrientedRobot.initial_memory(),
//!     &mut SimRng::new(config.seed),
//! )?;
//! ```

pub mod compare;
pub mod error;
pub mod observer;
pub mod runner;

#[cfg(test)]
mod tests;

pub use compare::{Comparison, compare_robots};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, PathRecorder, RunObserver};
pub use runner::{Runner, run_robot};
