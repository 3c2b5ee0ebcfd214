//! `rv-core` — foundational types for the `robot_village` simulation.
//!
//! Every other `rv-*` crate depends on this one.  It has no `rv-*`
//! dependencies and minimal external ones (`rand`, `thiserror`, optional
//! `serde`).
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`ids`]    | `LocationId`                              |
//! | [`rng`]    | `SimRng` (seedable, child streams)        |
//! | [`config`] | `CompareConfig`, `DEFAULT_START`          |
//! | [`error`]  | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config.  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CompareConfig, DEFAULT_START};
pub use error::{CoreError, CoreResult};
pub use ids::LocationId;
pub use rng::SimRng;
