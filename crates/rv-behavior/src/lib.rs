//! `rv-behavior` — delivery strategies.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`robot`]   | `Robot` trait                                                 |
//! | [`action`]  | `Action<M>` — next direction plus memory for the next turn    |
//! | [`context`] | `RobotContext<'a>` — graph and router shared by every call    |
//! | [`random`]  | `RandomRobot`                                                 |
//! | [`route`]   | `RouteRobot` — fixed loop, mail route by default              |
//! | [`goal`]    | `GoalOrientedRobot` — first parcel first                      |
//! | [`smart`]   | `SmartRobot` — shortest pickup, then shortest delivery        |
//! | [`any`]     | `AnyRobot`, `RobotMemory`, `RobotKind` for runtime selection  |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                          |
//!
//! # Design notes
//!
//! A strategy is a function of `(state, memory)`.  Memory is an associated
//! type so each strategy carries exactly what it needs (`()` for the random
//! robot, a [`Route`][rv_spatial::Route] for the planners) and the runner in
//! `rv-sim` stays generic over it.  Randomness comes in through an explicit
//! [`SimRng`][rv_core::SimRng] so runs are reproducible.

pub mod action;
pub mod any;
pub mod context;
pub mod error;
pub mod goal;
pub mod random;
pub mod robot;
pub mod route;
pub mod smart;


pub use action::Action;
pub use any::{AnyRobot, RobotKind, RobotMemory};
pub use context::RobotContext;
pub use error::{BehaviorError, BehaviorResult};
pub use goal::GoalOrientedRobot;
pub use random::RandomRobot;
pub use robot::Robot;
pub use route::RouteRobot;
pub use smart::{Candidate, Errand, SmartRobot};
