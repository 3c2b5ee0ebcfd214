//! `rv-spatial` — village road graph and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`graph`]   | `VillageGraph` (interned names + CSR), `GraphBuilder`    |
//! | [`router`]  | `Router` trait, `Route`, `BfsRouter`, `find_route`       |
//! | [`village`] | `ROADS`, `MAIL_ROUTE`, `village_graph`, `mail_route`     |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                       |

pub mod error;
pub mod graph;
pub mod router;
pub mod village;


pub use error::{SpatialError, SpatialResult};
pub use graph::{GraphBuilder, VillageGraph};
pub use router::{BfsRouter, Route, Router, find_route};
pub use village::{MAIL_ROUTE, ROADS, mail_route, village_graph};
