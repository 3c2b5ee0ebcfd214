//! `rv-world` — the immutable village state.
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`parcel`] | `Parcel` — current place and delivery address         |
//! | [`state`]  | `VillageState` — robot place, parcels, `move_to`      |
//!
//! # Transition model
//!
//! A turn is one [`VillageState::move_to`] call.  Moving along a road carries
//! every parcel at the robot's place to the destination and drops the ones
//! that arrive at their address.  Asking for a location that is not adjacent
//! is not an error; the robot simply stays where it is.

pub mod parcel;
pub mod state;


pub use parcel::Parcel;
pub use state::VillageState;
