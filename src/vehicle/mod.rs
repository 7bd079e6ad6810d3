//! Vehicles and cars.
//!
//! A [`Car`] embeds a [`Vehicle`] instead of inheriting from it. The shared
//! capability is the [`VehicleInfo`] trait, whose formatting lives in a single
//! provided method, so a car and a plain vehicle with the same make and year
//! always describe themselves identically.

mod types;

pub use types::{Car, Vehicle, VehicleInfo};
