//! Internal utilities for the ffsig library
//!
//! Shared low-level helpers that are not part of the public API contract.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice};
