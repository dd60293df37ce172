//! Constant values for ffsig cryptographic operations
//!
//! This library provides the parameter-size tables and search bounds used
//! across the ffsig project.

#![no_std]

pub mod dsa;

pub use dsa::*;
