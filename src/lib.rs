//! Core library for the fogo-autoswap bot.
//!
//! Cycles a single wallet between the native asset and a stable asset
//! through one fixed Vortex pool: wrap, swap, unwrap, sleep, repeat.

pub mod balance;
pub mod config;
pub mod cycle;
pub mod errors;
pub mod models;
pub mod pool;
pub mod swap;
pub mod utils;
pub mod wallet;
