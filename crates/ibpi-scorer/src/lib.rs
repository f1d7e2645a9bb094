//! ibpi-scorer
//!
//! Batch scoring host: reads JSON Lines answer sheets, scores them in
//! parallel and writes scored records.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
