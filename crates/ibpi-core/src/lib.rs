//! ibpi-core
//!
//! Records exchanged with the questionnaire front end and the storage
//! layer. No scoring logic lives here.

pub mod error;
pub mod models;
