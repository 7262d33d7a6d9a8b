//! # Medmock API Library
//!
//! Mock backend for the dialysis patient client. Every endpoint answers with
//! plausible random fixtures wrapped in a uniform success envelope.

pub mod config;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod server;
pub mod telemetry;
