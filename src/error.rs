//! # Error Handling
//!
//! Process-level failures. Request handling itself never fails: bad input
//! degrades to defaults and every route answers with a success envelope.

use std::{io, net::SocketAddr};

use thiserror::Error;

use crate::config::ConfigError;
use crate::telemetry::TelemetryInitError;

/// Errors that stop the server from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(#[from] TelemetryInitError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server terminated: {0}")]
    Serve(#[source] io::Error),
}
