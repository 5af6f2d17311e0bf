#[macro_use]
extern crate log;

mod common;
mod error;
mod logger;
mod server;

pub mod backend;
pub mod codec;
pub mod handler;
pub mod metrics;
pub mod proto;

pub use backend::{Backend, BackendBuilder, ClientOpts, Credentials, HecBackend, HecBackendBuilder};
pub use common::*;
pub use error::*;
pub use handler::{Gateway, GatewayResponse};
pub use logger::{init_logger, LOG_FILE_NAME};
pub use metrics::Metrics;
pub use server::{RopeeServer, METRICS_PATH, READ_PATH, WRITE_PATH};
