//! Souk Client - typed HTTP client for the marketplace backend
//!
//! Wraps every backend resource in a small service, keeps the login session
//! (optionally on disk) and hosts the client-side courier assignment flow.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod session;

mod client;

pub use api::delivery::AssignmentDecision;
pub use client::SoukClient;
pub use config::ClientConfig;
pub use dispatch::{AssignmentBackend, AssignmentOutcome, BatchAssigner, BatchReport, OrderOutcome};
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
pub use session::{Session, SessionData, SessionStorage};
