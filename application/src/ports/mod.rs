//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod api_client;
pub mod http_transport;
pub mod mailer;
pub mod secret_store;
