//! Delivery run settings

mod execution;
mod recipients;

pub use execution::ExecutionConfig;
pub use recipients::{RecipientList, Recipients, join_recipients};
