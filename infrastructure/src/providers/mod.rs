//! Provider clients
//!
//! One [`ApiClient`](sansu_application::ApiClient) per supported API plus
//! the [`ApiClientFactory`] that resolves identifiers to clients.

mod claude;
mod factory;
mod gemini;
mod openai;
mod schema;

#[cfg(test)]
pub(crate) mod testing;

pub use claude::ClaudeClient;
pub use factory::ApiClientFactory;
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use schema::question_schema;
