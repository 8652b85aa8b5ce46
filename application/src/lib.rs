//! Application layer for sansu-mail
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    api_client::{
        ApiCallFailure, ApiClient, ApiClientError, ApiClientProvider, ExplanationGenerator,
        call_api, require_api_key,
    },
    http_transport::{HttpRequest, HttpResponse, HttpTransport, TransportError},
    mailer::{Mailer, MailerError, OutgoingEmail},
    secret_store::SecretStore,
};
pub use use_cases::deliver_problems::{
    DeliverProblemsInput, DeliverProblemsUseCase, DeliveryError, DeliveryOutcome,
};
pub use use_cases::generate_questions::{Preview, QuestionGenerationService};
