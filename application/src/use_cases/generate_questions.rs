//! Question generation use case.
//!
//! Resolves the provider client, builds the grade prompt and delegates.
//! Errors are logged here and returned unchanged; wrapping happens only
//! inside the client's composed operation.

use crate::ports::api_client::{ApiClientError, ApiClientProvider};
use sansu_domain::{
    Explanation, PromptBuilder, QuestionSet, require_non_empty, require_non_empty_list,
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Questions and explanation produced without sending mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub questions: QuestionSet,
    pub explanation: Explanation,
}

/// Produces question sets and their explanations
#[derive(Clone)]
pub struct QuestionGenerationService {
    clients: Arc<dyn ApiClientProvider>,
    prompts: PromptBuilder,
}

impl QuestionGenerationService {
    pub fn new(clients: Arc<dyn ApiClientProvider>, prompts: PromptBuilder) -> Self {
        Self { clients, prompts }
    }

    /// Generate five questions for `grade` with the given provider
    pub async fn generate_questions(
        &self,
        provider: &str,
        grade: &str,
    ) -> Result<QuestionSet, ApiClientError> {
        let result = async {
            require_non_empty(provider, "provider")?;
            require_non_empty(grade, "grade")?;

            let client = self.clients.create_client(provider)?;
            let prompt = self.prompts.create_prompt(grade)?;
            debug!(topics = ?prompt.topics(), "Built word problem prompt");

            info!(
                "Generating questions with {} for grade {}",
                client.provider().display_name(),
                grade.trim()
            );
            client.generate_questions(prompt.text()).await
        }
        .await;

        if let Err(e) = &result {
            error!("Question generation failed: {}", e);
        }
        result
    }

    /// Explain a question set; always served by the explanation client
    pub async fn generate_explanation(
        &self,
        questions: &QuestionSet,
    ) -> Result<Explanation, ApiClientError> {
        let result = async {
            require_non_empty_list(questions.as_slice(), "questions")?;
            self.clients
                .explanation_client()
                .generate_explanation(questions, self.prompts.explanation_prompt())
                .await
        }
        .await;

        if let Err(e) = &result {
            error!("Explanation generation failed: {}", e);
        }
        result
    }

    /// Generate questions and explanation without sending anything
    pub async fn preview(&self, provider: &str, grade: &str) -> Result<Preview, ApiClientError> {
        info!("Testing with API Provider: {}, Grade: {}", provider, grade);
        let questions = self.generate_questions(provider, grade).await?;
        let explanation = self.generate_explanation(&questions).await?;
        info!("Test execution completed successfully!");
        Ok(Preview {
            questions,
            explanation,
        })
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    pub fn clients(&self) -> &Arc<dyn ApiClientProvider> {
        &self.clients
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::ports::api_client::{ApiClient, ExplanationGenerator};
    use async_trait::async_trait;
    use sansu_domain::{DomainError, ProviderId};
    use serde_json::Value;
    use std::sync::Mutex;

    /// Client that records prompts and returns fixed questions
    pub(crate) struct StubClient {
        pub provider: ProviderId,
        pub questions: Result<QuestionSet, ApiClientError>,
        pub prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ApiClient for StubClient {
        fn provider(&self) -> ProviderId {
            self.provider
        }

        fn api_key(&self) -> Result<String, ApiClientError> {
            Ok("stub".to_string())
        }

        async fn generate_content(&self, _prompt: &str) -> Result<String, ApiClientError> {
            Ok(String::new())
        }

        fn extract_questions(&self, _response: &Value) -> Result<QuestionSet, ApiClientError> {
            self.questions.clone()
        }

        async fn generate_questions(&self, prompt: &str) -> Result<QuestionSet, ApiClientError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.questions.clone()
        }
    }

    pub(crate) struct StubExplainer {
        pub explanation: Result<Explanation, ApiClientError>,
        pub requests: Mutex<Vec<(QuestionSet, String)>>,
    }

    #[async_trait]
    impl ExplanationGenerator for StubExplainer {
        async fn generate_explanation(
            &self,
            questions: &QuestionSet,
            explanation_prompt: &str,
        ) -> Result<Explanation, ApiClientError> {
            self.requests
                .lock()
                .unwrap()
                .push((questions.clone(), explanation_prompt.to_string()));
            self.explanation.clone()
        }
    }

    pub(crate) struct StubProvider {
        pub client: Arc<StubClient>,
        pub explainer: Arc<StubExplainer>,
    }

    impl ApiClientProvider for StubProvider {
        fn create_client(&self, provider: &str) -> Result<Arc<dyn ApiClient>, ApiClientError> {
            let id: ProviderId = provider.parse()?;
            if id != self.client.provider {
                return Err(DomainError::UnsupportedProvider(provider.to_string()).into());
            }
            Ok(self.client.clone())
        }

        fn explanation_client(&self) -> Arc<dyn ExplanationGenerator> {
            self.explainer.clone()
        }
    }

    pub(crate) fn five_questions() -> QuestionSet {
        QuestionSet::new(
            ["a", "b", "c", "d", "e"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    pub(crate) fn stub_provider(
        questions: Result<QuestionSet, ApiClientError>,
        explanation: Result<Explanation, ApiClientError>,
    ) -> Arc<StubProvider> {
        Arc::new(StubProvider {
            client: Arc::new(StubClient {
                provider: ProviderId::Gemini,
                questions,
                prompts: Mutex::new(Vec::new()),
            }),
            explainer: Arc::new(StubExplainer {
                explanation,
                requests: Mutex::new(Vec::new()),
            }),
        })
    }

    #[tokio::test]
    async fn test_generate_questions_delegates_with_grade_prompt() {
        let provider = stub_provider(Ok(five_questions()), Ok(Explanation::new("x")));
        let service = QuestionGenerationService::new(provider.clone(), PromptBuilder::default());

        let questions = service.generate_questions("GEMINI", "4").await.unwrap();
        assert_eq!(questions, five_questions());

        let prompts = provider.client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(!prompts[0].contains(sansu_domain::WORD_PROBLEM_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_generate_questions_returns_errors_unwrapped() {
        let failure = ApiClientError::QuestionExtractionFailed(Box::new(
            ApiClientError::invalid_format(ProviderId::Gemini),
        ));
        let provider = stub_provider(Err(failure.clone()), Ok(Explanation::new("x")));
        let service = QuestionGenerationService::new(provider, PromptBuilder::default());

        let err = service.generate_questions("gemini", "5").await.unwrap_err();
        assert_eq!(err, failure);
    }

    #[tokio::test]
    async fn test_invalid_input_fails_before_any_call() {
        let provider = stub_provider(Ok(five_questions()), Ok(Explanation::new("x")));
        let service = QuestionGenerationService::new(provider.clone(), PromptBuilder::default());

        let err = service.generate_questions("mistral", "4").await.unwrap_err();
        assert_eq!(
            err,
            ApiClientError::Domain(DomainError::UnsupportedProvider("mistral".to_string()))
        );

        let err = service.generate_questions("gemini", "6").await.unwrap_err();
        assert_eq!(err.to_string(), "Unsupported grade: 6. Supported grades: 4, 5");

        let err = service.generate_questions("", "4").await.unwrap_err();
        assert_eq!(err.to_string(), "provider must be a non-empty string");

        assert!(provider.client.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_explanation_uses_explanation_prompt() {
        let provider = stub_provider(Ok(five_questions()), Ok(Explanation::new("解説")));
        let prompts = PromptBuilder::default();
        let expected_prompt = prompts.explanation_prompt().to_string();
        let service = QuestionGenerationService::new(provider.clone(), prompts);

        let explanation = service.generate_explanation(&five_questions()).await.unwrap();
        assert_eq!(explanation.as_str(), "解説");

        let requests = provider.explainer.requests.lock().unwrap();
        assert_eq!(requests[0].0, five_questions());
        assert_eq!(requests[0].1, expected_prompt);
    }

    #[tokio::test]
    async fn test_generate_explanation_rejects_empty_set() {
        let provider = stub_provider(Ok(five_questions()), Ok(Explanation::new("x")));
        let service = QuestionGenerationService::new(provider.clone(), PromptBuilder::default());

        let err = service
            .generate_explanation(&QuestionSet::new(vec![]))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "questions must not be empty");
        assert!(provider.explainer.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_preview_returns_questions_and_explanation() {
        let provider = stub_provider(Ok(five_questions()), Ok(Explanation::new("答えは 1/2")));
        let service = QuestionGenerationService::new(provider.clone(), PromptBuilder::default());

        let preview = service.preview("gemini", "4").await.unwrap();
        assert_eq!(preview.questions, five_questions());
        assert_eq!(preview.explanation.as_str(), "答えは 1/2");
        assert_eq!(provider.client.prompts.lock().unwrap().len(), 1);
        assert_eq!(provider.explainer.requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_preview_stops_when_questions_fail() {
        let failure = ApiClientError::invalid_format(ProviderId::Gemini);
        let provider = stub_provider(Err(failure.clone()), Ok(Explanation::new("x")));
        let service = QuestionGenerationService::new(provider.clone(), PromptBuilder::default());

        assert_eq!(service.preview("gemini", "4").await.unwrap_err(), failure);
        assert!(provider.explainer.requests.lock().unwrap().is_empty());
    }
}
