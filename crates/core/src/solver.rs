//! Math Solver Client
//!
//! This module provides the client abstraction for the external completion
//! service. The `MathSolver` trait is the seam between the web layer and
//! the model provider; `OpenAICompatibleSolver` implements it for any
//! OpenAI-compatible chat endpoint (including Gemini through Google's
//! compatibility layer), and `MockSolver` provides deterministic output
//! for tests.

use crate::history::Difficulty;
use async_openai::{
    Client,
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

/// The fixed instructional prefix sent with every request.
pub const SYSTEM_PROMPT: &str = "\
You are a Math Mastermind - an expert mathematics problem solver with exceptional abilities in:

- Algebra, Calculus, Geometry, Trigonometry
- Statistics, Probability, Linear Algebra
- Discrete Mathematics, Number Theory
- Mathematical Proofs and Logic
- Applied Mathematics and Word Problems

For every math problem:
1. Show clear step-by-step solutions
2. Explain the mathematical reasoning
3. Provide alternative solving methods when applicable
4. Verify your answer when possible
5. Use proper mathematical notation
6. Break down complex problems into manageable parts

Format your responses with:
- Clear problem identification
- Step-by-step solution process
- Final answer highlighted
- Brief explanation of concepts used

Always be precise, thorough, and educational in your mathematical explanations.";

/// Near-deterministic sampling for reproducible solutions.
const TEMPERATURE: f32 = 0.1;

/// Builds the user-facing portion of the outbound prompt: the difficulty
/// tag followed by the trimmed problem text.
pub fn problem_prompt(problem: &str, difficulty: Difficulty) -> String {
    format!("Math Problem: [{difficulty} Level] {problem}")
}

/// A failure of the outbound completion call.
///
/// These never propagate past the rendering boundary: the web layer
/// formats them as a displayable `Error: <cause>` answer string.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    #[error("completion request failed: {0}")]
    Api(#[from] OpenAIError),
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// A client that can produce a worked solution for a math problem.
#[async_trait]
pub trait MathSolver: Send + Sync {
    /// Makes a single, non-streaming call to the completion service.
    ///
    /// One outstanding call per interaction; no retries and no timeout
    /// beyond what the transport imposes.
    async fn solve(&self, problem: &str, difficulty: Difficulty) -> Result<String, SolveError>;
}

/// An implementation of `MathSolver` for any OpenAI-compatible API.
pub struct OpenAICompatibleSolver {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAICompatibleSolver {
    /// Creates a new solver for an OpenAI-compatible service.
    ///
    /// # Arguments
    ///
    /// * `config` - The client configuration, including API key and base URL.
    /// * `model` - The model identifier to use (e.g., "gemini-2.5-flash").
    pub fn new(config: OpenAIConfig, model: String) -> Self {
        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

#[async_trait]
impl MathSolver for OpenAICompatibleSolver {
    async fn solve(&self, problem: &str, difficulty: Difficulty) -> Result<String, SolveError> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(TEMPERATURE)
            .messages(vec![
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(problem_prompt(problem, difficulty))
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|text| !text.is_empty())
            .ok_or(SolveError::EmptyResponse)
    }
}

/// A mock `MathSolver` for development and testing.
///
/// Produces predictable output without external dependencies or API costs.
pub struct MockSolver;

#[async_trait]
impl MathSolver for MockSolver {
    async fn solve(&self, problem: &str, difficulty: Difficulty) -> Result<String, SolveError> {
        Ok(format!("[{difficulty}] worked solution for: {problem}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_prompt_carries_difficulty_tag() {
        let prompt = problem_prompt("Solve x² + 5x + 6 = 0", Difficulty::Intermediate);
        assert_eq!(
            prompt,
            "Math Problem: [Intermediate Level] Solve x² + 5x + 6 = 0"
        );
    }

    #[test]
    fn test_problem_prompt_basic_and_advanced_tags() {
        assert!(problem_prompt("2 + 2", Difficulty::Basic).contains("[Basic Level]"));
        assert!(problem_prompt("∮ F · dr", Difficulty::Advanced).contains("[Advanced Level]"));
    }

    #[test]
    fn test_system_prompt_is_the_mastermind_instruction() {
        assert!(SYSTEM_PROMPT.starts_with("You are a Math Mastermind"));
        assert!(SYSTEM_PROMPT.contains("step-by-step"));
    }

    #[test]
    fn test_empty_response_error_display() {
        let err = SolveError::EmptyResponse;
        assert_eq!(format!("{err}"), "model returned an empty response");
    }

    #[tokio::test]
    async fn test_mock_solver_is_deterministic() {
        let solver = MockSolver;
        let first = solver
            .solve("integrate 2x + 3", Difficulty::Basic)
            .await
            .unwrap();
        let second = solver
            .solve("integrate 2x + 3", Difficulty::Basic)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(first.contains("integrate 2x + 3"));
        assert!(first.contains("Basic"));
    }
}
