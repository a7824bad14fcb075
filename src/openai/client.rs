// src/openai/client.rs
use std::time::Duration;

use reqwest::header;

use crate::form::IncidentForm;
use crate::openai::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::openai::prompt;
use crate::utils::error::OpenAiError;

const OPENAI_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
// Report generation is a single long completion; leave generous headroom.
const REQUEST_TIMEOUT_SECS: u64 = 90;
const TEMPERATURE: f32 = 0.7;

/// Creates a reqwest client configured for the OpenAI API.
fn build_openai_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}

/// Reads the API key from the environment. Checked before any network use
/// so a missing key fails fast with a clear error.
fn api_key() -> Result<String, OpenAiError> {
    match std::env::var(OPENAI_API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(OpenAiError::MissingApiKey),
    }
}

/// Sends one chat completion request and returns the assistant text.
pub async fn chat_completion(
    model: &str,
    messages: Vec<ChatMessage>,
) -> Result<String, OpenAiError> {
    let key = api_key()?;
    let client = build_openai_client()?; // Propagate client build error if any

    let request = ChatCompletionRequest {
        model: model.to_string(),
        messages,
        temperature: TEMPERATURE,
    };

    tracing::info!("Requesting chat completion from model: {}", model);

    let response = client
        .post(OPENAI_COMPLETIONS_URL)
        .bearer_auth(&key)
        .header(header::CONTENT_TYPE, "application/json")
        .json(&request)
        .send()
        .await?; // Propagates reqwest::Error as OpenAiError::Network

    // Check if the request was successful (status code 2xx)
    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} from chat completions endpoint", status);
        // Check for specific common errors
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Received 429 Too Many Requests - check rate limits and quota.");
            return Err(OpenAiError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("Received 401 Unauthorized - check OPENAI_API_KEY.");
            return Err(OpenAiError::Unauthorized);
        }
        // Return generic HTTP error
        return Err(OpenAiError::Http(status));
    }

    let completion: ChatCompletionResponse = response.json().await?;

    if let Some(usage) = &completion.usage {
        tracing::debug!(
            "Token usage: {} prompt, {} completion, {} total",
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens
        );
    }

    let content = completion
        .first_content()
        .ok_or(OpenAiError::EmptyCompletion)?;
    tracing::debug!("Received {} bytes of completion text", content.len());

    Ok(content.to_string())
}

/// Generates the employee-facing coaching report text for the given form.
pub async fn generate_coaching_report(
    model: &str,
    form: &IncidentForm,
) -> Result<String, OpenAiError> {
    let messages = vec![
        ChatMessage::system(prompt::SYSTEM_PROMPT),
        ChatMessage::user(prompt::coaching_prompt(form)),
    ];
    chat_completion(model, messages).await
}

/// Generates the private leadership-reflection note for the given form.
pub async fn generate_leadership_note(
    model: &str,
    form: &IncidentForm,
) -> Result<String, OpenAiError> {
    let messages = vec![
        ChatMessage::system(prompt::SYSTEM_PROMPT),
        ChatMessage::user(prompt::leadership_prompt(form)),
    ];
    chat_completion(model, messages).await
}
