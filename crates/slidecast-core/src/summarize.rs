//! Optional AI summarization collaborator: produces a slide list directly
//! from the video title and description, bypassing segmentation. Its output
//! is validated by the assembler and any failure falls back to the
//! deterministic strategies.

use async_trait::async_trait;
use serde::Deserialize;

use crate::{
    error::{Result, SlidecastError},
    source::FETCH_TIMEOUT,
    types::{Slide, VideoMetadata},
};

#[derive(Clone, Copy, Debug, Default)]
pub enum Provider {
    #[default]
    Openai,
    Grok,
    Gemini,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-4o",
                env_var: "OPENAI_API_KEY",
            },
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
                env_var: "XAI_API_KEY",
            },
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-3-pro",
                env_var: "GEMINI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Openai => "OpenAI",
            Provider::Grok => "Grok",
            Provider::Gemini => "Gemini",
        }
    }

    /// Read this provider's API key from its environment variable.
    pub fn api_key_from_env(&self) -> Result<String> {
        let config = self.config();
        std::env::var(config.env_var).map_err(|_| SlidecastError::MissingApiKey {
            env_var: config.env_var.to_string(),
        })
    }
}

/// Text-generation collaborator: takes a prompt, returns structured content
/// expected to parse as a presentation record.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

/// Summarizer backed by an OpenAI-compatible chat completion endpoint. The
/// credential is passed in explicitly at construction time; there is no
/// process-wide default client.
pub struct ChatCompletionSummarizer {
    provider: Provider,
    api_key: String,
    client: reqwest::Client,
}

impl ChatCompletionSummarizer {
    pub fn new(provider: Provider, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self {
            provider,
            api_key: api_key.into(),
            client,
        })
    }
}

#[async_trait]
impl Summarizer for ChatCompletionSummarizer {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        let config = self.provider.config();
        let response = self
            .client
            .post(config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": config.model,
                "messages": [
                    {
                        "role": "system",
                        "content": "You are an expert at creating professional presentations based on video content.",
                    },
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
                "temperature": 0.3,
                "response_format": {"type": "json_object"},
            }))
            .send()
            .await?
            .json::<serde_json::Value>()
            .await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| SlidecastError::SummaryFailed {
                reason: format!("unexpected API response: {response:?}"),
            })?;

        Ok(content.to_string())
    }
}

/// Parse target for summarizer output.
#[derive(Debug, Deserialize)]
pub struct SummarizedPresentation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// Prompt asking for a slide deck as JSON, built from the resolved title and
/// description.
pub fn build_summary_prompt(metadata: &VideoMetadata) -> String {
    format!(
        r#"Create a presentation based on the following YouTube video:

Title: {title}
Description: {description}

Format the presentation as a JSON object with the following structure:
{{
    "title": "Presentation title",
    "slides": [
        {{
            "title": "Slide title",
            "content": ["Bullet point 1", "Bullet point 2"],
            "image_description": "Description of an appropriate image for this slide"
        }}
    ]
}}

The presentation should have:
1. A title slide
2. An agenda/overview slide
3. 5-7 content slides covering the main points
4. A conclusion slide

Each slide should be concise with 2-5 bullet points. The image_description should be detailed enough that an AI image generator could create a relevant image."#,
        title = metadata.display_title(),
        description = metadata.description,
    )
}
