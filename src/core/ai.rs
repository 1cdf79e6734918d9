// gemini integration - sends the persona prompt, gets the companion's reply

use crate::Error;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 500,
        }
    }
}

/// Anything that can turn a prompt into a reply. The relay only talks to
/// this, so tests can swap in a canned generator.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, Error>;
}

pub struct Gemini {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

// what we send to gemini
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request<'a> {
    contents: Vec<Content<'a>>,
    generation_config: &'a GenerationOptions,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

// what gemini sends back, every level optional so a weird shape
// turns into InvalidResponse instead of a decode error
#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl Response {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

impl Gemini {
    /// A missing key is not an error here; every `generate` call fails
    /// instead, so the server can still come up.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl Generator for Gemini {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String, Error> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;

        let request = Request {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: options,
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "calling gemini");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error = response.text().await?;
            tracing::warn!(%status, "gemini returned an error status");
            return Err(Error::Gemini(error));
        }

        let response: Response = response.json().await?;
        response.into_text().ok_or(Error::InvalidResponse)
    }
}
