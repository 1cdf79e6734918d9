// the relay - request in, persona prompt out to gemini, reply + alert back

use super::ai::{GenerationOptions, Generator};
use super::alert::Alert;
use super::chat::ChatRequest;
use super::persona::Persona;
use crate::Error;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

pub const FAILURE_MESSAGE: &str = "Failed to get AI response";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

pub struct Relay {
    generator: Box<dyn Generator>,
    persona: Persona,
    alert: Alert,
    options: GenerationOptions,
}

/// What a single invocation ends up as.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Answered { response: String, should_alert: bool },
    MethodNotAllowed,
    Failed,
}

impl Outcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Answered { .. } => StatusCode::OK,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Value {
        match self {
            Self::Answered {
                response,
                should_alert,
            } => json!({ "response": response, "shouldAlert": should_alert }),
            Self::MethodNotAllowed => json!({ "error": METHOD_NOT_ALLOWED }),
            Self::Failed => json!({ "error": FAILURE_MESSAGE, "fallback": true }),
        }
    }
}

// serverless platform event, only the bits we look at
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl From<Outcome> for FunctionResponse {
    fn from(outcome: Outcome) -> Self {
        let headers = BTreeMap::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )]);

        Self {
            status_code: outcome.status().as_u16(),
            headers,
            body: outcome.body().to_string(),
        }
    }
}

impl Relay {
    pub fn new(generator: impl Generator + 'static) -> Self {
        Self {
            generator: Box::new(generator),
            persona: Persona::default(),
            alert: Alert::default(),
            options: GenerationOptions::default(),
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = alert;
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    /// Handle one raw invocation. Errors never leave here: they are logged
    /// and collapsed into `Outcome::Failed`.
    pub async fn handle(&self, method: &str, body: &[u8]) -> Outcome {
        if method != "POST" {
            tracing::debug!(method, "rejecting non-POST request");
            return Outcome::MethodNotAllowed;
        }

        let result = match serde_json::from_slice::<ChatRequest>(body) {
            Ok(req) => self.ask(&req).await,
            Err(e) => Err(e.into()),
        };

        match result {
            Ok((response, should_alert)) => Outcome::Answered {
                response,
                should_alert,
            },
            Err(e) => {
                tracing::error!(error = %e, "chat relay failed");
                Outcome::Failed
            }
        }
    }

    /// Prompt, generate, classify. Returns the reply and the alert flag.
    pub async fn ask(&self, req: &ChatRequest) -> Result<(String, bool), Error> {
        let prompt = self.persona.prompt(req);
        let response = self.generator.generate(&prompt, &self.options).await?;

        let keyword = self.alert.matched(&req.question);
        if let Some(keyword) = keyword {
            tracing::info!(keyword, "caregiver alert raised");
        }

        Ok((response, keyword.is_some()))
    }

    /// Same as `handle`, shaped like a serverless function call.
    pub async fn invoke(&self, event: FunctionEvent) -> FunctionResponse {
        let body = event.body.unwrap_or_default();
        self.handle(&event.http_method, body.as_bytes()).await.into()
    }
}
