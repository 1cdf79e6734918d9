// salama library - caring companion chat relay

pub mod cli;
pub mod config;
mod core;
mod error;
pub mod logging;
mod server;

pub use self::core::{
    Alert, CARE_RECIPIENT, CAREGIVER, ChatMessage, ChatRequest, DEFAULT_BASE_URL,
    DEFAULT_KEYWORDS, DEFAULT_MODEL, DEFAULT_TEMPLATE, FAILURE_MESSAGE, FunctionEvent,
    FunctionResponse, Gemini, GenerationOptions, Generator, HISTORY_WINDOW, METHOD_NOT_ALLOWED,
    Outcome, Persona, Relay, Sender, UserRole,
};
pub use error::Error;
pub use server::Server;
