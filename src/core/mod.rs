// core logic - chat types, persona prompt, gemini, alerts, and the relay

mod ai;
mod alert;
mod chat;
mod persona;
mod relay;

pub use ai::{DEFAULT_BASE_URL, DEFAULT_MODEL, Gemini, GenerationOptions, Generator};
pub use alert::{Alert, DEFAULT_KEYWORDS};
pub use chat::{ChatMessage, ChatRequest, Sender, UserRole};
pub use persona::{CARE_RECIPIENT, CAREGIVER, DEFAULT_TEMPLATE, HISTORY_WINDOW, Persona};
pub use relay::{
    FAILURE_MESSAGE, FunctionEvent, FunctionResponse, METHOD_NOT_ALLOWED, Outcome, Relay,
};
