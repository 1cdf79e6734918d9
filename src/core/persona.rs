// persona prompt - who the companion is and how it should talk

use super::chat::{ChatMessage, ChatRequest, Sender, UserRole};
use crate::Error;
use std::path::Path;

/// How many history entries make it into the prompt.
pub const HISTORY_WINDOW: usize = 6;

pub const DEFAULT_NAME: &str = "Salama";
pub const CARE_RECIPIENT: &str = "care recipient who may need extra support and kindness";
pub const CAREGIVER: &str = "caregiver supporting someone in need";

// placeholders: {name} {user_name} {role} {history} {question}
pub const DEFAULT_TEMPLATE: &str = r#"You are {name}, a warm, caring AI companion for {user_name}, who is a {role}. 

Your role is to:
- Provide emotional support and companionship
- Answer questions clearly and patiently
- Help with safety concerns (scams, suspicious calls, unexpected visitors)
- Be encouraging and kind
- Alert caregivers when there are safety or health concerns
- Remember you're talking to someone who may be elderly, disabled, or vulnerable
- Keep responses concise but warm (2-4 sentences usually)

Always be patient, kind, and supportive. If the person seems distressed, in pain, or in danger, acknowledge their concern seriously and mention that their caregivers will be notified.

Previous conversation:
{history}

User's current message: {question}

Respond as {name}:"#;

#[derive(Debug, Clone)]
pub struct Persona {
    pub name: String,
    pub template: String,
    pub care_recipient: String,
    pub caregiver: String,
}

impl Default for Persona {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            care_recipient: CARE_RECIPIENT.to_string(),
            caregiver: CAREGIVER.to_string(),
        }
    }
}

impl Persona {
    /// Default persona with the template swapped for the contents of `path`.
    pub fn from_template_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let template = std::fs::read_to_string(path)?;
        Ok(Self {
            template,
            ..Self::default()
        })
    }

    pub fn describe(&self, role: UserRole) -> &str {
        match role {
            UserRole::CareRecipient => &self.care_recipient,
            UserRole::Caregiver => &self.caregiver,
        }
    }

    /// Last few history lines as `User: ...` / `<name>: ...`, newline
    /// terminated. Empty history renders as an empty string.
    pub fn render_history(&self, history: &[ChatMessage]) -> String {
        let start = history.len().saturating_sub(HISTORY_WINDOW);

        history[start..]
            .iter()
            .map(|msg| {
                let speaker = match msg.sender {
                    Sender::Me => "User",
                    Sender::Companion => self.name.as_str(),
                };
                format!("{speaker}: {}\n", msg.text)
            })
            .collect()
    }

    pub fn prompt(&self, req: &ChatRequest) -> String {
        let history = self.render_history(&req.conversation_history);

        fill(
            &self.template,
            &[
                ("name", self.name.as_str()),
                ("user_name", req.user_name.as_str()),
                ("role", self.describe(req.user_role)),
                ("history", history.as_str()),
                ("question", req.question.as_str()),
            ],
        )
    }
}

// single pass so braces inside user text are never re-expanded
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after
            .find('}')
            .and_then(|close| {
                let key = &after[..close];
                vars.iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, v)| (*v, close))
            });

        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                // not one of ours, keep it literally
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
