// chat request types - what the front-end posts to us

use serde::{Deserialize, Serialize};

/// Who wrote a history entry. The front-end marks the user's own
/// messages as `"me"`; everything else came from the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sender {
    Me,
    #[default]
    Companion,
}

impl From<String> for Sender {
    fn from(s: String) -> Self {
        if s == "me" { Self::Me } else { Self::Companion }
    }
}

impl From<Sender> for String {
    fn from(s: Sender) -> Self {
        match s {
            Sender::Me => "me".to_string(),
            Sender::Companion => "salama".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "sender_or_companion")]
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn me(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Me,
            text: text.into(),
        }
    }

    pub fn companion(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Companion,
            text: text.into(),
        }
    }
}

/// Anything that isn't `care_recipient` is treated as a caregiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    CareRecipient,
    #[default]
    Caregiver,
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        if s == "care_recipient" {
            Self::CareRecipient
        } else {
            Self::Caregiver
        }
    }
}

impl From<UserRole> for String {
    fn from(r: UserRole) -> Self {
        match r {
            UserRole::CareRecipient => "care_recipient".to_string(),
            UserRole::Caregiver => "caregiver".to_string(),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conversation_history: Vec<ChatMessage>,
    pub user_name: String,
    #[serde(default, deserialize_with = "null_as_caregiver")]
    pub user_role: UserRole,
}

// the front-end sometimes sends `null` instead of leaving the field out
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ChatMessage>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<ChatMessage>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_caregiver<'de, D>(deserializer: D) -> Result<UserRole, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(UserRole::from)
        .unwrap_or_default())
}

// missing, null or non-string senders are the companion's lines
fn sender_or_companion<'de, D>(deserializer: D) -> Result<Sender, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Sender::from(s),
        _ => Sender::Companion,
    })
}
