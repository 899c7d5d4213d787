//! Message DTOs exchanged with the chat relay.

use serde::{Deserialize, Serialize};

use crate::domain::player_view::PlayerView;

/// One inbound chat event. The command text arrives either as free text or
/// as the action payload of a pressed button.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomingMessage {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl IncomingMessage {
    /// The effective command string: `text` wins over `action`.
    pub fn command_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .or(self.action.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub action: String,
}

/// One outbound chat message addressed to a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub user_id: String,
    pub text: String,
    pub buttons: Vec<Button>,
}

impl From<PlayerView> for OutgoingMessage {
    fn from(view: PlayerView) -> Self {
        Self {
            user_id: view.user_id,
            text: view.text,
            buttons: view
                .actions
                .into_iter()
                .map(|a| Button {
                    text: a.label,
                    action: a.command,
                })
                .collect(),
        }
    }
}

/// Command response: either one message for the caller or a fan-out batch,
/// one message per affected player. Tagged so the relay can match on the
/// shape exhaustively instead of sniffing the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    One { message: OutgoingMessage },
    Many { messages: Vec<OutgoingMessage> },
}

impl Reply {
    pub fn one(message: OutgoingMessage) -> Self {
        Self::One { message }
    }

    pub fn many(messages: impl IntoIterator<Item = OutgoingMessage>) -> Self {
        Self::Many {
            messages: messages.into_iter().collect(),
        }
    }
}
