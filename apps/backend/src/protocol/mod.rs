//! Wire protocol for the chat-bot relay: incoming commands and outgoing
//! messages with action buttons.

pub mod command;
pub mod messages;

pub use command::Command;
pub use messages::{Button, IncomingMessage, OutgoingMessage, Reply};
