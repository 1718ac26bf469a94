//! Domain types shared by the state machine, the stores and the transport.
//!
//! None of these depend on teloxide; the adapter in `crate::telegram`
//! converts Bot API objects into them.

use std::fmt;
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString};

use crate::core::error::AppError;

/// Stable identifier of a chat participant. Key for all per-user state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chat an event came from and where replies go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatRef(pub i64);

impl fmt::Display for ChatRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the originating message, needed to forward it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat: ChatRef,
    pub message_id: i32,
}

impl fmt::Display for MessageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.chat, self.message_id)
    }
}

/// A relay destination channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DestinationId {
    /// Numeric chat id (`-100…` for channels and supergroups)
    Chat(i64),
    /// Public channel username, including the leading `@`
    Username(String),
}

impl FromStr for DestinationId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(name) = s.strip_prefix('@') {
            let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            return if valid {
                Ok(Self::Username(s.to_string()))
            } else {
                Err(AppError::InvalidDestination(s.to_string()))
            };
        }
        s.parse::<i64>()
            .map(Self::Chat)
            .map_err(|_| AppError::InvalidDestination(s.to_string()))
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat(id) => write!(f, "{}", id),
            Self::Username(name) => f.write_str(name),
        }
    }
}

/// Parse the compiled-in destination list, failing on the first bad entry.
pub fn parse_destinations(raw: &[&str]) -> Result<Vec<DestinationId>, AppError> {
    raw.iter().map(|s| s.parse()).collect()
}

/// Per-user conversation state. A user with no recorded state has not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationState {
    #[default]
    Menu,
    AwaitingMedia,
}

/// The three fixed menu options. Labels are matched exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum MenuButton {
    Restart,
    Media,
    Verify,
}

impl MenuButton {
    /// Keyboard order.
    pub const ALL: [MenuButton; 3] = [MenuButton::Restart, MenuButton::Media, MenuButton::Verify];

    /// Exact label match; anything else is ordinary text.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum CommandName {
    Start,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum MediaKind {
    Photo,
    Video,
    Document,
    Audio,
    Voice,
    Animation,
    Sticker,
    VideoNote,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Media(MediaKind),
}

/// A shared contact card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactShare {
    /// `None` when the card carried no phone number
    pub phone: Option<String>,
    pub display_name: String,
    /// Telegram account the card belongs to, if it is one
    pub owner: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Command(CommandName),
    TextButton(MenuButton),
    Contact(ContactShare),
    MediaOrText(Payload),
}

impl EventKind {
    /// The menu option this event selects, whether it was classified as a
    /// button press or arrived as plain text carrying the label.
    pub fn button(&self) -> Option<MenuButton> {
        match self {
            Self::TextButton(button) => Some(*button),
            Self::MediaOrText(Payload::Text(text)) => MenuButton::from_label(text),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::TextButton(_) | Self::MediaOrText(Payload::Text(_)))
    }

    /// Short name for log lines.
    pub fn label(&self) -> String {
        match self {
            Self::Command(name) => format!("command /{}", name),
            Self::TextButton(button) => format!("button {}", button),
            Self::Contact(_) => "contact".to_string(),
            Self::MediaOrText(Payload::Text(_)) => "text".to_string(),
            Self::MediaOrText(Payload::Media(kind)) => format!("media ({})", kind),
        }
    }
}

/// One inbound event, always tied to a single user and originating message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundEvent {
    pub user: UserId,
    pub message: MessageRef,
    pub kind: EventKind,
}

impl InboundEvent {
    /// Chat replies go to.
    pub fn chat(&self) -> ChatRef {
        self.message.chat
    }
}
