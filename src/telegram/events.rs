//! Conversion of Bot API messages into conversation events

use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use crate::conversation::{
    ChatRef, CommandName, ContactShare, EventKind, InboundEvent, MediaKind, MenuButton, MessageRef, Payload, UserId,
};
use crate::telegram::bot::Command;

/// Builds the event for `msg`, or `None` for messages without a sender
/// (channel posts, anonymous admins).
pub fn inbound_event(msg: &Message, bot_username: &str) -> Option<InboundEvent> {
    let user = msg.from.as_ref()?;
    Some(InboundEvent {
        user: UserId(user.id.0),
        message: MessageRef {
            chat: ChatRef(msg.chat.id.0),
            message_id: msg.id.0,
        },
        kind: classify(msg, bot_username),
    })
}

pub fn classify(msg: &Message, bot_username: &str) -> EventKind {
    if let Some(contact) = msg.contact() {
        let phone = Some(contact.phone_number.trim()).filter(|p| !p.is_empty());
        return EventKind::Contact(ContactShare {
            phone: phone.map(str::to_string),
            display_name: contact.first_name.clone(),
            owner: contact.user_id.map(|id| UserId(id.0)),
        });
    }

    if let Some(text) = msg.text() {
        if let Ok(Command::Start) = Command::parse(text, bot_username) {
            return EventKind::Command(CommandName::Start);
        }
        return match MenuButton::from_label(text) {
            Some(button) => EventKind::TextButton(button),
            None => EventKind::MediaOrText(Payload::Text(text.to_string())),
        };
    }

    EventKind::MediaOrText(Payload::Media(media_kind(msg)))
}

fn media_kind(msg: &Message) -> MediaKind {
    if msg.photo().is_some() {
        MediaKind::Photo
    } else if msg.video().is_some() {
        MediaKind::Video
    } else if msg.animation().is_some() {
        MediaKind::Animation
    } else if msg.document().is_some() {
        MediaKind::Document
    } else if msg.audio().is_some() {
        MediaKind::Audio
    } else if msg.voice().is_some() {
        MediaKind::Voice
    } else if msg.sticker().is_some() {
        MediaKind::Sticker
    } else if msg.video_note().is_some() {
        MediaKind::VideoNote
    } else {
        MediaKind::Other
    }
}
