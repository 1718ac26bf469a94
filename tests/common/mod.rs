//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

use relaybot::conversation::{
    ChatRef, CommandName, ContactShare, Conversation, DestinationId, EventKind, InboundEvent, MediaKind, MenuButton,
    MessageRef, Payload, UserId,
};
use relaybot::storage::MemorySessionStore;

use crate::mocks::RecordingTransport;

static NEXT_MESSAGE_ID: AtomicI32 = AtomicI32::new(1);

/// Four destinations, mixing numeric ids and usernames.
pub fn destinations() -> Vec<DestinationId> {
    vec![
        DestinationId::Chat(-1001000000001),
        DestinationId::Chat(-1001000000002),
        DestinationId::Username("@relay_submissions".to_string()),
        DestinationId::Username("@relay_archive".to_string()),
    ]
}

/// Conversation core wired to an in-memory store and a recording transport.
pub struct Harness {
    pub conversation: Arc<Conversation>,
    pub store: Arc<MemorySessionStore>,
    pub transport: Arc<RecordingTransport>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_transport(RecordingTransport::new())
    }

    pub fn with_transport(transport: Arc<RecordingTransport>) -> Self {
        let store = Arc::new(MemorySessionStore::new());
        let conversation = Arc::new(Conversation::new(store.clone(), transport.clone(), destinations()));
        Self {
            conversation,
            store,
            transport,
        }
    }
}

/// Private chats share the user's id.
pub fn chat_of(user: UserId) -> ChatRef {
    ChatRef(user.0 as i64)
}

pub fn event(user: UserId, kind: EventKind) -> InboundEvent {
    InboundEvent {
        user,
        message: MessageRef {
            chat: chat_of(user),
            message_id: NEXT_MESSAGE_ID.fetch_add(1, Ordering::Relaxed),
        },
        kind,
    }
}

pub fn start(user: UserId) -> InboundEvent {
    event(user, EventKind::Command(CommandName::Start))
}

pub fn button(user: UserId, button: MenuButton) -> InboundEvent {
    event(user, EventKind::TextButton(button))
}

pub fn text(user: UserId, text: &str) -> InboundEvent {
    event(user, EventKind::MediaOrText(Payload::Text(text.to_string())))
}

pub fn photo(user: UserId) -> InboundEvent {
    event(user, EventKind::MediaOrText(Payload::Media(MediaKind::Photo)))
}

pub fn contact(user: UserId) -> InboundEvent {
    event(
        user,
        EventKind::Contact(ContactShare {
            phone: Some("+15550100".to_string()),
            display_name: "Ada".to_string(),
            owner: Some(user),
        }),
    )
}

pub fn contact_without_phone(user: UserId) -> InboundEvent {
    event(
        user,
        EventKind::Contact(ContactShare {
            phone: None,
            display_name: "Ada".to_string(),
            owner: Some(user),
        }),
    )
}
