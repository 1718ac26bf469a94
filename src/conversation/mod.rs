//! Conversation core: state machine, prompts and forwarding relay
//!
//! Nothing in here knows about teloxide; the Telegram adapter feeds
//! [`InboundEvent`]s in and implements [`Transport`].

pub mod machine;
pub mod presentation;
pub mod relay;
pub mod transport;
pub mod types;

pub use machine::{Action, Conversation, HandleOutcome, Rule, TRANSITIONS};
pub use presentation::{Affordance, Prompt};
pub use relay::{relay, DeliveryOutcome, Relay, RelayReport};
pub use transport::Transport;
pub use types::{
    ChatRef, CommandName, ContactShare, ConversationState, DestinationId, EventKind, InboundEvent, MediaKind,
    MenuButton, MessageRef, Payload, UserId,
};
