//! Conversation state machine
//!
//! Every user is in one of two states. Inbound events are matched against
//! [`TRANSITIONS`], an ordered rule list where the first rule whose state
//! and guard both match wins.
//!
//! ```text
//! (any)          /start            -> StartSession      -> MENU
//! MENU           RESTART|MEDIA|VERIFY -> MenuChoice     -> MENU | AWAITING_MEDIA
//! MENU           contact           -> Verify            -> MENU
//! MENU           anything else     -> MenuFallback      -> MENU
//! AWAITING_MEDIA RESTART           -> StartSession      -> MENU
//! AWAITING_MEDIA anything else     -> AcceptSubmission  -> AWAITING_MEDIA
//! ```
//!
//! Verification is a latch: only a contact share sets it and only a session
//! start clears it.
//!
//! Events for one user are handled strictly one at a time in arrival order
//! (a per-user async mutex spans read, action and write). Different users run
//! in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use super::presentation::{self, Prompt};
use super::relay::{Relay, RelayReport};
use super::transport::Transport;
use super::types::{
    ChatRef, CommandName, ContactShare, ConversationState, DestinationId, EventKind, InboundEvent, MenuButton, UserId,
};
use crate::storage::SessionStore;

/// Which events a rule accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    StartCommand,
    /// One specific menu option
    Button(MenuButton),
    /// Any of the three menu options
    AnyMenuButton,
    Contact,
    Anything,
}

impl Guard {
    pub fn matches(self, kind: &EventKind) -> bool {
        match self {
            Guard::StartCommand => matches!(kind, EventKind::Command(CommandName::Start)),
            Guard::Button(button) => kind.button() == Some(button),
            Guard::AnyMenuButton => kind.button().is_some(),
            Guard::Contact => matches!(kind, EventKind::Contact(_)),
            Guard::Anything => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Clear verification, send the welcome menu
    StartSession,
    /// Relay the button text, then act on RESTART / MEDIA / VERIFY
    MenuChoice,
    /// Latch verification from a shared contact, re-show the menu
    Verify,
    /// Relay text; refuse anything else
    MenuFallback,
    /// Acknowledge and relay a submission
    AcceptSubmission,
}

impl Action {
    /// States this action can leave the user in.
    pub fn next_states(self) -> &'static [ConversationState] {
        match self {
            Action::StartSession | Action::Verify | Action::MenuFallback => &[ConversationState::Menu],
            Action::MenuChoice => &[ConversationState::Menu, ConversationState::AwaitingMedia],
            Action::AcceptSubmission => &[ConversationState::AwaitingMedia],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// `None` applies in every state
    pub state: Option<ConversationState>,
    pub guard: Guard,
    pub action: Action,
}

impl Rule {
    pub fn applies(&self, state: ConversationState, kind: &EventKind) -> bool {
        self.state.map_or(true, |s| s == state) && self.guard.matches(kind)
    }
}

/// Entry rule; also used for users without a session.
pub const SESSION_START: Rule = Rule {
    state: None,
    guard: Guard::StartCommand,
    action: Action::StartSession,
};

pub const TRANSITIONS: &[Rule] = &[
    SESSION_START,
    Rule {
        state: Some(ConversationState::Menu),
        guard: Guard::AnyMenuButton,
        action: Action::MenuChoice,
    },
    Rule {
        state: Some(ConversationState::Menu),
        guard: Guard::Contact,
        action: Action::Verify,
    },
    Rule {
        state: Some(ConversationState::Menu),
        guard: Guard::Anything,
        action: Action::MenuFallback,
    },
    Rule {
        state: Some(ConversationState::AwaitingMedia),
        guard: Guard::Button(MenuButton::Restart),
        action: Action::StartSession,
    },
    Rule {
        state: Some(ConversationState::AwaitingMedia),
        guard: Guard::Anything,
        action: Action::AcceptSubmission,
    },
];

/// First rule in `rules` that applies, if any.
pub fn match_rule<'a>(rules: &'a [Rule], state: ConversationState, kind: &EventKind) -> Option<&'a Rule> {
    rules.iter().find(|rule| rule.applies(state, kind))
}

/// What handling one event did.
#[derive(Debug)]
pub struct HandleOutcome {
    /// State before the event; `None` if the user had no session
    pub previous: Option<ConversationState>,
    pub state: ConversationState,
    /// `None` when no rule matched
    pub action: Option<Action>,
    /// Present when the event was relayed
    pub relay: Option<RelayReport>,
}

/// Routes inbound events through a rule table, [`TRANSITIONS`] by default.
pub struct Conversation {
    store: Arc<dyn SessionStore>,
    transport: Arc<dyn Transport>,
    relay: Relay,
    rules: &'static [Rule],
    user_locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl Conversation {
    pub fn new(store: Arc<dyn SessionStore>, transport: Arc<dyn Transport>, destinations: Vec<DestinationId>) -> Self {
        Self::with_rules(store, transport, destinations, TRANSITIONS)
    }

    /// Same as [`Conversation::new`] with a custom rule table. Users without a
    /// session still go through [`SESSION_START`].
    pub fn with_rules(
        store: Arc<dyn SessionStore>,
        transport: Arc<dyn Transport>,
        destinations: Vec<DestinationId>,
        rules: &'static [Rule],
    ) -> Self {
        let relay = Relay::new(Arc::clone(&transport), destinations);
        Self {
            store,
            transport,
            relay,
            rules,
            user_locks: DashMap::new(),
        }
    }

    pub fn destinations(&self) -> &[DestinationId] {
        self.relay.destinations()
    }

    /// Handle one event to completion. Never fails; transport errors are
    /// logged and the transition is still recorded.
    pub async fn handle(&self, event: InboundEvent) -> HandleOutcome {
        let lock = self.user_locks.entry(event.user).or_default().value().clone();
        let _guard = lock.lock().await;

        let previous = self.store.state(event.user);
        let rule = match previous {
            Some(state) => match_rule(self.rules, state, &event.kind),
            None => {
                log::info!("No session for user {}, starting one", event.user);
                Some(&SESSION_START)
            }
        };

        let Some(rule) = rule else {
            let state = previous.unwrap_or_default();
            log::warn!(
                "Unhandled {} from user {} in state {}; ignoring",
                event.kind.label(),
                event.user,
                state
            );
            return HandleOutcome {
                previous,
                state,
                action: None,
                relay: None,
            };
        };

        let (state, relay) = self.run(rule.action, &event).await;
        self.store.set_state(event.user, state);

        log::debug!(
            "User {}: {} in {} -> {:?} -> {}",
            event.user,
            event.kind.label(),
            previous.map_or_else(|| "no session".to_string(), |s| s.to_string()),
            rule.action,
            state
        );

        HandleOutcome {
            previous,
            state,
            action: Some(rule.action),
            relay,
        }
    }

    async fn run(&self, action: Action, event: &InboundEvent) -> (ConversationState, Option<RelayReport>) {
        match action {
            Action::StartSession => (self.start_session(event).await, None),
            Action::MenuChoice => {
                let report = self.relay.relay(event.message).await;
                let state = match event.kind.button() {
                    Some(MenuButton::Restart) => self.start_session(event).await,
                    Some(MenuButton::Verify) => {
                        self.send(event.chat(), &presentation::contact_request()).await;
                        ConversationState::Menu
                    }
                    Some(MenuButton::Media) => self.choose_media(event).await,
                    None => ConversationState::Menu,
                };
                (state, Some(report))
            }
            Action::Verify => {
                if let EventKind::Contact(contact) = &event.kind {
                    self.verify(event, contact).await;
                }
                (ConversationState::Menu, None)
            }
            Action::MenuFallback => {
                if event.kind.is_text() {
                    (ConversationState::Menu, Some(self.relay.relay(event.message).await))
                } else {
                    self.send(event.chat(), &presentation::media_not_allowed()).await;
                    (ConversationState::Menu, None)
                }
            }
            Action::AcceptSubmission => {
                self.send(event.chat(), &presentation::submission_received()).await;
                let report = self.relay.relay(event.message).await;
                (ConversationState::AwaitingMedia, Some(report))
            }
        }
    }

    async fn start_session(&self, event: &InboundEvent) -> ConversationState {
        self.store.set_verified(event.user, false);
        self.send(event.chat(), &presentation::welcome()).await;
        ConversationState::Menu
    }

    async fn choose_media(&self, event: &InboundEvent) -> ConversationState {
        if self.store.is_verified(event.user) {
            self.send(event.chat(), &presentation::prompt_for(ConversationState::AwaitingMedia, true))
                .await;
            ConversationState::AwaitingMedia
        } else {
            log::info!("User {} chose MEDIA without verification", event.user);
            self.send(event.chat(), &presentation::verification_required()).await;
            ConversationState::Menu
        }
    }

    /// A contact without a phone number does not verify; the user just gets
    /// the menu again.
    async fn verify(&self, event: &InboundEvent, contact: &ContactShare) {
        match contact.phone.as_deref() {
            Some(phone) => {
                log::info!(
                    "Received contact from {} (ID: {}). Phone: {}",
                    contact.display_name,
                    event.user,
                    phone
                );
                if contact.owner != Some(event.user) {
                    log::warn!(
                        "User {} shared a contact belonging to {:?}",
                        event.user,
                        contact.owner.map(|u| u.0)
                    );
                }
                self.store.set_verified(event.user, true);
                self.send(
                    event.chat(),
                    &presentation::verification_confirmed(&contact.display_name, phone),
                )
                .await;
            }
            None => {
                log::warn!("Contact from user {} has no phone number; not verified", event.user);
            }
        }

        let verified = self.store.is_verified(event.user);
        self.send(event.chat(), &presentation::prompt_for(ConversationState::Menu, verified))
            .await;
    }

    async fn send(&self, chat: ChatRef, prompt: &Prompt) {
        if let Err(e) = self.transport.send_prompt(chat, prompt).await {
            log::warn!("Failed to send prompt to chat {}: {}", chat, e);
        }
    }
}
