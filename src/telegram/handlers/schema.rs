//! Dispatcher schema

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::events::inbound_event;

/// Creates the dispatcher schema for the bot.
///
/// Every message goes to the conversation core; there is nothing else to
/// route. The same schema is used in production and in tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry().branch(message_handler(deps))
}

fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |msg: Message| {
        let deps = deps.clone();
        async move {
            let Some(event) = inbound_event(&msg, deps.bot_username.as_deref().unwrap_or_default()) else {
                log::debug!("Ignoring message {} in chat {} without a sender", msg.id.0, msg.chat.id.0);
                return Ok(());
            };
            deps.conversation.handle(event).await;
            Ok::<(), HandlerError>(())
        }
    })
}
