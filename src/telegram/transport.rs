//! [`Transport`] over the Bot API

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{MessageId, Recipient};

use crate::conversation::{Affordance, ChatRef, DestinationId, MessageRef, Transport};
use crate::core::error::AppResult;
use crate::telegram::keyboard::reply_markup;

#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

pub fn recipient(destination: &DestinationId) -> Recipient {
    match destination {
        DestinationId::Chat(id) => Recipient::Id(ChatId(*id)),
        DestinationId::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_text(&self, chat: ChatRef, text: &str, affordance: Affordance) -> AppResult<()> {
        self.bot
            .send_message(ChatId(chat.0), text)
            .reply_markup(reply_markup(affordance))
            .await?;
        Ok(())
    }

    async fn forward_message(&self, source: MessageRef, destination: &DestinationId) -> AppResult<()> {
        self.bot
            .forward_message(recipient(destination), ChatId(source.chat.0), MessageId(source.message_id))
            .await?;
        Ok(())
    }
}
