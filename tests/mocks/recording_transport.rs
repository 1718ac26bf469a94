//! Recording transport for driving the conversation core in tests
//!
//! Captures every prompt sent and every forward attempted. Forwards to the
//! destinations listed in `failing` return an error; `send_delay` slows down
//! sends so interleavings between users become likely.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use relaybot::conversation::{Affordance, ChatRef, DestinationId, MessageRef, Transport};
use relaybot::{AppError, AppResult};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentPrompt {
    pub chat: ChatRef,
    pub text: String,
    pub affordance: Affordance,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardAttempt {
    pub source: MessageRef,
    pub destination: DestinationId,
    pub delivered: bool,
}

#[derive(Default)]
pub struct RecordingTransport {
    failing: Vec<DestinationId>,
    fail_sends: bool,
    send_delay: Option<Duration>,
    sent: Mutex<Vec<SentPrompt>>,
    forwarded: Mutex<Vec<ForwardAttempt>>,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_on(destinations: Vec<DestinationId>) -> Arc<Self> {
        Arc::new(Self {
            failing: destinations,
            ..Default::default()
        })
    }

    pub fn failing_sends() -> Arc<Self> {
        Arc::new(Self {
            fail_sends: true,
            ..Default::default()
        })
    }

    pub fn with_send_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            send_delay: Some(delay),
            ..Default::default()
        })
    }

    pub async fn sent(&self) -> Vec<SentPrompt> {
        self.sent.lock().await.clone()
    }

    pub async fn sent_to(&self, chat: ChatRef) -> Vec<SentPrompt> {
        self.sent.lock().await.iter().filter(|p| p.chat == chat).cloned().collect()
    }

    pub async fn forwarded(&self) -> Vec<ForwardAttempt> {
        self.forwarded.lock().await.clone()
    }

    pub async fn clear(&self) {
        self.sent.lock().await.clear();
        self.forwarded.lock().await.clear();
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, chat: ChatRef, text: &str, affordance: Affordance) -> AppResult<()> {
        if let Some(delay) = self.send_delay {
            sleep(delay).await;
        }
        self.sent.lock().await.push(SentPrompt {
            chat,
            text: text.to_string(),
            affordance,
        });
        if self.fail_sends {
            return Err(AppError::Transport("Forbidden: bot was blocked by the user".to_string()));
        }
        Ok(())
    }

    async fn forward_message(&self, source: MessageRef, destination: &DestinationId) -> AppResult<()> {
        let delivered = !self.failing.contains(destination);
        self.forwarded.lock().await.push(ForwardAttempt {
            source,
            destination: destination.clone(),
            delivered,
        });
        if delivered {
            Ok(())
        } else {
            Err(AppError::Transport(format!("Bad Request: chat not found ({})", destination)))
        }
    }
}
