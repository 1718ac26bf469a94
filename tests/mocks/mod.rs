//! Mock implementations for driving the conversation core without Telegram

pub mod recording_transport;

pub use recording_transport::{ForwardAttempt, RecordingTransport, SentPrompt};
