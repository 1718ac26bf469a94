//! Outbound prompts: what the user reads and which keyboard comes with it.
//!
//! Everything here is pure; the transport decides how an [`Affordance`] is
//! rendered.

use indoc::indoc;

use super::types::ConversationState;

/// Label of the single button that asks Telegram to share the user's contact.
pub const CONTACT_BUTTON_LABEL: &str = "Share My Phone Number";

pub const WELCOME_TEXT: &str = "Hello! I'm the submissions bot. I pass your messages on to our channels.";

pub const MENU_LOCKED_TEXT: &str = indoc! {"
    Choose an option:
    VERIFY - share your phone number to unlock media submission
    MEDIA - submit photos, videos and files (verification required)
    RESTART - start over"};

pub const MENU_UNLOCKED_TEXT: &str = indoc! {"
    You are verified. Choose an option:
    MEDIA - submit photos, videos and files
    VERIFY - share your phone number again
    RESTART - start over"};

pub const CONTACT_REQUEST_TEXT: &str = "Please share your phone number using the button below.";

pub const VERIFICATION_REQUIRED_TEXT: &str =
    "You need to verify your phone number before submitting media. Press VERIFY to continue.";

pub const MEDIA_PROMPT_TEXT: &str = indoc! {"
    Send the media you want to submit. Everything you send now is forwarded.
    Type RESTART to go back to the menu."};

pub const MEDIA_NOT_ALLOWED_TEXT: &str =
    "Media is not allowed until you are verified. Press VERIFY to share your phone number, then choose MEDIA.";

pub const SUBMISSION_RECEIVED_TEXT: &str = "Received, thank you! Send more or type RESTART to go back to the menu.";

/// Interactive element attached to a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// No keyboard; any keyboard left from a previous prompt is removed
    None,
    /// The fixed RESTART / MEDIA / VERIFY menu
    Menu,
    /// One button that shares the user's contact
    ContactRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub text: String,
    pub affordance: Affordance,
}

impl Prompt {
    pub fn new(text: impl Into<String>, affordance: Affordance) -> Self {
        Self {
            text: text.into(),
            affordance,
        }
    }
}

/// The prompt a user sitting in `state` should be looking at.
pub fn prompt_for(state: ConversationState, verified: bool) -> Prompt {
    match state {
        ConversationState::Menu => menu(verified),
        ConversationState::AwaitingMedia => Prompt::new(MEDIA_PROMPT_TEXT, Affordance::None),
    }
}

pub fn menu(verified: bool) -> Prompt {
    let text = if verified { MENU_UNLOCKED_TEXT } else { MENU_LOCKED_TEXT };
    Prompt::new(text, Affordance::Menu)
}

/// Sent on session start. Verification has just been cleared, so the menu is
/// always the locked one.
pub fn welcome() -> Prompt {
    Prompt::new(format!("{}\n\n{}", WELCOME_TEXT, MENU_LOCKED_TEXT), Affordance::Menu)
}

pub fn contact_request() -> Prompt {
    Prompt::new(CONTACT_REQUEST_TEXT, Affordance::ContactRequest)
}

pub fn verification_confirmed(display_name: &str, phone: &str) -> Prompt {
    Prompt::new(
        format!("Thank you, {}! Your number ({}) was received.", display_name, phone),
        Affordance::None,
    )
}

pub fn verification_required() -> Prompt {
    Prompt::new(VERIFICATION_REQUIRED_TEXT, Affordance::Menu)
}

pub fn media_not_allowed() -> Prompt {
    Prompt::new(MEDIA_NOT_ALLOWED_TEXT, Affordance::Menu)
}

pub fn submission_received() -> Prompt {
    Prompt::new(SUBMISSION_RECEIVED_TEXT, Affordance::None)
}
