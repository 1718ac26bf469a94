//! Rendering of prompt affordances as Telegram reply keyboards

use teloxide::types::{ButtonRequest, KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};

use crate::conversation::presentation::CONTACT_BUTTON_LABEL;
use crate::conversation::{Affordance, MenuButton};

pub fn reply_markup(affordance: Affordance) -> ReplyMarkup {
    match affordance {
        Affordance::None => ReplyMarkup::KeyboardRemove(KeyboardRemove::new()),
        Affordance::Menu => ReplyMarkup::Keyboard(menu_keyboard()),
        Affordance::ContactRequest => ReplyMarkup::Keyboard(contact_keyboard()),
    }
}

/// One row: RESTART | MEDIA | VERIFY. Pressing a button sends its label as text.
pub fn menu_keyboard() -> KeyboardMarkup {
    let row = MenuButton::ALL
        .iter()
        .map(|button| KeyboardButton::new(button.as_ref()))
        .collect::<Vec<_>>();
    let mut markup = KeyboardMarkup::new(vec![row]);
    markup.resize_keyboard = true;
    markup
}

pub fn contact_keyboard() -> KeyboardMarkup {
    let button = KeyboardButton::new(CONTACT_BUTTON_LABEL).request(ButtonRequest::Contact);
    let mut markup = KeyboardMarkup::new(vec![vec![button]]);
    markup.resize_keyboard = true;
    markup.one_time_keyboard = true;
    markup
}
