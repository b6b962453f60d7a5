//! Renders flow keyboards into Telegram reply markup.

use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
    ReplyMarkup,
};

use crate::flow::{texts, Keyboard};

/// Converts a flow keyboard into the matching Telegram markup.
///
/// Reply keyboards are resized and one-time, since every prompt in the flow
/// is answered exactly once. Inline choice keyboards use the displayed label
/// as the callback token and get a dedicated back row.
pub fn render(keyboard: &Keyboard) -> ReplyMarkup {
    match keyboard {
        Keyboard::Options(rows) => {
            let rows = rows
                .iter()
                .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())));
            ReplyMarkup::Keyboard(KeyboardMarkup::new(rows).resize_keyboard().one_time_keyboard())
        }
        Keyboard::ContactRequest(label) => {
            let button = KeyboardButton::new(label.clone()).request(ButtonRequest::Contact);
            ReplyMarkup::Keyboard(KeyboardMarkup::new([[button]]).resize_keyboard().one_time_keyboard())
        }
        Keyboard::Choices(labels) => {
            let mut rows: Vec<Vec<InlineKeyboardButton>> = labels
                .iter()
                .map(|label| vec![InlineKeyboardButton::callback(label.clone(), label.clone())])
                .collect();
            rows.push(vec![InlineKeyboardButton::callback(
                texts::BACK_LABEL,
                texts::BACK_TO_DIRECTION,
            )]);
            ReplyMarkup::InlineKeyboard(InlineKeyboardMarkup::new(rows))
        }
    }
}
