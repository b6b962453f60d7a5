//! Dispatcher schema and handler chain builders
//!
//! The same handler tree serves production and the integration tests; the
//! tests feed it mock updates and an in-memory store.

use std::sync::Arc;

use teloxide::dispatching::dialogue::{self, InMemStorage};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::bot::Command;
use super::keyboards;
use crate::directory::Directory;
use crate::flow::{self, Event, Reply, State, Step};
use crate::storage::UserStore;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dialogue handle tracking the conversation state per chat.
pub type FlowDialogue = Dialogue<State, InMemStorage<State>>;

/// Dependencies shared by every handler
#[derive(Clone)]
pub struct HandlerDeps {
    pub store: Arc<dyn UserStore>,
    pub directory: Arc<Directory>,
}

impl HandlerDeps {
    pub fn new(store: Arc<dyn UserStore>, directory: Arc<Directory>) -> Self {
        Self { store, directory }
    }
}

/// Creates the dispatcher schema for the bot
///
/// Commands are handled from any state; plain messages and callbacks are
/// interpreted by the current conversation state.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();

    dialogue::enter::<Update, InMemStorage<State>, State, _>()
        .branch(command_handler(deps_commands))
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, dialogue: FlowDialogue, state: State, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command {:?} from chat {}", cmd, msg.chat.id);
                let event = match cmd {
                    Command::Start => Event::Start,
                    Command::Cancel => Event::Cancel,
                    Command::Restart => Event::Reset,
                };
                let step = run_transition(&deps, msg.chat.id, state, event)?;
                send_replies(&bot, msg.chat.id, &step).await?;
                apply_state(&dialogue, step.next).await
            }
        },
    ))
}

fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().filter_map(|msg: Message| message_event(&msg)).endpoint(
        move |bot: Bot, dialogue: FlowDialogue, state: State, msg: Message, event: Event| {
            let deps = deps.clone();
            async move {
                let step = run_transition(&deps, msg.chat.id, state, event)?;
                send_replies(&bot, msg.chat.id, &step).await?;
                apply_state(&dialogue, step.next).await
            }
        },
    )
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(
        move |bot: Bot, dialogue: FlowDialogue, state: State, q: CallbackQuery| {
            let deps = deps.clone();
            async move {
                // Stop the button spinner regardless of what the token does.
                bot.answer_callback_query(q.id.clone()).await?;

                let (Some(token), Some(message)) = (q.data, q.message) else {
                    return Ok(());
                };
                let chat_id = message.chat().id;
                let step = run_transition(&deps, chat_id, state, Event::Button(token))?;

                // A successful teacher pick replaces the keyboard message with
                // the info card. Every other reply goes out as a fresh message;
                // reply keyboards cannot ride on an edit.
                if let (State::Info, Some(reply)) = (&step.next, step.replies.first()) {
                    bot.edit_message_text(chat_id, message.id(), reply.text.clone()).await?;
                } else {
                    send_replies(&bot, chat_id, &step).await?;
                }
                apply_state(&dialogue, step.next).await
            }
        },
    )
}

/// Maps an incoming message to a flow event.
///
/// Commands and non-text payloads (stickers, photos) are not conversation
/// input and fall through unanswered.
fn message_event(msg: &Message) -> Option<Event> {
    if let Some(contact) = msg.contact() {
        return Some(Event::Contact(contact.phone_number.clone()));
    }
    match msg.text() {
        Some(text) if !text.starts_with('/') => Some(Event::Text(text.to_owned())),
        _ => None,
    }
}

fn run_transition(
    deps: &HandlerDeps,
    chat_id: ChatId,
    state: State,
    event: Event,
) -> Result<Step, HandlerError> {
    // Private chats only, so the chat id doubles as the user id.
    let user_id = chat_id.0.to_string();
    let step = flow::transition(deps.store.as_ref(), &deps.directory, &user_id, state, event)?;
    Ok(step)
}

async fn send_replies(bot: &Bot, chat_id: ChatId, step: &Step) -> Result<(), HandlerError> {
    for reply in &step.replies {
        send_reply(bot, chat_id, reply).await?;
    }
    Ok(())
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<(), HandlerError> {
    let mut request = bot.send_message(chat_id, reply.text.clone());
    if let Some(keyboard) = &reply.keyboard {
        request = request.reply_markup(keyboards::render(keyboard));
    }
    request.await?;
    Ok(())
}

async fn apply_state(dialogue: &FlowDialogue, next: State) -> Result<(), HandlerError> {
    match next {
        State::Idle => {
            // exit() errors when no dialogue was stored yet
            if dialogue.get().await?.is_some() {
                dialogue.exit().await?;
            }
        }
        state => dialogue.update(state).await?,
    }
    Ok(())
}
