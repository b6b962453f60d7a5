//! The registration conversation as a pure state machine.
//!
//! [`transition`] maps the current state and an incoming event to the next
//! state plus the replies to send, mutating the injected user store along
//! the way. Nothing here touches Telegram types, so the whole table is
//! testable without a transport.

pub mod texts;

use crate::core::AppResult;
use crate::directory::{ClassType, Direction, Directory, TeacherProfile};
use crate::storage::{UserRecord, UserStore};

/// One stage of the linear registration conversation.
///
/// `Teacher` carries the candidate names that were offered on the inline
/// keyboard; only those tokens are accepted back.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum State {
    /// No active conversation.
    #[default]
    Idle,
    Name,
    Phone,
    ClassType,
    Direction,
    Teacher { candidates: Vec<String> },
    /// Info card shown; any further text ends the conversation.
    Info,
}

/// An input event, already stripped of transport details.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// /start: begin registration, or greet a registered user.
    Start,
    /// /cancel: end the conversation, keep whatever was saved.
    Cancel,
    /// /restart: wipe the record and start over.
    Reset,
    /// Plain message text.
    Text(String),
    /// A shared contact's phone number.
    Contact(String),
    /// An inline-button callback token.
    Button(String),
}

/// Keyboard to attach to a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyboard {
    /// Quick-reply keyboard with fixed option rows.
    Options(Vec<Vec<String>>),
    /// Single button asking the user to share their contact.
    ContactRequest(String),
    /// Inline buttons whose callback token equals the label, plus a back row.
    Choices(Vec<String>),
}

/// A message for the transport layer to deliver.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// Outcome of one transition: where to go and what to say.
#[derive(Debug, PartialEq)]
pub struct Step {
    pub next: State,
    pub replies: Vec<Reply>,
}

impl Step {
    fn reply(next: State, reply: Reply) -> Self {
        Self {
            next,
            replies: vec![reply],
        }
    }

    /// Ignore the event: keep the state, send nothing.
    fn silent(state: State) -> Self {
        Self {
            next: state,
            replies: Vec::new(),
        }
    }
}

/// Advances the conversation by one event.
///
/// Commands work from every state. Everything else is interpreted by the
/// current state; events a state does not expect are ignored. Store failures
/// propagate; invalid picks re-prompt in place without saving anything.
pub fn transition(
    store: &dyn UserStore,
    directory: &Directory,
    user_id: &str,
    state: State,
    event: Event,
) -> AppResult<Step> {
    match (state, event) {
        (_, Event::Start) => enter(store, user_id),
        (_, Event::Cancel) => Ok(cancel(user_id)),
        (_, Event::Reset) => reset(store, user_id),

        (State::Name, Event::Text(name)) => set_name(store, user_id, name),
        (State::Phone, Event::Text(phone)) | (State::Phone, Event::Contact(phone)) => {
            set_phone(store, user_id, phone)
        }
        (State::ClassType, Event::Text(text)) => choose_class_type(store, user_id, text),
        (State::Direction, Event::Text(text)) => choose_direction(store, directory, user_id, text),
        (State::Teacher { candidates }, Event::Button(token)) => {
            choose_teacher(store, directory, user_id, candidates, token)
        }
        // Typed text while the inline keyboard waits is an out-of-set pick.
        (state @ State::Teacher { .. }, Event::Text(_)) => {
            Ok(Step::reply(state, Reply::plain(texts::TEACHER_REJECT)))
        }
        (State::Info, Event::Text(_)) => Ok(cancel(user_id)),
        // Anything else is not conversation input; stay put, say nothing.
        (state, _) => Ok(Step::silent(state)),
    }
}

/// /start: greet registered users, otherwise begin with the name prompt.
fn enter(store: &dyn UserStore, user_id: &str) -> AppResult<Step> {
    if let Some(record) = store.get(user_id)? {
        if record.is_registered() {
            let name = record.name.unwrap_or_default();
            return Ok(Step::reply(State::Idle, Reply::plain(texts::greeting(&name))));
        }
    }
    log::info!("User {user_id} started registration");
    Ok(Step::reply(State::Name, Reply::plain(texts::NAME_PROMPT)))
}

fn cancel(user_id: &str) -> Step {
    log::info!("User {user_id} canceled conversation");
    Step::reply(State::Idle, Reply::plain(texts::CANCELED))
}

fn reset(store: &dyn UserStore, user_id: &str) -> AppResult<Step> {
    store.delete(user_id)?;
    log::info!("User {user_id} reset registration");
    Ok(Step::reply(State::Name, Reply::plain(texts::RESET_PROMPT)))
}

fn set_name(store: &dyn UserStore, user_id: &str, name: String) -> AppResult<Step> {
    // A fresh record on purpose: answers from an earlier run must not
    // survive a restarted flow.
    store.put(user_id, UserRecord::with_name(name.as_str()))?;
    log::info!("User {user_id} set name: {name}");
    Ok(Step::reply(State::Phone, phone_prompt()))
}

fn set_phone(store: &dyn UserStore, user_id: &str, phone: String) -> AppResult<Step> {
    let mut record = store.get(user_id)?.unwrap_or_default();
    record.phone = Some(phone.clone());
    store.put(user_id, record)?;
    log::info!("User {user_id} set phone: {phone}");
    Ok(Step::reply(State::ClassType, class_type_prompt()))
}

fn choose_class_type(store: &dyn UserStore, user_id: &str, text: String) -> AppResult<Step> {
    let Some(class_type) = ClassType::parse(&text) else {
        return Ok(Step::reply(State::ClassType, Reply::plain(texts::CLASS_TYPE_REJECT)));
    };
    let mut record = store.get(user_id)?.unwrap_or_default();
    record.class_type = Some(class_type);
    store.put(user_id, record)?;
    log::info!("User {user_id} chose class type: {}", class_type.label());
    Ok(Step::reply(State::Direction, direction_prompt()))
}

fn choose_direction(
    store: &dyn UserStore,
    directory: &Directory,
    user_id: &str,
    text: String,
) -> AppResult<Step> {
    if text == texts::BACK_LABEL {
        return Ok(Step::reply(State::ClassType, class_type_prompt()));
    }
    let Some(direction) = Direction::parse(&text) else {
        return Ok(Step::reply(State::Direction, Reply::plain(texts::DIRECTION_REJECT)));
    };

    // Persisted before the eligibility check, like every other answer.
    let mut record = store.get(user_id)?.unwrap_or_default();
    record.direction = Some(direction);
    store.put(user_id, record)?;
    log::info!("User {user_id} chose direction: {}", direction.label());

    let candidates: Vec<String> = directory
        .eligible(direction)
        .iter()
        .map(|profile| profile.name.clone())
        .collect();
    if candidates.is_empty() {
        return Ok(Step::reply(State::Direction, Reply::plain(texts::NO_TEACHERS)));
    }
    let prompt = Reply::with_keyboard(texts::TEACHER_PROMPT, Keyboard::Choices(candidates.clone()));
    Ok(Step::reply(State::Teacher { candidates }, prompt))
}

fn choose_teacher(
    store: &dyn UserStore,
    directory: &Directory,
    user_id: &str,
    candidates: Vec<String>,
    token: String,
) -> AppResult<Step> {
    if token == texts::BACK_TO_DIRECTION {
        return Ok(Step::reply(State::Direction, direction_prompt()));
    }
    // The token must be one of the names offered with this keyboard; stale
    // or forged callbacks re-prompt instead of reaching the catalog.
    let offered = candidates.iter().any(|candidate| candidate == &token);
    let profile = if offered { directory.get(&token) } else { None };
    let Some(profile) = profile else {
        return Ok(Step::reply(
            State::Teacher { candidates },
            Reply::plain(texts::TEACHER_REJECT),
        ));
    };

    let mut record = store.get(user_id)?.unwrap_or_default();
    record.teacher = Some(token.clone());
    let class_type = record.class_type;
    store.put(user_id, record)?;
    log::info!(
        "User {user_id} chose teacher: {token} for class type: {}",
        class_type.map_or("-", ClassType::label)
    );

    Ok(Step::reply(State::Info, Reply::plain(info_card(profile, class_type))))
}

fn phone_prompt() -> Reply {
    Reply::with_keyboard(
        texts::PHONE_PROMPT,
        Keyboard::ContactRequest(texts::SHARE_CONTACT.to_string()),
    )
}

fn class_type_prompt() -> Reply {
    let row = ClassType::ALL
        .iter()
        .map(|class_type| class_type.label().to_string())
        .collect();
    Reply::with_keyboard(texts::CLASS_TYPE_PROMPT, Keyboard::Options(vec![row]))
}

fn direction_prompt() -> Reply {
    let directions = Direction::ALL
        .iter()
        .map(|direction| direction.label().to_string())
        .collect();
    Reply::with_keyboard(
        texts::DIRECTION_PROMPT,
        Keyboard::Options(vec![directions, vec![texts::BACK_LABEL.to_string()]]),
    )
}

/// The final card: teacher details plus the description matching the chosen
/// class type, with a placeholder when the catalog has none.
fn info_card(profile: &TeacherProfile, class_type: Option<ClassType>) -> String {
    let styles = profile
        .styles
        .iter()
        .map(|direction| direction.label())
        .collect::<Vec<_>>()
        .join(", ");
    let class_label = class_type.map_or("-", ClassType::label);
    let class_info = class_type
        .and_then(|class_type| profile.class_info(class_type))
        .unwrap_or(texts::NO_CLASS_INFO);
    format!(
        "Teacher: {}\nStyle: {}\nAbout the teacher: {}\nPrice: {}\n\nAbout '{}':\n{}\n\n{}",
        profile.name, styles, profile.bio, profile.price, class_label, class_info, texts::CARD_FOOTER
    )
}
