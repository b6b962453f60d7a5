//! Transition-table coverage for the registration flow.
//!
//! Drives the pure state machine with an in-memory store, the same way the
//! Telegram layer does, and checks persisted records, candidate filtering,
//! and the command fallbacks.

use pretty_assertions::assert_eq;
use spivanka::directory::{ClassType, Direction, Directory, TeacherProfile};
use spivanka::flow::{texts, transition, Event, Keyboard, State, Step};
use spivanka::storage::{MemoryStore, UserRecord, UserStore};

const USER: &str = "400100";

/// Applies the events in order and returns the final state.
fn walk(store: &MemoryStore, directory: &Directory, events: &[Event]) -> State {
    let mut state = State::Idle;
    for event in events {
        let step = transition(store, directory, USER, state, event.clone()).unwrap();
        state = step.next;
    }
    state
}

fn text(value: &str) -> Event {
    Event::Text(value.to_string())
}

/// A catalog with a single pop teacher, for the no-candidates path.
fn pop_only_directory() -> Directory {
    Directory::new(vec![TeacherProfile {
        name: "Solomiya".to_string(),
        styles: vec![Direction::Pop],
        bio: "Pop vocal coach.".to_string(),
        price: "280 UAH".to_string(),
        class_descriptions: Vec::new(),
    }])
}

#[test]
fn full_walk_persists_all_five_fields() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();

    let state = walk(
        &store,
        &directory,
        &[
            Event::Start,
            text("Olena"),
            Event::Contact("+380501112233".to_string()),
            text("Individual"),
            text("Jazz"),
            Event::Button("Yaroslava".to_string()),
        ],
    );

    assert_eq!(state, State::Info);
    let record = store.get(USER).unwrap().unwrap();
    assert_eq!(
        record,
        UserRecord {
            name: Some("Olena".to_string()),
            phone: Some("+380501112233".to_string()),
            class_type: Some(ClassType::Individual),
            direction: Some(Direction::Jazz),
            teacher: Some("Yaroslava".to_string()),
        }
    );
}

#[test]
fn typed_phone_is_accepted_like_a_shared_contact() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();

    walk(&store, &directory, &[Event::Start, text("Olena"), text("0501112233")]);

    let record = store.get(USER).unwrap().unwrap();
    assert_eq!(record.phone.as_deref(), Some("0501112233"));
}

#[test]
fn registered_user_is_greeted_not_restarted() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let registered = UserRecord {
        name: Some("Olena".to_string()),
        phone: Some("+380501112233".to_string()),
        ..UserRecord::default()
    };
    store.put(USER, registered.clone()).unwrap();

    let step = transition(&store, &directory, USER, State::Idle, Event::Start).unwrap();

    assert_eq!(step.next, State::Idle);
    assert_eq!(step.replies.len(), 1);
    assert!(step.replies[0].text.contains("Olena"));
    assert!(step.replies[0].text.contains("/restart"));
    assert_eq!(store.get(USER).unwrap(), Some(registered));
}

#[test]
fn start_with_a_partial_record_restarts_the_flow() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    // name saved, phone never reached
    store.put(USER, UserRecord::with_name("Olena")).unwrap();

    let step = transition(&store, &directory, USER, State::Idle, Event::Start).unwrap();

    assert_eq!(step.next, State::Name);
    assert_eq!(step.replies[0].text, texts::NAME_PROMPT);
}

#[test]
fn name_answer_drops_answers_from_an_earlier_run() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    store.put(USER, UserRecord::with_name("Olena")).unwrap();

    walk(&store, &directory, &[Event::Start, text("Roman")]);

    assert_eq!(store.get(USER).unwrap(), Some(UserRecord::with_name("Roman")));
}

#[test]
fn reset_wipes_the_record_mid_flow() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = walk(
        &store,
        &directory,
        &[Event::Start, text("Olena"), text("0501112233"), text("Group")],
    );
    assert_eq!(state, State::Direction);

    let step = transition(&store, &directory, USER, state, Event::Reset).unwrap();

    assert_eq!(step.next, State::Name);
    assert_eq!(step.replies[0].text, texts::RESET_PROMPT);
    assert_eq!(store.get(USER).unwrap(), None);
}

#[test]
fn reset_skips_the_registered_greeting() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let registered = UserRecord {
        name: Some("Olena".to_string()),
        phone: Some("+380501112233".to_string()),
        ..UserRecord::default()
    };
    store.put(USER, registered).unwrap();

    let step = transition(&store, &directory, USER, State::Idle, Event::Reset).unwrap();

    assert_eq!(step.next, State::Name);
    assert_eq!(store.get(USER).unwrap(), None);
}

#[test]
fn invalid_class_type_re_prompts_without_saving() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = walk(&store, &directory, &[Event::Start, text("Olena"), text("0501112233")]);
    assert_eq!(state, State::ClassType);

    let step = transition(&store, &directory, USER, state, text("Masterclass")).unwrap();

    assert_eq!(step.next, State::ClassType);
    assert_eq!(step.replies[0].text, texts::CLASS_TYPE_REJECT);
    assert_eq!(store.get(USER).unwrap().unwrap().class_type, None);
}

#[test]
fn invalid_direction_re_prompts_without_saving() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = walk(
        &store,
        &directory,
        &[Event::Start, text("Olena"), text("0501112233"), text("Trial")],
    );

    let step = transition(&store, &directory, USER, state, text("Opera")).unwrap();

    assert_eq!(step.next, State::Direction);
    assert_eq!(step.replies[0].text, texts::DIRECTION_REJECT);
    assert_eq!(store.get(USER).unwrap().unwrap().direction, None);
}

#[test]
fn jazz_offers_yaroslava_and_marina() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = walk(
        &store,
        &directory,
        &[Event::Start, text("Olena"), text("0501112233"), text("Group")],
    );

    let step = transition(&store, &directory, USER, state, text("Jazz")).unwrap();

    let candidates = vec!["Yaroslava".to_string(), "Marina".to_string()];
    assert_eq!(step.next, State::Teacher { candidates: candidates.clone() });
    assert_eq!(step.replies[0].text, texts::TEACHER_PROMPT);
    assert_eq!(step.replies[0].keyboard, Some(Keyboard::Choices(candidates)));
}

#[test]
fn no_eligible_teacher_apologizes_and_stays() {
    let store = MemoryStore::new();
    let directory = pop_only_directory();
    let state = walk(
        &store,
        &directory,
        &[Event::Start, text("Olena"), text("0501112233"), text("Trial")],
    );

    let step = transition(&store, &directory, USER, state, text("Rock")).unwrap();

    assert_eq!(step.next, State::Direction);
    assert_eq!(step.replies[0].text, texts::NO_TEACHERS);
    // the direction itself was still recorded
    assert_eq!(store.get(USER).unwrap().unwrap().direction, Some(Direction::Rock));
}

#[test]
fn back_from_direction_returns_to_class_type() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = walk(
        &store,
        &directory,
        &[Event::Start, text("Olena"), text("0501112233"), text("Group")],
    );

    let step = transition(&store, &directory, USER, state, text(texts::BACK_LABEL)).unwrap();

    assert_eq!(step.next, State::ClassType);
    assert_eq!(step.replies[0].text, texts::CLASS_TYPE_PROMPT);
    let Some(Keyboard::Options(rows)) = &step.replies[0].keyboard else {
        panic!("expected an options keyboard");
    };
    assert_eq!(rows[0], vec!["Individual", "Group", "Trial"]);
}

#[test]
fn back_from_teacher_returns_to_direction() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = State::Teacher {
        candidates: vec!["Yaroslava".to_string(), "Marina".to_string()],
    };

    let step = transition(
        &store,
        &directory,
        USER,
        state,
        Event::Button(texts::BACK_TO_DIRECTION.to_string()),
    )
    .unwrap();

    assert_eq!(step.next, State::Direction);
    assert_eq!(step.replies[0].text, texts::DIRECTION_PROMPT);
}

#[test]
fn forged_teacher_callback_is_rejected() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    store.put(USER, UserRecord::with_name("Olena")).unwrap();
    let state = State::Teacher {
        candidates: vec!["Oleg".to_string()],
    };

    // Yaroslava exists in the catalog but was never offered
    let step = transition(&store, &directory, USER, state.clone(), Event::Button("Yaroslava".to_string())).unwrap();

    assert_eq!(step.next, state);
    assert_eq!(step.replies[0].text, texts::TEACHER_REJECT);
    assert_eq!(store.get(USER).unwrap().unwrap().teacher, None);
}

#[test]
fn text_while_choosing_a_teacher_re_prompts() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = State::Teacher {
        candidates: vec!["Oleg".to_string()],
    };

    let step = transition(&store, &directory, USER, state.clone(), text("Oleg")).unwrap();

    assert_eq!(step.next, state);
    assert_eq!(step.replies[0].text, texts::TEACHER_REJECT);
}

#[test]
fn chosen_teacher_card_reflects_the_class_type() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = walk(
        &store,
        &directory,
        &[Event::Start, text("Olena"), text("0501112233"), text("Trial"), text("Classical")],
    );

    let step = transition(&store, &directory, USER, state, Event::Button("Oleg".to_string())).unwrap();

    assert_eq!(step.next, State::Info);
    let card = &step.replies[0].text;
    assert!(card.contains("Teacher: Oleg"));
    assert!(card.contains("Price: 350 UAH"));
    assert!(card.contains("About 'Trial':"));
    assert!(card.contains("A trial lesson to get acquainted."));
}

#[test]
fn cancel_keeps_already_saved_answers() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();
    let state = walk(&store, &directory, &[Event::Start, text("Olena"), text("0501112233")]);
    let saved = store.get(USER).unwrap();

    let step = transition(&store, &directory, USER, state, Event::Cancel).unwrap();

    assert_eq!(step.next, State::Idle);
    assert_eq!(step.replies[0].text, texts::CANCELED);
    assert_eq!(store.get(USER).unwrap(), saved);
}

#[test]
fn text_after_the_info_card_ends_the_conversation() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();

    let step = transition(&store, &directory, USER, State::Info, text("thanks")).unwrap();

    assert_eq!(step.next, State::Idle);
    assert_eq!(step.replies[0].text, texts::CANCELED);
}

#[test]
fn stray_input_outside_a_conversation_is_ignored() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();

    let step = transition(&store, &directory, USER, State::Idle, text("hello")).unwrap();

    assert_eq!(
        step,
        Step {
            next: State::Idle,
            replies: Vec::new(),
        }
    );
    assert_eq!(store.get(USER).unwrap(), None);
}

#[test]
fn prompts_carry_their_keyboards() {
    let store = MemoryStore::new();
    let directory = Directory::builtin();

    let start = transition(&store, &directory, USER, State::Idle, Event::Start).unwrap();
    assert_eq!(start.replies[0].keyboard, None);

    let name = transition(&store, &directory, USER, start.next, text("Olena")).unwrap();
    assert_eq!(name.replies[0].text, texts::PHONE_PROMPT);
    assert_eq!(
        name.replies[0].keyboard,
        Some(Keyboard::ContactRequest(texts::SHARE_CONTACT.to_string()))
    );

    let phone = transition(&store, &directory, USER, name.next, Event::Contact("+380".to_string())).unwrap();
    assert_eq!(phone.replies[0].text, texts::CLASS_TYPE_PROMPT);
    assert_eq!(
        phone.replies[0].keyboard,
        Some(Keyboard::Options(vec![vec![
            "Individual".to_string(),
            "Group".to_string(),
            "Trial".to_string(),
        ]]))
    );
}
