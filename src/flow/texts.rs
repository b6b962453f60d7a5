//! Every user-visible string of the registration flow.

/// /start for a brand-new or unfinished user.
pub const NAME_PROMPT: &str = "Hi! What's your name?";

pub const PHONE_PROMPT: &str = "Share your phone number:";

/// Label on the contact-request button.
pub const SHARE_CONTACT: &str = "Share contact";

pub const CLASS_TYPE_PROMPT: &str = "What are you interested in?";

pub const CLASS_TYPE_REJECT: &str = "Please pick one of the offered options.";

pub const DIRECTION_PROMPT: &str = "Pick a vocal direction:";

pub const DIRECTION_REJECT: &str = "Please pick one of the offered directions.";

/// Shown when no teacher in the catalog covers the chosen direction.
pub const NO_TEACHERS: &str = "Sorry, there are no teachers for this direction.";

pub const TEACHER_PROMPT: &str = "Pick a teacher:";

pub const TEACHER_REJECT: &str = "Please pick a teacher from the list.";

/// Placeholder when a teacher has no description for the chosen class type.
pub const NO_CLASS_INFO: &str = "No information available";

pub const CANCELED: &str = "Registration canceled.";

pub const RESET_PROMPT: &str = "Registration starts over. What's your name?";

/// Closing line of the teacher info card.
pub const CARD_FOOTER: &str = "If you like, you can /start again or /cancel";

/// Label of the back button, on both the direction and teacher keyboards.
pub const BACK_LABEL: &str = "⬅ Back";

/// Callback token carried by the back button on the teacher keyboard.
pub const BACK_TO_DIRECTION: &str = "back_to_direction";

/// /start for a user who already left a name and phone.
pub fn greeting(name: &str) -> String {
    format!(
        "Welcome back, {name}! You are already registered.\n\
         Send /restart to change your details, or /cancel to leave."
    )
}
