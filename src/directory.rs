//! Static catalog of teachers, class types, and vocal directions.
//!
//! The catalog never changes at runtime. Handlers share one instance and
//! filter it by the student's chosen direction.

use serde::{Deserialize, Serialize};

/// Kind of lesson a student can book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassType {
    Individual,
    Group,
    Trial,
}

impl ClassType {
    /// Every class type, in the order offered on the keyboard.
    pub const ALL: [Self; 3] = [Self::Individual, Self::Group, Self::Trial];

    /// Keyboard label; matches the persisted representation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Group => "Group",
            Self::Trial => "Trial",
        }
    }

    /// Parse a keyboard label back into a class type.
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class_type| class_type.label() == text)
    }
}

/// Vocal direction a student can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Pop,
    Classical,
    Rock,
    Jazz,
}

impl Direction {
    /// Every direction, in the order offered on the keyboard.
    pub const ALL: [Self; 4] = [Self::Pop, Self::Classical, Self::Rock, Self::Jazz];

    /// Keyboard label; matches the persisted representation.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pop => "Pop",
            Self::Classical => "Classical",
            Self::Rock => "Rock",
            Self::Jazz => "Jazz",
        }
    }

    /// Parse a keyboard label back into a direction.
    pub fn parse(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.label() == text)
    }
}

/// One teacher's card in the catalog.
#[derive(Debug, Clone)]
pub struct TeacherProfile {
    pub name: String,
    /// Directions this teacher covers; drives candidate filtering.
    pub styles: Vec<Direction>,
    pub bio: String,
    pub price: String,
    /// Descriptive text per class type. A teacher may lack some of them.
    pub class_descriptions: Vec<(ClassType, String)>,
}

impl TeacherProfile {
    /// Description of the given class type, if this teacher provides one.
    pub fn class_info(&self, class_type: ClassType) -> Option<&str> {
        self.class_descriptions
            .iter()
            .find(|(candidate, _)| *candidate == class_type)
            .map(|(_, text)| text.as_str())
    }
}

/// Read-only catalog of teachers.
#[derive(Debug, Clone)]
pub struct Directory {
    teachers: Vec<TeacherProfile>,
}

impl Directory {
    pub fn new(teachers: Vec<TeacherProfile>) -> Self {
        Self { teachers }
    }

    /// The built-in studio catalog: three teachers, every direction covered.
    pub fn builtin() -> Self {
        Self::new(vec![
            profile(
                "Yaroslava",
                &[Direction::Jazz, Direction::Pop, Direction::Rock],
                "Yaroslava is a teacher with 10 years of experience.",
                "300 UAH",
                &[
                    (ClassType::Individual, "Individual lessons focused on your own style."),
                    (ClassType::Group, "Group classes of up to 5 people, fun and productive."),
                    (ClassType::Trial, "A trial lesson to gauge your level and interests."),
                ],
            ),
            profile(
                "Oleg",
                &[Direction::Classical],
                "Oleg is a laureate of vocal competitions.",
                "350 UAH",
                &[
                    (ClassType::Individual, "An individual approach built on classical vocals."),
                    (ClassType::Group, "Group training in academic vocals."),
                    (ClassType::Trial, "A trial lesson to get acquainted."),
                ],
            ),
            profile(
                "Marina",
                &[Direction::Jazz],
                "Marina is a jazz vocalist with 7 years on stage.",
                "320 UAH",
                &[
                    (ClassType::Individual, "Jazz vocals one on one."),
                    (ClassType::Group, "A group for learning jazz improvisation."),
                    (ClassType::Trial, "A trial lesson for beginners."),
                ],
            ),
        ])
    }

    /// Looks up a teacher by exact name.
    pub fn get(&self, name: &str) -> Option<&TeacherProfile> {
        self.teachers.iter().find(|profile| profile.name == name)
    }

    /// Teachers whose style tags contain the direction, in catalog order.
    pub fn eligible(&self, direction: Direction) -> Vec<&TeacherProfile> {
        self.teachers
            .iter()
            .filter(|profile| profile.styles.contains(&direction))
            .collect()
    }

    pub fn teachers(&self) -> &[TeacherProfile] {
        &self.teachers
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}

fn profile(
    name: &str,
    styles: &[Direction],
    bio: &str,
    price: &str,
    classes: &[(ClassType, &str)],
) -> TeacherProfile {
    TeacherProfile {
        name: name.to_string(),
        styles: styles.to_vec(),
        bio: bio.to_string(),
        price: price.to_string(),
        class_descriptions: classes
            .iter()
            .map(|(class_type, text)| (*class_type, (*text).to_string()))
            .collect(),
    }
}
