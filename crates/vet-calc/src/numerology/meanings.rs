//! The seven profile numbers and their interpretations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven numbers in a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumberKind {
    /// Digits of the full birthdate.
    LifePath,
    /// Day of birth.
    Birthday,
    /// Every letter of the name.
    Destiny,
    /// Vowels of the name.
    SoulUrge,
    /// Consonants of the name.
    Personality,
    /// Life Path plus Destiny.
    Maturity,
    /// Current year plus birth month and day.
    PersonalYear,
}

type Table = [(u64, &'static str); 12];

const LIFE_PATH: Table = [
    (1, "Independence, Leadership"),
    (2, "Diplomacy, Partnership"),
    (3, "Creativity, Expression"),
    (4, "Stability, Hard work"),
    (5, "Freedom, Adaptability"),
    (6, "Responsibility, Harmony"),
    (7, "Spirituality, Introspection"),
    (8, "Power, Ambition"),
    (9, "Compassion, Humanitarianism"),
    (11, "Inspiration, Intuition"),
    (22, "Mastery, Vision"),
    (33, "Healing, Altruism"),
];

const DESTINY: Table = [
    (1, "Leadership, Purpose"),
    (2, "Collaboration, Balance"),
    (3, "Joy, Creativity"),
    (4, "Foundation, Stability"),
    (5, "Change, Freedom"),
    (6, "Service, Family"),
    (7, "Wisdom, Solitude"),
    (8, "Power, Success"),
    (9, "Compassion, Service"),
    (11, "Visionary, Insight"),
    (22, "Master Builder, Potential"),
    (33, "Healing, Love"),
];

const SOUL_URGE: Table = [
    (1, "Self-Determination, Drive"),
    (2, "Peace, Harmony"),
    (3, "Expression, Joy"),
    (4, "Practicality, Security"),
    (5, "Adventure, Freedom"),
    (6, "Love, Care"),
    (7, "Mysticism, Depth"),
    (8, "Ambition, Power"),
    (9, "Humanitarianism, Idealism"),
    (11, "Inspiration, Intuition"),
    (22, "Mastery, Service"),
    (33, "Compassion, Healing"),
];

const PERSONALITY: Table = [
    (1, "Assertive, Strong"),
    (2, "Gentle, Diplomatic"),
    (3, "Outgoing, Charismatic"),
    (4, "Reliable, Practical"),
    (5, "Dynamic, Adaptable"),
    (6, "Nurturing, Caring"),
    (7, "Reserved, Analytical"),
    (8, "Confident, Ambitious"),
    (9, "Generous, Compassionate"),
    (11, "Creative, Charismatic"),
    (22, "Powerful, Authoritative"),
    (33, "Selfless, Inspirational"),
];

const BIRTHDAY: Table = [
    (1, "Leadership, Initiative"),
    (2, "Cooperation, Sensitivity"),
    (3, "Creativity, Joy"),
    (4, "Discipline, Order"),
    (5, "Freedom, Curiosity"),
    (6, "Nurturing, Responsibility"),
    (7, "Analysis, Contemplation"),
    (8, "Ambition, Material Success"),
    (9, "Humanitarian, Idealistic"),
    (11, "Intuitive, Spiritual Insight"),
    (22, "Mastery, Achievements"),
    (33, "Healing, Enlightenment"),
];

const MATURITY: Table = [
    (1, "Individuality, Assertiveness"),
    (2, "Balance, Harmony"),
    (3, "Artistry, Communication"),
    (4, "Structure, Dependability"),
    (5, "Flexibility, Exploration"),
    (6, "Support, Family Focus"),
    (7, "Wisdom, Insight"),
    (8, "Power, Achievement"),
    (9, "Compassion, Sacrifice"),
    (11, "Visionary, Inspirational"),
    (22, "Strategic, Visionary"),
    (33, "Service, Love"),
];

const PERSONAL_YEAR: Table = [
    (1, "New Beginnings, Initiative"),
    (2, "Patience, Relationships"),
    (3, "Creativity, Socializing"),
    (4, "Stability, Hard Work"),
    (5, "Change, Adventure"),
    (6, "Family, Harmony"),
    (7, "Introspection, Spiritual Growth"),
    (8, "Power, Material Success"),
    (9, "Completion, Letting Go"),
    (11, "Intuition, Insight"),
    (22, "Mastery, Building"),
    (33, "Compassion, Global Awareness"),
];

impl NumberKind {
    /// Report order.
    pub const ALL: [Self; 7] = [
        Self::LifePath,
        Self::Birthday,
        Self::Destiny,
        Self::SoulUrge,
        Self::Personality,
        Self::Maturity,
        Self::PersonalYear,
    ];

    /// Name as printed in the report.
    pub fn label(self) -> &'static str {
        match self {
            Self::LifePath => "Life Path",
            Self::Birthday => "Birthday",
            Self::Destiny => "Destiny",
            Self::SoulUrge => "Soul Urge",
            Self::Personality => "Personality",
            Self::Maturity => "Maturity",
            Self::PersonalYear => "Personal Year",
        }
    }

    fn table(self) -> &'static Table {
        match self {
            Self::LifePath => &LIFE_PATH,
            Self::Birthday => &BIRTHDAY,
            Self::Destiny => &DESTINY,
            Self::SoulUrge => &SOUL_URGE,
            Self::Personality => &PERSONALITY,
            Self::Maturity => &MATURITY,
            Self::PersonalYear => &PERSONAL_YEAR,
        }
    }

    /// Interpretation of `value`, or `"Unknown"`.
    pub fn meaning(self, value: u64) -> &'static str {
        self.table()
            .iter()
            .find(|(n, _)| *n == value)
            .map_or("Unknown", |&(_, text)| text)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_covers_digits_and_masters() {
        for kind in NumberKind::ALL {
            for n in (1..=9).chain([11, 22, 33]) {
                assert_ne!(kind.meaning(n), "Unknown", "{kind} {n}");
            }
        }
    }

    #[test]
    fn missing_keys_are_unknown() {
        assert_eq!(NumberKind::Destiny.meaning(0), "Unknown");
        assert_eq!(NumberKind::Maturity.meaning(10), "Unknown");
    }

    #[test]
    fn tables_differ_per_kind() {
        assert_eq!(NumberKind::LifePath.meaning(3), "Creativity, Expression");
        assert_eq!(NumberKind::Destiny.meaning(3), "Joy, Creativity");
        assert_eq!(NumberKind::PersonalYear.meaning(33), "Compassion, Global Awareness");
    }
}
