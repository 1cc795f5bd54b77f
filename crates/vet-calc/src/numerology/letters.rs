//! Pythagorean letter values.
//!
//! ```text
//! 1 2 3 4 5 6 7 8 9
//! a b c d e f g h i
//! j k l m n o p q r
//! s t u v w x y z
//! ```
//!
//! Letters outside a to z carry no value. `y` is always a consonant.

/// Value of an ASCII letter, case-insensitive.
pub fn letter_value(c: char) -> Option<u64> {
    let c = c.to_ascii_lowercase();
    if !c.is_ascii_lowercase() {
        return None;
    }
    Some(u64::from(c as u8 - b'a') % 9 + 1)
}

/// Whether `c` is one of a, e, i, o, u.
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Which letters of a name count toward a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterSet {
    /// Every letter (Destiny).
    All,
    /// a, e, i, o, u (Soul Urge).
    Vowels,
    /// Every other letter, including y (Personality).
    Consonants,
}

impl LetterSet {
    /// Value of `c` under this set, 0 if it does not count.
    pub fn value(self, c: char) -> u64 {
        let counts = match self {
            Self::All => true,
            Self::Vowels => is_vowel(c),
            Self::Consonants => !is_vowel(c),
        };
        if counts { letter_value(c).unwrap_or(0) } else { 0 }
    }

    /// Unreduced total of a name.
    pub fn sum(self, name: &str) -> u64 {
        name.chars().map(|c| self.value(c)).sum()
    }
}
