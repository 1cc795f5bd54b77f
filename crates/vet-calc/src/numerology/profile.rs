//! Birthdate parsing and the seven-number profile.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::letters::LetterSet;
use super::meanings::NumberKind;
use super::reduce::{digit_sum, reduce};
use crate::error::CalcError;

/// A birthdate as entered. No calendar validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Birthdate {
    /// Year.
    pub year: u32,
    /// Month.
    pub month: u32,
    /// Day of month.
    pub day: u32,
}

impl FromStr for Birthdate {
    type Err = CalcError;

    /// Parse `YYYY MM DD`: three whitespace-separated non-negative numbers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [year, month, day] = parts[..] else {
            return Err(CalcError::InvalidDate(format!(
                "expected 3 numbers, got {}",
                parts.len()
            )));
        };
        let number = |part: &str| {
            part.parse::<u32>()
                .map_err(|_| CalcError::InvalidDate(format!("'{part}' is not a number")))
        };
        Ok(Self {
            year: number(year)?,
            month: number(month)?,
            day: number(day)?,
        })
    }
}

/// The seven numbers derived from a birthdate and a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    /// Reduced digit sum of the whole birthdate.
    pub life_path: u64,
    /// Reduced day of birth.
    pub birthday: u64,
    /// Reduced value of every letter.
    pub destiny: u64,
    /// Reduced value of the vowels.
    pub soul_urge: u64,
    /// Reduced value of the consonants.
    pub personality: u64,
    /// Reduced Life Path plus Destiny.
    pub maturity: u64,
    /// Reduced current year plus birth month and day.
    pub personal_year: u64,
}

impl NumerologyProfile {
    /// Compute a profile. `current_year` feeds the Personal Year.
    pub fn compute(birthdate: &Birthdate, name: &str, current_year: u32) -> Self {
        let Birthdate { year, month, day } = *birthdate;
        let life_path = reduce(
            digit_sum(u64::from(year)) + digit_sum(u64::from(month)) + digit_sum(u64::from(day)),
        );
        let destiny = reduce(LetterSet::All.sum(name));
        let profile = Self {
            life_path,
            birthday: reduce(u64::from(day)),
            destiny,
            soul_urge: reduce(LetterSet::Vowels.sum(name)),
            personality: reduce(LetterSet::Consonants.sum(name)),
            maturity: reduce(life_path + destiny),
            personal_year: reduce(u64::from(current_year) + u64::from(month) + u64::from(day)),
        };
        tracing::debug!(?profile, "computed numerology profile");
        profile
    }

    /// Value of one number.
    pub fn get(&self, kind: NumberKind) -> u64 {
        match kind {
            NumberKind::LifePath => self.life_path,
            NumberKind::Birthday => self.birthday,
            NumberKind::Destiny => self.destiny,
            NumberKind::SoulUrge => self.soul_urge,
            NumberKind::Personality => self.personality,
            NumberKind::Maturity => self.maturity,
            NumberKind::PersonalYear => self.personal_year,
        }
    }

    /// The numbers in report order.
    pub fn entries(&self) -> [(NumberKind, u64); 7] {
        NumberKind::ALL.map(|kind| (kind, self.get(kind)))
    }

    /// The printed report.
    pub fn report(&self) -> String {
        let mut out = String::from("--- Numerology Report ---");
        for (kind, value) in self.entries() {
            let _ = write!(out, "\n{kind} Number: {value} - {}", kind.meaning(value));
        }
        out
    }
}
