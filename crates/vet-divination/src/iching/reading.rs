//! Hexagram composition: primary and secondary hexagrams from six cast
//! lines, plus the text rendering of a full reading.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::line::LineValue;
use super::table::{HexagramInfo, lookup_hexagram};
use super::trigram::trigram_meaning;

/// Six lines, index 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// Line values, bottom to top.
    pub lines: [LineValue; 6],
}

impl Hexagram {
    /// Build from line values, bottom to top.
    pub fn new(lines: [LineValue; 6]) -> Self {
        Self { lines }
    }

    /// Build from numeric values (6..=9), bottom to top.
    pub fn from_values(values: [u8; 6]) -> Option<Self> {
        let mut lines = [LineValue::YoungYin; 6];
        for (slot, value) in lines.iter_mut().zip(values) {
            *slot = LineValue::from_value(value)?;
        }
        Some(Self { lines })
    }

    /// Binary key, bottom line first.
    pub fn binary(&self) -> String {
        self.lines.iter().map(|l| l.bit()).collect()
    }

    /// 1-based positions of the changing lines, ascending.
    pub fn changing_lines(&self) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.is_changing())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// The hexagram after every changing line has turned, if any did.
    pub fn secondary(&self) -> Option<Self> {
        if self.changing_lines().is_empty() {
            return None;
        }
        Some(Self {
            lines: self.lines.map(LineValue::settled),
        })
    }

    /// Table entry for this hexagram.
    pub fn info(&self) -> Option<&'static HexagramInfo> {
        lookup_hexagram(&self.binary())
    }

    /// Binary key of the bottom three lines.
    pub fn lower_binary(&self) -> String {
        self.binary()[..3].to_string()
    }

    /// Binary key of the top three lines.
    pub fn upper_binary(&self) -> String {
        self.binary()[3..].to_string()
    }

    fn render_into(&self, out: &mut String, heading: &str) {
        let _ = writeln!(out, "{heading}");
        for (i, line) in self.lines.iter().enumerate().rev() {
            let _ = writeln!(out, "Line {}: {}", i + 1, line.glyph());
        }
        let changing = self.changing_lines();
        if !changing.is_empty() {
            let list: Vec<String> = changing.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "Changing lines: {}", list.join(", "));
        }
        let binary = self.binary();
        let meaning = self
            .info()
            .map_or_else(|| "Unknown".to_string(), ToString::to_string);
        let _ = writeln!(out, "Binary: {binary}");
        let _ = writeln!(out, "Meaning: {meaning}");
        let _ = writeln!(out, "\nComposed of:");
        let _ = writeln!(out, "  Lower trigram: {}", trigram_meaning(&binary[..3]));
        let _ = write!(out, "  Upper trigram: {}", trigram_meaning(&binary[3..]));
    }
}

/// A complete cast: the primary hexagram and, when lines changed, the
/// secondary one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// As cast.
    pub primary: Hexagram,
    /// After change.
    pub secondary: Option<Hexagram>,
}

impl Reading {
    /// Compose a reading from cast lines.
    pub fn new(primary: Hexagram) -> Self {
        let secondary = primary.secondary();
        tracing::debug!(
            primary = %primary.binary(),
            secondary = ?secondary.map(|h| h.binary()),
            "composed reading"
        );
        Self { primary, secondary }
    }

    /// Text block shown after the sixth line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.primary.render_into(&mut out, "Primary Hexagram:");
        match &self.secondary {
            Some(secondary) => {
                out.push_str("\n\n");
                secondary.render_into(&mut out, "Secondary Hexagram:");
            }
            None => out.push_str("\n\nNo secondary hexagram (no changing lines)."),
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iching::Trigram;

    fn fixture() -> Hexagram {
        Hexagram::from_values([7, 8, 9, 6, 7, 8]).unwrap()
    }

    #[test]
    fn primary_binary_and_changes() {
        let h = fixture();
        assert_eq!(h.binary(), "101010");
        assert_eq!(h.changing_lines(), vec![3, 4]);
        let info = h.info().unwrap();
        assert_eq!(info.number, 63);
        assert_eq!(info.lower, Trigram::Fire);
        assert_eq!(info.upper, Trigram::Water);
        assert_eq!(h.lower_binary(), "101");
        assert_eq!(h.upper_binary(), "010");
    }

    #[test]
    fn secondary_settles_changing_lines() {
        let secondary = fixture().secondary().unwrap();
        let values: Vec<u8> = secondary.lines.iter().map(|l| l.value()).collect();
        assert_eq!(values, vec![7, 8, 8, 7, 7, 8]);
        assert_eq!(secondary.binary(), "100110");
        let info = secondary.info().unwrap();
        assert_eq!(info.number, 17);
        assert_eq!(info.lower, Trigram::Thunder);
        assert_eq!(info.upper, Trigram::Lake);
        assert!(secondary.changing_lines().is_empty());
    }

    #[test]
    fn static_lines_have_no_secondary() {
        let h = Hexagram::from_values([7, 7, 8, 8, 7, 8]).unwrap();
        assert_eq!(h.secondary(), None);
        let text = Reading::new(h).render();
        assert!(text.ends_with("\n\nNo secondary hexagram (no changing lines)."));
        assert!(!text.contains("Changing lines"));
    }

    #[test]
    fn rejects_values_outside_six_to_nine() {
        assert_eq!(Hexagram::from_values([7, 8, 9, 6, 7, 5]), None);
    }

    #[test]
    fn all_old_yang_becomes_receptive() {
        let h = Hexagram::from_values([9; 6]).unwrap();
        assert_eq!(h.info().unwrap().number, 1);
        assert_eq!(h.secondary().unwrap().info().unwrap().number, 2);
    }

    #[test]
    fn render_fixture() {
        let reading = Reading::new(fixture());
        insta::assert_snapshot!(reading.render(), @r"
Primary Hexagram:
Line 6: -- --
Line 5: -----
Line 4: -- --x
Line 3: -----o
Line 2: -- --
Line 1: -----
Changing lines: 3, 4
Binary: 101010
Meaning: 63. 既濟 Jì Jì - After Completion - Completion, balance, and vigilance.

Composed of:
  Lower trigram: Fire (Li) - Clinging, Bright
  Upper trigram: Water (Kan) - Abysmal, Dangerous

Secondary Hexagram:
Line 6: -- --
Line 5: -----
Line 4: -----
Line 3: -- --
Line 2: -- --
Line 1: -----
Binary: 100110
Meaning: 17. 隨 Suí - Following - Adaptation, following the flow, and flexibility.

Composed of:
  Lower trigram: Thunder (Zhen) - Arousing, Active
  Upper trigram: Lake (Dui) - Joyous, Open
");
    }
}
