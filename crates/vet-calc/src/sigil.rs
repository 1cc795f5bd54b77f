//! Sigil base extraction: the distinct consonants of an intention.

use vet_core::{Command, Reply, Tool, ToolResult};

/// Upper-case `intention` and keep each alphabetic non-vowel character
/// once, in order of first appearance.
pub fn extract_consonants(intention: &str) -> String {
    let mut seen = Vec::new();
    for c in intention.chars().flat_map(char::to_uppercase) {
        if c.is_alphabetic() && !matches!(c, 'A' | 'E' | 'I' | 'O' | 'U') && !seen.contains(&c) {
            seen.push(c);
        }
    }
    seen.into_iter().collect()
}

/// One intention per line, one result per intention.
#[derive(Debug, Default)]
pub struct SigilSession;

impl SigilSession {
    /// Create a session.
    pub fn new() -> Self {
        Self
    }
}

impl Tool for SigilSession {
    fn title(&self) -> &'static str {
        "Virtual Sigil Consonant Extractor"
    }

    fn prompt(&self) -> String {
        "Enter intention, [R] to reset, [M] for menu: ".to_string()
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        let intention = match Command::parse(input) {
            Command::Reset => return Ok(Reply::Reset),
            Command::Menu => return Ok(Reply::Menu),
            Command::Proceed => "",
            Command::Text(text) => text,
        };
        let result = extract_consonants(intention);
        tracing::debug!(%result, "extracted sigil consonants");
        Ok(Reply::Output(format!(
            "Sigil consonants (no vowels, no repeats): {result}"
        )))
    }
}
