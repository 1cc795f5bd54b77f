//! The main menu and the loop that drives an open tool.

use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use vet_calc::{
    BirthChartSession, MoonPhaseSession, NumerologySession, PositionsSession, SigilSession,
};
use vet_core::{Reply, Tool, ToolkitConfig};
use vet_divination::{CoinSession, DeckKind, DeckSession, DiceSession, IChingSession};

use crate::console::Console;

const MENU: &str = "\
~ The Virtual Esoteric Toolkit ~

Divination Tools
1. Tarot Deck
2. Rune Set
3. Coin Toss
4. Dice Set
5. I-Ching

Esoteric Calculators
6. Birth Chart
7. Planetary Positions
8. Moon Phases
9. Numerology
10. Sigil Base Extractor

X. Quit";

const FAREWELL: &str = "Thank you for using The Virtual Esoteric Toolkit.";

/// A tool reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Tarot,
    Runes,
    Coin,
    Dice,
    IChing,
    BirthChart,
    Positions,
    MoonPhases,
    Numerology,
    Sigil,
}

impl MenuItem {
    #[cfg(test)]
    const ALL: [Self; 10] = [
        Self::Tarot,
        Self::Runes,
        Self::Coin,
        Self::Dice,
        Self::IChing,
        Self::BirthChart,
        Self::Positions,
        Self::MoonPhases,
        Self::Numerology,
        Self::Sigil,
    ];

    /// A fresh session. Random tools get their own RNG drawn from `rng`.
    fn open(self, rng: &mut StdRng) -> Box<dyn Tool> {
        let mut child = || StdRng::from_rng(&mut *rng);
        match self {
            Self::Tarot => Box::new(DeckSession::new(DeckKind::Tarot, child())),
            Self::Runes => Box::new(DeckSession::new(DeckKind::Runes, child())),
            Self::Coin => Box::new(CoinSession::new(child())),
            Self::Dice => Box::new(DiceSession::new(child())),
            Self::IChing => Box::new(IChingSession::new(child())),
            Self::BirthChart => Box::new(BirthChartSession::new()),
            Self::Positions => Box::new(PositionsSession::new()),
            Self::MoonPhases => Box::new(MoonPhaseSession::new()),
            Self::Numerology => Box::new(NumerologySession::new()),
            Self::Sigil => Box::new(SigilSession::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Open(MenuItem),
    Quit,
}

impl Selection {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("x") {
            return Some(Self::Quit);
        }
        let item = match input {
            "1" => MenuItem::Tarot,
            "2" => MenuItem::Runes,
            "3" => MenuItem::Coin,
            "4" => MenuItem::Dice,
            "5" => MenuItem::IChing,
            "6" => MenuItem::BirthChart,
            "7" => MenuItem::Positions,
            "8" => MenuItem::MoonPhases,
            "9" => MenuItem::Numerology,
            "10" => MenuItem::Sigil,
            _ => return None,
        };
        Some(Self::Open(item))
    }
}

/// How a tool loop ended.
enum Exit {
    Menu,
    EndOfInput,
}

fn show_tool<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tool: &dyn Tool,
) -> io::Result<()> {
    console.clear_screen()?;
    console.say(tool.title())?;
    if !tool.banner().is_empty() {
        console.gap()?;
        console.say(tool.banner())?;
    }
    Ok(())
}

fn run_tool<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    item: MenuItem,
    rng: &mut StdRng,
) -> io::Result<Exit> {
    let mut tool = item.open(rng);
    tracing::debug!(?item, "opened tool");
    show_tool(console, tool.as_ref())?;
    loop {
        let Some(line) = console.read_line(&tool.prompt())? else {
            return Ok(Exit::EndOfInput);
        };
        match tool.handle(&line) {
            Ok(Reply::Output(text)) => {
                if !text.is_empty() {
                    console.gap()?;
                    console.say(&text)?;
                }
            }
            Ok(Reply::Reset) => {
                tracing::debug!(?item, "reset tool");
                tool = item.open(rng);
                show_tool(console, tool.as_ref())?;
            }
            Ok(Reply::Menu) => {
                console.clear_screen()?;
                return Ok(Exit::Menu);
            }
            Err(e) => console.warn(&e.to_string())?,
        }
    }
}

/// Show the menu until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &ToolkitConfig,
) -> io::Result<()> {
    let mut rng = config.rng();
    loop {
        console.say(MENU)?;
        console.gap()?;
        let Some(line) = console.read_line("Select (1-10, X): ")? else {
            return Ok(());
        };
        match Selection::parse(&line) {
            Some(Selection::Quit) => {
                console.say(FAREWELL)?;
                return Ok(());
            }
            Some(Selection::Open(item)) => {
                if let Exit::EndOfInput = run_tool(console, item, &mut rng)? {
                    return Ok(());
                }
            }
            None => {
                console.warn("Invalid selection.")?;
                console.gap()?;
            }
        }
    }
}
