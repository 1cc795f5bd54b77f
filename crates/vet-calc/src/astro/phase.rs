//! Moon phases by Moon-Sun elongation.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use vet_core::{Command, Reply, Tool, ToolResult};

use super::body::Body;
use super::ephemeris::{AnalyticEphemeris, Ephemeris};
use crate::error::{AstroResult, CalcError, CalcResult};

/// Longest date range, in days, the tool prints.
pub const MAX_RANGE_DAYS: i64 = 366;

const HINT: &str = "Enter date(s) (YYYY MM DD, or range with -), [R] to reset, or [M] for menu.";

/// One of eight phases, each a 45 degree sector of elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonPhase {
    /// Centred on 0 degrees.
    New,
    /// Centred on 45 degrees.
    WaxingCrescent,
    /// Centred on 90 degrees.
    FirstQuarter,
    /// Centred on 135 degrees.
    WaxingGibbous,
    /// Centred on 180 degrees.
    Full,
    /// Centred on 225 degrees.
    WaningGibbous,
    /// Centred on 270 degrees.
    LastQuarter,
    /// Centred on 315 degrees.
    WaningCrescent,
}

impl MoonPhase {
    /// Phases in order of increasing elongation.
    pub const ALL: [Self; 8] = [
        Self::New,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::Full,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// The phase for a Moon-minus-Sun longitude in degrees.
    pub fn from_elongation(elongation_deg: f64) -> Self {
        let index = ((elongation_deg.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize;
        Self::ALL[index % 8]
    }

    /// English name.
    pub fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Display symbol.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::New => "◯",
            Self::WaxingCrescent => "☽",
            Self::FirstQuarter => "◑",
            Self::WaxingGibbous => "(",
            Self::Full => "●",
            Self::WaningGibbous => ")",
            Self::LastQuarter => "◐",
            Self::WaningCrescent => "☾",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.glyph())
    }
}

/// Phase at 00:00 UTC on `date`.
pub fn moon_phase_on(ephemeris: &impl Ephemeris, date: NaiveDate) -> AstroResult<MoonPhase> {
    let at = date.and_time(NaiveTime::MIN).and_utc();
    let moon = ephemeris.geocentric(Body::Moon, at)?.longitude_deg();
    let sun = ephemeris.geocentric(Body::Sun, at)?.longitude_deg();
    let phase = MoonPhase::from_elongation(moon - sun);
    tracing::debug!(%date, elongation = (moon - sun).rem_euclid(360.0), ?phase, "moon phase");
    Ok(phase)
}

/// Dates requested at the moon phase prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateQuery {
    /// `YYYY MM DD`
    Single(NaiveDate),
    /// `YYYY MM DD - YYYY MM DD`, inclusive.
    Range(NaiveDate, NaiveDate),
    /// `YYYY MM DD, YYYY MM DD, ...`
    List(Vec<NaiveDate>),
}

fn parse_date(s: &str) -> CalcResult<NaiveDate> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    let [year, month, day] = parts[..] else {
        return Err(CalcError::InvalidPhaseDate);
    };
    let (Ok(year), Ok(month), Ok(day)) = (
        year.parse::<i32>(),
        month.parse::<u32>(),
        day.parse::<u32>(),
    ) else {
        return Err(CalcError::InvalidPhaseDate);
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalcError::InvalidPhaseDate)
}

impl DateQuery {
    /// Parse a single date, a range, or a comma-separated list.
    pub fn parse(input: &str) -> CalcResult<Self> {
        let input = input.trim();
        if input.contains('-') {
            let parts: Vec<&str> = input.split('-').collect();
            let [start, end] = parts[..] else {
                return Err(CalcError::InvalidPhaseDate);
            };
            let (start, end) = (parse_date(start)?, parse_date(end)?);
            if end < start {
                return Err(CalcError::ReversedRange);
            }
            let days = (end - start).num_days() + 1;
            if days > MAX_RANGE_DAYS {
                return Err(CalcError::RangeTooLong { days });
            }
            Ok(Self::Range(start, end))
        } else if input.contains(',') {
            let dates = input
                .split(',')
                .map(parse_date)
                .collect::<CalcResult<Vec<_>>>()?;
            Ok(Self::List(dates))
        } else {
            parse_date(input).map(Self::Single)
        }
    }

    /// Every date the query covers, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            Self::Single(date) => vec![*date],
            Self::Range(start, end) => start.iter_days().take_while(|d| d <= end).collect(),
            Self::List(dates) => dates.clone(),
        }
    }
}

/// Prints the phase for each requested date.
pub struct MoonPhaseSession<E: Ephemeris = AnalyticEphemeris> {
    ephemeris: E,
}

impl MoonPhaseSession {
    /// A session on the analytic ephemeris.
    pub fn new() -> Self {
        Self::with_ephemeris(AnalyticEphemeris)
    }
}

impl Default for MoonPhaseSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ephemeris> MoonPhaseSession<E> {
    /// A session on a given ephemeris.
    pub fn with_ephemeris(ephemeris: E) -> Self {
        Self { ephemeris }
    }
}

impl<E: Ephemeris> Tool for MoonPhaseSession<E> {
    fn title(&self) -> &'static str {
        "Virtual Moon Phases"
    }

    fn banner(&self) -> &'static str {
        HINT
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        let text = match Command::parse(input) {
            Command::Reset => return Ok(Reply::Reset),
            Command::Menu => return Ok(Reply::Menu),
            Command::Proceed => return Err(CalcError::InvalidPhaseDate.into()),
            Command::Text(text) => text,
        };
        let query = DateQuery::parse(text)?;
        let mut lines = Vec::new();
        for date in query.dates() {
            let phase = moon_phase_on(&self.ephemeris, date)?;
            lines.push(format!("{}: {phase}", date.format("%Y-%m-%d")));
        }
        Ok(Reply::Output(format!("{}\n\n{HINT}", lines.join("\n"))))
    }
}
