//! Birth charts: sign placements of the Sun, Moon, and planets, plus the
//! Ascendant and Midheaven for the birthplace.

use chrono::{DateTime, TimeZone, Utc};
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use vet_core::{Command, Reply, Tool, ToolError, ToolResult};

use super::body::Body;
use super::coords::OBLIQUITY_J2000_DEG;
use super::ephemeris::{AnalyticEphemeris, Ephemeris, Observer};
use super::time::{julian_day, local_sidereal_deg};
use super::zodiac::ZodiacSign;
use crate::error::{AstroError, AstroResult, CalcError, CalcResult};

const HINT: &str = "[Enter] to start, [R] to reset, [M] for menu.";

/// Ecliptic longitude rising in the east, degrees.
///
/// `lst_deg` is the local sidereal time (the right ascension of the
/// meridian) in degrees.
pub fn ascendant_deg(lst_deg: f64, latitude_deg: f64) -> f64 {
    let ramc = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(
        ramc.cos(),
        -(ramc.sin() * eps.cos() + phi.tan() * eps.sin()),
    );
    asc.to_degrees().rem_euclid(360.0)
}

/// Ecliptic longitude culminating on the meridian, degrees.
pub fn midheaven_deg(lst_deg: f64) -> f64 {
    let ramc = lst_deg.to_radians();
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    f64::atan2(ramc.sin(), ramc.cos() * eps.cos())
        .to_degrees()
        .rem_euclid(360.0)
}

/// Where one body stands in the zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// The body.
    pub body: Body,
    /// Geocentric ecliptic longitude, degrees.
    pub longitude: f64,
    /// Sign containing the longitude.
    pub sign: ZodiacSign,
}

impl Placement {
    fn new(body: Body, longitude: f64) -> Self {
        Self {
            body,
            longitude,
            sign: ZodiacSign::from_longitude(longitude),
        }
    }
}

/// A computed chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    /// Moment of birth.
    pub at: DateTime<Utc>,
    /// Place of birth.
    pub observer: Observer,
    /// One placement per chart body.
    pub placements: Vec<Placement>,
    /// Ascendant longitude, degrees.
    pub ascendant: f64,
    /// Midheaven longitude, degrees.
    pub midheaven: f64,
}

impl BirthChart {
    /// Compute the chart for a moment and place.
    pub fn compute(
        ephemeris: &impl Ephemeris,
        at: DateTime<Utc>,
        observer: Observer,
    ) -> AstroResult<Self> {
        let placements = Body::CHART
            .iter()
            .map(|&body| {
                let position = ephemeris.geocentric(body, at)?;
                Ok(Placement::new(body, position.longitude_deg()))
            })
            .collect::<AstroResult<Vec<_>>>()?;
        let lst = local_sidereal_deg(julian_day(at), observer.longitude);
        let chart = Self {
            at,
            observer,
            placements,
            ascendant: ascendant_deg(lst, observer.latitude),
            midheaven: midheaven_deg(lst),
        };
        tracing::debug!(%at, ascendant = chart.ascendant, "computed birth chart");
        Ok(chart)
    }

    /// The chart as a table.
    pub fn render(&self) -> String {
        let mut table = Table::new();
        table.set_header(vec!["Body", "Sign", "Longitude"]);
        for p in &self.placements {
            table.add_row(vec![
                format!("{} {}", p.body.name(), p.body.glyph()),
                p.sign.to_string(),
                format!("{:.2}°", p.longitude),
            ]);
        }
        for (name, longitude) in [("Ascendant", self.ascendant), ("Midheaven", self.midheaven)] {
            table.add_row(vec![
                name.to_string(),
                ZodiacSign::from_longitude(longitude).to_string(),
                format!("{longitude:.2}°"),
            ]);
        }
        format!(
            "Astrological Birth Chart ({} UTC, {:.4}, {:.4}):\n{table}",
            self.at.format("%Y-%m-%d %H:%M"),
            self.observer.latitude,
            self.observer.longitude
        )
    }
}

fn numbers<const N: usize>(input: &str) -> Result<[u32; N], String> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() != N {
        return Err(format!("expected {N} numbers, got {}", parts.len()));
    }
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("'{part}' is not a number"))?;
    }
    Ok(out)
}

fn parse_date(input: &str) -> CalcResult<[u32; 3]> {
    numbers::<3>(input).map_err(CalcError::InvalidDate)
}

fn parse_time(input: &str) -> CalcResult<[u32; 2]> {
    numbers::<2>(input).map_err(CalcError::InvalidTime)
}

fn parse_coordinate(input: &str) -> CalcResult<f64> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| CalcError::InvalidCoordinate(input.to_string()))
}

enum Stage {
    Idle,
    AskDate,
    AskTime {
        date: [u32; 3],
    },
    AskLatitude {
        date: [u32; 3],
        time: [u32; 2],
    },
    AskLongitude {
        date: [u32; 3],
        time: [u32; 2],
        latitude: f64,
    },
}

/// Collects birth data one field at a time, then prints the chart.
pub struct BirthChartSession<E: Ephemeris = AnalyticEphemeris> {
    ephemeris: E,
    stage: Stage,
}

impl BirthChartSession {
    /// A session on the analytic ephemeris.
    pub fn new() -> Self {
        Self::with_ephemeris(AnalyticEphemeris)
    }
}

impl Default for BirthChartSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ephemeris> BirthChartSession<E> {
    /// A session on a given ephemeris.
    pub fn with_ephemeris(ephemeris: E) -> Self {
        Self {
            ephemeris,
            stage: Stage::Idle,
        }
    }

    fn chart(
        &self,
        date: [u32; 3],
        time: [u32; 2],
        latitude: f64,
        longitude: f64,
    ) -> AstroResult<BirthChart> {
        let [year, month, day] = date;
        let [hour, minute] = time;
        let invalid = || {
            AstroError::InvalidInstant(format!(
                "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}"
            ))
        };
        let year = i32::try_from(year).map_err(|_| invalid())?;
        let at = Utc
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .single()
            .ok_or_else(invalid)?;
        let observer = Observer::new(latitude, longitude)?;
        BirthChart::compute(&self.ephemeris, at, observer)
    }
}

impl<E: Ephemeris> Tool for BirthChartSession<E> {
    fn title(&self) -> &'static str {
        "Virtual Birth Chart"
    }

    fn banner(&self) -> &'static str {
        HINT
    }

    fn prompt(&self) -> String {
        match self.stage {
            Stage::Idle => "",
            Stage::AskDate => "Birth date (YYYY MM DD): ",
            Stage::AskTime { .. } => "Birth time (HH MM, 24-hour): ",
            Stage::AskLatitude { .. } => "Latitude (e.g., 48.8566): ",
            Stage::AskLongitude { .. } => "Longitude (e.g., 2.3522): ",
        }
        .to_string()
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        let command = Command::parse(input);
        match command {
            Command::Reset => return Ok(Reply::Reset),
            Command::Menu => return Ok(Reply::Menu),
            _ => {}
        }
        self.stage = match self.stage {
            Stage::Idle => match command {
                Command::Proceed => Stage::AskDate,
                _ => return Err(ToolError::InvalidCommand),
            },
            Stage::AskDate => Stage::AskTime {
                date: parse_date(input)?,
            },
            Stage::AskTime { date } => Stage::AskLatitude {
                date,
                time: parse_time(input)?,
            },
            Stage::AskLatitude { date, time } => Stage::AskLongitude {
                date,
                time,
                latitude: parse_coordinate(input)?,
            },
            Stage::AskLongitude {
                date,
                time,
                latitude,
            } => {
                let longitude = parse_coordinate(input)?;
                self.stage = Stage::Idle;
                let chart = self.chart(date, time, latitude, longitude)?;
                return Ok(Reply::Output(format!("{}\n\n{HINT}", chart.render())));
            }
        };
        Ok(Reply::silent())
    }
}
