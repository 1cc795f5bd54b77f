//! Right ascension and declination of every body at a given instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vet_core::{Command, Reply, Tool, ToolError, ToolResult};

use super::body::Body;
use super::coords::Equatorial;
use super::ephemeris::{AnalyticEphemeris, Ephemeris};
use crate::error::AstroResult;

const HINT: &str = "[Enter] to start, [R] to reset, [M] for menu.";

/// A body and where it stands on the sky.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// The body.
    pub body: Body,
    /// Geocentric equatorial coordinates; heliocentric for Earth.
    pub equatorial: Equatorial,
}

impl BodyPosition {
    /// e.g. `☉ Sun at (RA: 18.75h, Dec: -23.03°)`.
    pub fn line(&self) -> String {
        format!(
            "{} {} at (RA: {:.2}h, Dec: {:.2}°)",
            self.body.glyph(),
            self.body.name(),
            self.equatorial.ra_hours,
            self.equatorial.dec_deg
        )
    }
}

/// Positions of every listed body at `at`. Earth is given as seen from
/// the Sun.
pub fn positions_at(
    ephemeris: &impl Ephemeris,
    at: DateTime<Utc>,
) -> AstroResult<Vec<BodyPosition>> {
    Body::POSITIONS
        .iter()
        .map(|&body| {
            let position = match body {
                Body::Earth => ephemeris.heliocentric(body, at)?,
                _ => ephemeris.geocentric(body, at)?,
            };
            Ok(BodyPosition {
                body,
                equatorial: position.to_equatorial(),
            })
        })
        .collect()
}

/// Prints current positions on each Enter.
pub struct PositionsSession<E: Ephemeris = AnalyticEphemeris> {
    ephemeris: E,
    clock: fn() -> DateTime<Utc>,
}

impl PositionsSession {
    /// A session on the analytic ephemeris and the system clock.
    pub fn new() -> Self {
        Self::with_ephemeris(AnalyticEphemeris)
    }
}

impl Default for PositionsSession {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ephemeris> PositionsSession<E> {
    /// A session on a given ephemeris.
    pub fn with_ephemeris(ephemeris: E) -> Self {
        Self {
            ephemeris,
            clock: Utc::now,
        }
    }

    /// Replace the clock, for fixed-time output.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }
}

impl<E: Ephemeris> Tool for PositionsSession<E> {
    fn title(&self) -> &'static str {
        "Virtual Planet Positions"
    }

    fn banner(&self) -> &'static str {
        HINT
    }

    fn handle(&mut self, input: &str) -> ToolResult<Reply> {
        match Command::parse(input) {
            Command::Reset => Ok(Reply::Reset),
            Command::Menu => Ok(Reply::Menu),
            Command::Text(_) => Err(ToolError::InvalidCommand),
            Command::Proceed => {
                let at = (self.clock)();
                let lines: Vec<String> = positions_at(&self.ephemeris, at)?
                    .iter()
                    .map(BodyPosition::line)
                    .collect();
                Ok(Reply::Output(format!(
                    "Celestial Bodies Positions:\n{}\n\n{HINT}",
                    lines.join("\n")
                )))
            }
        }
    }
}
