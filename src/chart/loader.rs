use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::chart::sha256_hex;
use super::{Chart, ChartError, ChartParseError, DegenerateNoteWarning, ParseReason};
use crate::model::{Lane, Note, NoteId};

/// Number of columns in a chart row:
/// `user_played, instrument, velocity, pitch, start, end`.
pub const CHART_COLUMNS: usize = 6;

/// What to do with a malformed chart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Drop the line, log a warning and keep loading.
    #[default]
    Skip,
    /// Fail the whole load on the first malformed line.
    Abort,
}

/// Result of loading a chart.
#[derive(Debug)]
pub struct ChartLoadResult {
    pub chart: Chart,
    /// Lines dropped under `ParsePolicy::Skip`.
    pub skipped: Vec<ChartParseError>,
}

pub struct ChartLoader {
    policy: ParsePolicy,
}

impl ChartLoader {
    pub fn new(policy: ParsePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ParsePolicy {
        self.policy
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ChartLoadResult, ChartError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ChartError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let result = self.parse(&source)?;
        info!(
            path = %path.display(),
            notes = result.chart.note_count(),
            skipped = result.skipped.len(),
            "Loaded chart"
        );
        Ok(result)
    }

    pub fn parse(&self, source: &str) -> Result<ChartLoadResult, ChartError> {
        let mut lines = source.lines().enumerate();
        if lines.next().is_none() {
            return Err(ChartError::Empty);
        }

        let mut notes = Vec::new();
        let mut warnings = Vec::new();
        let mut skipped = Vec::new();

        for (index, raw) in lines {
            let line_no = index + 1;
            if raw.trim().is_empty() {
                continue;
            }

            let id = NoteId(notes.len() as u32 + skipped.len() as u32 + 1);
            match parse_line(line_no, id, raw) {
                Ok(note) => {
                    if note.is_degenerate() {
                        let warning = DegenerateNoteWarning {
                            id: note.id,
                            line: Some(line_no),
                            duration_ms: note.duration_ms,
                        };
                        warn!(%warning, "Degenerate note will expire immediately");
                        warnings.push(warning);
                    }
                    notes.push(Arc::new(note));
                }
                Err(err) => match self.policy {
                    ParsePolicy::Abort => return Err(err.into()),
                    ParsePolicy::Skip => {
                        warn!(line = err.line, reason = %err.reason, "Skipping malformed chart line");
                        skipped.push(err);
                    }
                },
            }
        }

        Ok(ChartLoadResult {
            chart: Chart {
                notes,
                warnings,
                sha256: sha256_hex(source.as_bytes()),
            },
            skipped,
        })
    }
}

impl Default for ChartLoader {
    fn default() -> Self {
        Self::new(ParsePolicy::default())
    }
}

fn parse_line(line: usize, id: NoteId, raw: &str) -> Result<Note, ChartParseError> {
    let fail = |reason| ChartParseError { line, reason };

    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    if fields.len() != CHART_COLUMNS {
        return Err(fail(ParseReason::ColumnCount {
            expected: CHART_COLUMNS,
            found: fields.len(),
        }));
    }

    let user_played = parse_bool(fields[0])
        .ok_or_else(|| fail(ParseReason::InvalidBool(fields[0].to_string())))?;
    let instrument = fields[1].to_string();
    let velocity = parse_number(fields[2], "velocity").map_err(fail)?;
    let pitch = fields[3].parse::<i32>().map_err(|_| {
        fail(ParseReason::InvalidNumber {
            column: "pitch",
            value: fields[3].to_string(),
        })
    })?;
    let start_s = parse_number(fields[4], "start").map_err(fail)?;
    let end_s = parse_number(fields[5], "end").map_err(fail)?;

    let start_time_ms = start_s * 1000.0;
    let end_time_ms = end_s * 1000.0;

    Ok(Note {
        id,
        lane: Lane::from_pitch(pitch),
        instrument,
        velocity,
        pitch,
        user_played,
        start_time_ms,
        duration_ms: end_time_ms - start_time_ms,
    })
}

fn parse_number(value: &str, column: &'static str) -> Result<f64, ParseReason> {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ParseReason::InvalidNumber {
            column,
            value: value.to_string(),
        }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
