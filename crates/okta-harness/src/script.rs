#![forbid(unsafe_code)]

//! JSON-lines input scripts.
//!
//! One record per line. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"type":"resize","width":800,"height":600}
//! {"type":"origin","x":10,"y":20}
//! {"type":"pointer","phase":"down","source":"mouse","client":{"x":310,"y":92}}
//! {"type":"command","command":"load_code","code":"81234567"}
//! ```
//!
//! [`replay`] feeds the records through a fresh controller and reports every
//! presentation event, every refused command, and a closing summary.

use okta_core::event::{InputAdapter, RawPointerInput};
use okta_core::geometry::{Point, Size};
use okta_spell::config::ConfigError;
use okta_spell::{
    Command, GestureOutcome, OktagramConfig, PresentationEvent, RecordingSink, SessionController,
    SpellSummary,
};
use serde::{Deserialize, Serialize};

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptRecord {
    /// Surface resized.
    Resize { width: f32, height: f32 },
    /// Surface moved within the host; later pointer coordinates are client
    /// coordinates relative to this origin.
    Origin { x: f32, y: f32 },
    /// Raw host pointer input.
    Pointer(RawPointerInput),
    /// Button press.
    Command(Command),
}

/// A parsed script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    pub records: Vec<ScriptRecord>,
}

/// Error parsing a JSONL script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptParseError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for ScriptParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ScriptParseError {}

impl Script {
    /// Parse a JSONL script.
    pub fn from_jsonl(input: &str) -> Result<Self, ScriptParseError> {
        let mut records = Vec::new();
        for (line_num, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let record = serde_json::from_str(line).map_err(|err| ScriptParseError {
                line: line_num + 1,
                message: err.to_string(),
            })?;
            records.push(record);
        }
        Ok(Self { records })
    }

    /// Serialize as JSONL.
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            if let Ok(line) = serde_json::to_string(record) {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out
    }
}

/// One line of replay output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum ReplayLine {
    /// Something the presentation sink received.
    Presentation(PresentationEvent),
    /// A command was refused.
    Rejected { line: usize, error: String },
    /// Final state after the last record.
    Summary {
        step_count: usize,
        completed: bool,
        code: String,
        description: String,
        total_cost: u32,
    },
}

/// Everything a replay produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    pub lines: Vec<ReplayLine>,
    /// Number of gestures that recorded a step.
    pub committed_gestures: usize,
}

impl ReplayReport {
    /// Serialize as JSONL.
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            if let Ok(json) = serde_json::to_string(line) {
                out.push_str(&json);
                out.push('\n');
            }
        }
        out
    }

    /// The closing summary.
    pub fn summary(&self) -> Option<SpellSummary> {
        self.lines.iter().rev().find_map(|l| match l {
            ReplayLine::Summary {
                code,
                description,
                total_cost,
                ..
            } => Some(SpellSummary {
                code: code.clone(),
                description: description.clone(),
                total_cost: *total_cost,
            }),
            _ => None,
        })
    }

    /// Presentation events, in order.
    pub fn presentation(&self) -> impl Iterator<Item = &PresentationEvent> + '_ {
        self.lines.iter().filter_map(|l| match l {
            ReplayLine::Presentation(e) => Some(e),
            _ => None,
        })
    }
}

/// Run a script against a fresh controller.
///
/// Record line numbers in [`ReplayLine::Rejected`] count records, starting
/// at 1.
pub fn replay(
    script: &Script,
    size: Size,
    config: OktagramConfig,
) -> Result<ReplayReport, ConfigError> {
    let sink = RecordingSink::new();
    let mut ctl = SessionController::new(size, config)?.with_sink(sink.clone());
    let mut adapter = InputAdapter::new(Point::new(0.0, 0.0));
    let mut report = ReplayReport::default();

    for (idx, record) in script.records.iter().enumerate() {
        let _span = tracing::debug_span!("record", line = idx + 1).entered();
        match record {
            ScriptRecord::Resize { width, height } => {
                ctl.resize(Size::new(*width, *height));
            }
            ScriptRecord::Origin { x, y } => {
                adapter.set_origin(Point::new(*x, *y));
            }
            ScriptRecord::Pointer(raw) => {
                if let Some(event) = adapter.normalize(*raw) {
                    let outcome = ctl.handle_pointer(event);
                    if let GestureOutcome::Committed(_) = outcome {
                        report.committed_gestures += 1;
                    } else if let Some(err) = outcome.error() {
                        tracing::trace!(error = %err, "pointer event ignored");
                    }
                }
            }
            ScriptRecord::Command(command) => {
                if let Err(err) = ctl.apply(command.clone()) {
                    tracing::debug!(error = %err, "command refused");
                    report.lines.push(ReplayLine::Rejected {
                        line: idx + 1,
                        error: err.to_string(),
                    });
                }
            }
        }
        report
            .lines
            .extend(sink.drain().into_iter().map(ReplayLine::Presentation));
    }

    let summary = ctl.summary();
    report.lines.push(ReplayLine::Summary {
        step_count: ctl.session().step_count(),
        completed: ctl.session().is_completed(),
        code: summary.code,
        description: summary.description,
        total_cost: summary.total_cost,
    });
    Ok(report)
}
