#![forbid(unsafe_code)]

//! Session state and the controller that drives it.
//!
//! [`Session`] is the mutable aggregate: the step log, the current vertex,
//! and the completion flag. [`SessionController`] owns one session together
//! with the layout, the gesture machine, and the presentation collaborators,
//! and exposes the whole command surface (pointer input, reset, skip, load
//! code, undo).
//!
//! # Invariants
//!
//! 1. `step_count() <= ACTION_LIMIT`.
//! 2. `last_vertex()` is the landing/anchor vertex of the newest step, or
//!    vertex 0 when the log is empty.
//! 3. Once completed, nothing is appended until [`Session::reset`].
//! 4. Completion fires exactly once per session: colors freeze and the
//!    summary is presented a single time.
//! 5. A failed gesture or command leaves the session untouched.

use okta_core::event::{PointerEvent, PointerPhase};
use okta_core::geometry::{OctagonLayout, Point, Size, VertexId};
use serde::{Deserialize, Serialize};

use crate::action_log::{ActionLog, Step, StepColor};
use crate::codec::{self, DecodedStep, Digit, SpellCode, SpellSummary, StepKind};
use crate::config::{ConfigError, OktagramConfig};
use crate::error::{GestureRejection, SkipRejection, SpellError};
use crate::interaction::{DragState, GestureOutcome, InteractionMachine, InteractionState, StepIntent};
use crate::presentation::{NullSink, PresentationSink, Progress, Renderer};
use crate::scene::{self, Scene};
use crate::vocabulary::{BuiltinVocabulary, DescriptionSlot, Vocabulary};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Result of appending one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded {
    pub ordinal: usize,
    /// True if this step completed the session.
    pub completed_now: bool,
}

/// The mutable drawing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    log: ActionLog,
    last_vertex: VertexId,
    completed: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an empty session anchored at vertex 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            log: ActionLog::new(),
            last_vertex: VertexId::FIRST,
            completed: false,
        }
    }

    /// The step log.
    #[inline]
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Number of recorded steps.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.log.len()
    }

    /// Running mana cost.
    #[inline]
    pub fn total_cost(&self) -> u32 {
        self.log.total_cost()
    }

    /// Vertex the newest step landed on (vertex 0 before any step).
    #[inline]
    pub fn last_vertex(&self) -> VertexId {
        self.last_vertex
    }

    /// True once all eight steps are recorded.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// The only vertex a new stroke may start from.
    pub fn legal_start(&self) -> VertexId {
        if self.log.is_empty() {
            VertexId::FIRST
        } else {
            self.last_vertex
        }
    }

    /// Record a step produced by live interaction.
    pub fn record(
        &mut self,
        intent: StepIntent,
        vocabulary: &dyn Vocabulary,
    ) -> Result<Recorded, SpellError> {
        let digit = codec::encode_step(intent.kind, intent.target);
        let slot = codec::live_description_slot(intent.kind, intent.target);
        self.append(intent, digit, slot, vocabulary)
    }

    /// Record a step reconstructed from a spell code.
    pub fn record_decoded(
        &mut self,
        step: &DecodedStep,
        vocabulary: &dyn Vocabulary,
    ) -> Result<Recorded, SpellError> {
        let intent = StepIntent {
            kind: step.kind,
            source: step.source,
            target: step.target,
        };
        self.append(intent, step.digit, step.slot, vocabulary)
    }

    fn append(
        &mut self,
        intent: StepIntent,
        digit: Digit,
        slot: DescriptionSlot,
        vocabulary: &dyn Vocabulary,
    ) -> Result<Recorded, SpellError> {
        if self.completed {
            return Err(SpellError::ActionLimitReached);
        }

        let ordinal = self.log.len();
        let step = Step {
            ordinal: ordinal as u8,
            kind: intent.kind,
            target: intent.target,
            source: intent.source,
            digit,
            cost: digit.cost(),
            description: vocabulary.describe(ordinal, slot).to_owned(),
            color: StepColor::Ordinal(ordinal as u8),
        };
        self.log.push(step)?;
        self.last_vertex = intent.target;

        okta_core::debug!(
            ordinal,
            kind = intent.kind.as_str(),
            target = intent.target.index(),
            digit = digit.value(),
            total_cost = self.log.total_cost(),
            "step recorded"
        );

        let completed_now = self.log.is_full();
        if completed_now {
            self.completed = true;
            self.log.finalize_colors();
        }
        Ok(Recorded {
            ordinal,
            completed_now,
        })
    }

    /// Discard every step and return to vertex 0.
    pub fn reset(&mut self) {
        self.log.clear();
        self.last_vertex = VertexId::FIRST;
        self.completed = false;
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Command surface, one variant per user-facing button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Reset,
    Skip,
    LoadCode { code: String },
    Undo,
}

/// What a successful command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The session was cleared.
    Reset,
    /// A step was appended.
    StepRecorded(Recorded),
    /// A code was decoded into a completed session.
    Loaded(SpellCode),
}

// ---------------------------------------------------------------------------
// SessionController
// ---------------------------------------------------------------------------

/// Owns a session and everything needed to drive it.
pub struct SessionController {
    config: OktagramConfig,
    layout: OctagonLayout,
    session: Session,
    interaction: InteractionMachine,
    vocabulary: Box<dyn Vocabulary>,
    sink: Box<dyn PresentationSink>,
    renderer: Option<Box<dyn Renderer>>,
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionController")
            .field("config", &self.config)
            .field("layout", &self.layout)
            .field("session", &self.session)
            .field("interaction", &self.interaction)
            .field("renderer", &self.renderer.as_ref().map(|_| ".."))
            .finish()
    }
}

impl SessionController {
    /// Create a controller for a surface of `size`.
    pub fn new(size: Size, config: OktagramConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            layout: OctagonLayout::compute(size, config.layout.radius_scale),
            config,
            session: Session::new(),
            interaction: InteractionMachine::new(),
            vocabulary: Box::new(BuiltinVocabulary),
            sink: Box::new(NullSink),
            renderer: None,
        })
    }

    /// Replace the description vocabulary.
    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: impl Vocabulary + 'static) -> Self {
        self.vocabulary = Box::new(vocabulary);
        self
    }

    /// Attach a presentation sink.
    #[must_use]
    pub fn with_sink(mut self, sink: impl PresentationSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Attach a renderer. It is invoked after every state change.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// The session.
    #[inline]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current layout.
    #[inline]
    pub fn layout(&self) -> &OctagonLayout {
        &self.layout
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &OktagramConfig {
        &self.config
    }

    /// Gesture state.
    #[inline]
    pub fn interaction_state(&self) -> InteractionState {
        self.interaction.state()
    }

    /// The in-progress drag, if any.
    pub fn drag(&self) -> Option<&DragState> {
        self.interaction.drag()
    }

    /// Digits, description and cost of the current log.
    pub fn summary(&self) -> SpellSummary {
        codec::encode(self.session.log(), &self.vocabulary.presentation_order())
    }

    /// Display list for the current state.
    pub fn scene(&self) -> Scene {
        scene::build_scene(
            &self.layout,
            self.session.log(),
            self.interaction.drag(),
            &self.config.scene,
        )
    }

    /// Recompute the layout for a new surface size.
    ///
    /// History and any drag anchor refer to vertices by index, so both
    /// survive unchanged.
    pub fn resize(&mut self, size: Size) {
        okta_core::debug!(width = size.width, height = size.height, "layout resized");
        self.layout = OctagonLayout::compute(size, self.config.layout.radius_scale);
        self.redraw();
    }

    // -- pointer input -----------------------------------------------------

    /// Dispatch one layout-local pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> GestureOutcome {
        match event.phase {
            PointerPhase::Down => self.pointer_down(event.position),
            PointerPhase::Move => self.pointer_move(event.position),
            PointerPhase::Up => self.pointer_up(event.position),
        }
    }

    /// Pointer pressed.
    pub fn pointer_down(&mut self, p: Point) -> GestureOutcome {
        let outcome =
            self.interaction
                .pointer_down(p, &self.session, &self.layout, &self.config.logic);
        if matches!(outcome, GestureOutcome::DragStarted(_)) {
            self.redraw();
        }
        outcome
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, p: Point) -> GestureOutcome {
        let outcome = self.interaction.pointer_move(p);
        if matches!(outcome, GestureOutcome::DragMoved(_)) {
            self.redraw();
        }
        outcome
    }

    /// Pointer released.
    pub fn pointer_up(&mut self, p: Point) -> GestureOutcome {
        let _span = okta_core::debug_span!("pointer_up", x = p.x, y = p.y).entered();
        let was_dragging = self.interaction.drag().is_some();
        let outcome = self
            .interaction
            .pointer_up(p, &self.session, &self.layout, &self.config.logic);

        let outcome = match outcome {
            GestureOutcome::Committed(intent) => match self.commit(intent) {
                Ok(_) => outcome,
                Err(_) => GestureOutcome::Ignored(GestureRejection::SessionCompleted),
            },
            other => other,
        };
        if was_dragging {
            self.redraw();
        }
        outcome
    }

    // -- commands ----------------------------------------------------------

    /// Execute one command.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, SpellError> {
        match command {
            Command::Reset => {
                self.reset();
                Ok(CommandOutcome::Reset)
            }
            Command::Skip => self.skip(),
            Command::LoadCode { code } => self.load_code(&code),
            Command::Undo => self.undo(),
        }
    }

    /// Discard all steps and return to a fresh session.
    pub fn reset(&mut self) {
        let _span = okta_core::debug_span!("reset").entered();
        self.clear_session();
        self.redraw();
    }

    /// Append a skip step anchored at the current vertex.
    ///
    /// Refused before `min_actions_for_skip` steps and after completion.
    pub fn skip(&mut self) -> Result<CommandOutcome, SpellError> {
        let _span = okta_core::debug_span!("skip").entered();
        let steps = self.session.step_count();
        let required = self.config.logic.min_actions_for_skip;

        let rejection = if self.session.is_completed() {
            Some(SkipRejection::SessionCompleted)
        } else if steps < required {
            Some(SkipRejection::TooEarly { steps, required })
        } else {
            None
        };
        if let Some(rejection) = rejection {
            return Err(self.notify(SpellError::SkipNotAllowed(rejection)));
        }

        let recorded = self.commit(StepIntent::skip(self.session.last_vertex()))?;
        self.redraw();
        Ok(CommandOutcome::StepRecorded(recorded))
    }

    /// Replace the session with the decoding of `code`.
    ///
    /// Surrounding whitespace is ignored. An invalid code leaves the current
    /// session untouched.
    pub fn load_code(&mut self, code: &str) -> Result<CommandOutcome, SpellError> {
        let _span = okta_core::debug_span!("load_code").entered();
        let parsed: SpellCode = match code.trim().parse() {
            Ok(parsed) => parsed,
            Err(err) => return Err(self.notify(SpellError::InvalidCodeFormat(err))),
        };

        self.clear_session();
        for step in codec::decode(&parsed) {
            let recorded = self.session.record_decoded(&step, self.vocabulary.as_ref())?;
            self.after_step(recorded);
        }
        self.redraw();
        Ok(CommandOutcome::Loaded(parsed))
    }

    /// Undo hook. Not implemented; leaves the session untouched.
    pub fn undo(&mut self) -> Result<CommandOutcome, SpellError> {
        okta_core::debug!("undo requested");
        Err(self.notify(SpellError::Unsupported("undo")))
    }

    // -- internals ---------------------------------------------------------

    fn commit(&mut self, intent: StepIntent) -> Result<Recorded, SpellError> {
        let recorded = self.session.record(intent, self.vocabulary.as_ref())?;
        self.after_step(recorded);
        Ok(recorded)
    }

    fn after_step(&mut self, recorded: Recorded) {
        let progress = self.progress();
        self.sink.progress(&progress);
        if recorded.completed_now {
            let summary = self.summary();
            okta_core::info!(
                code = %summary.code,
                total_cost = summary.total_cost,
                "spell completed"
            );
            self.sink.completed(&summary);
        }
    }

    fn clear_session(&mut self) {
        self.session.reset();
        self.interaction.cancel();
        self.sink.cleared();
        let progress = self.progress();
        self.sink.progress(&progress);
    }

    fn progress(&self) -> Progress {
        let step_count = self.session.step_count();
        let title = if self.session.is_completed() {
            None
        } else {
            self.vocabulary.step_title(step_count).map(str::to_owned)
        };
        Progress {
            step_count,
            total_cost: self.session.total_cost(),
            title,
        }
    }

    fn notify(&mut self, err: SpellError) -> SpellError {
        okta_core::warn!(error = %err, "command rejected");
        if err.is_user_visible() {
            self.sink.notice(&err);
        }
        err
    }

    fn redraw(&mut self) {
        if self.renderer.is_none() {
            return;
        }
        let scene = self.scene();
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&scene);
        }
    }
}

/// Steps of a session as `(kind, target)` pairs; handy in tests and logs.
pub fn step_shape(session: &Session) -> Vec<(StepKind, VertexId)> {
    session
        .log()
        .steps()
        .iter()
        .map(|s| (s.kind, s.target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{PresentationEvent, RecordingSink};
    use crate::vocabulary::DescriptionRow;

    fn v(i: u8) -> VertexId {
        VertexId::new(i).unwrap()
    }

    fn controller() -> (SessionController, RecordingSink) {
        let sink = RecordingSink::new();
        let ctl = SessionController::new(Size::square(600.0), OktagramConfig::default())
            .unwrap()
            .with_sink(sink.clone());
        (ctl, sink)
    }

    fn drag(ctl: &mut SessionController, from: VertexId, to: VertexId) -> GestureOutcome {
        let a = ctl.layout().vertex(from);
        let b = ctl.layout().vertex(to);
        ctl.pointer_down(a);
        ctl.pointer_move(a.midpoint(b));
        ctl.pointer_up(b)
    }

    fn tap(ctl: &mut SessionController, at: VertexId) -> GestureOutcome {
        let p = ctl.layout().vertex(at);
        ctl.pointer_down(p);
        ctl.pointer_up(p)
    }

    #[test]
    fn fresh_session_state() {
        let (ctl, _) = controller();
        assert_eq!(ctl.session().step_count(), 0);
        assert_eq!(ctl.session().last_vertex(), VertexId::FIRST);
        assert!(!ctl.session().is_completed());
        assert_eq!(ctl.interaction_state(), InteractionState::Idle);
    }

    #[test]
    fn tap_on_first_vertex_costs_eight() {
        let (mut ctl, _) = controller();
        let out = tap(&mut ctl, v(0));
        assert!(matches!(out, GestureOutcome::Committed(_)));
        let step = &ctl.session().log().steps()[0];
        assert_eq!(step.kind, StepKind::Marker);
        assert_eq!(step.digit.value(), 8);
        assert_eq!(step.cost, 8);
        assert_eq!(step.description, "elementem chaosu ");
    }

    #[test]
    fn line_to_vertex_zero_later_encodes_eight() {
        let (mut ctl, _) = controller();
        drag(&mut ctl, v(0), v(3));
        drag(&mut ctl, v(3), v(0));
        assert_eq!(ctl.summary().code, "38");
        assert_eq!(ctl.session().total_cost(), 11);
        assert_eq!(ctl.session().last_vertex(), v(0));
    }

    #[test]
    fn skip_requires_four_steps() {
        let (mut ctl, sink) = controller();
        drag(&mut ctl, v(0), v(1));
        let before = ctl.session().clone();
        let err = ctl.skip().unwrap_err();
        assert_eq!(
            err,
            SpellError::SkipNotAllowed(SkipRejection::TooEarly {
                steps: 1,
                required: 4
            })
        );
        assert_eq!(ctl.session(), &before);
        assert!(matches!(
            sink.events().last(),
            Some(PresentationEvent::Notice { .. })
        ));
    }

    #[test]
    fn skip_after_four_steps_appends_zero_cost_step() {
        let (mut ctl, _) = controller();
        drag(&mut ctl, v(0), v(1));
        drag(&mut ctl, v(1), v(2));
        tap(&mut ctl, v(2));
        drag(&mut ctl, v(2), v(5));
        let cost = ctl.session().total_cost();
        let out = ctl.skip().unwrap();
        assert_eq!(
            out,
            CommandOutcome::StepRecorded(Recorded {
                ordinal: 4,
                completed_now: false
            })
        );
        let step = ctl.session().log().last().unwrap();
        assert_eq!(step.kind, StepKind::Skip);
        assert_eq!(step.target, v(5));
        assert_eq!(step.cost, 0);
        assert_eq!(step.description, "i w zasięgu 1, ");
        assert_eq!(ctl.session().total_cost(), cost);
        assert_eq!(ctl.session().legal_start(), v(5));
    }

    #[test]
    fn completion_fires_once_and_freezes_colors() {
        let (mut ctl, sink) = controller();
        for i in 1..=8u8 {
            let from = ctl.session().legal_start();
            drag(&mut ctl, from, VertexId::wrapping(i as usize));
        }
        assert!(ctl.session().is_completed());
        assert!(
            ctl.session()
                .log()
                .steps()
                .iter()
                .all(|s| s.color == StepColor::Finalized)
        );

        // Further input is inert.
        let before = ctl.session().clone();
        let start = ctl.session().legal_start();
        tap(&mut ctl, start);
        assert_eq!(
            ctl.skip().unwrap_err(),
            SpellError::SkipNotAllowed(SkipRejection::SessionCompleted)
        );
        assert_eq!(ctl.session(), &before);
        assert_eq!(sink.completions().len(), 1);
        assert_eq!(sink.completions()[0].code, "12345678");
    }

    #[test]
    fn load_code_replaces_session() {
        let (mut ctl, sink) = controller();
        drag(&mut ctl, v(0), v(4));
        let out = ctl.load_code(" 81234567\n").unwrap();
        assert_eq!(out, CommandOutcome::Loaded("81234567".parse().unwrap()));
        assert_eq!(ctl.session().step_count(), 8);
        assert!(ctl.session().is_completed());
        assert_eq!(ctl.session().total_cost(), 36);
        assert_eq!(ctl.summary().code, "81234567");
        assert_eq!(sink.completions().len(), 1);
    }

    #[test]
    fn invalid_code_leaves_session_alone() {
        let (mut ctl, sink) = controller();
        drag(&mut ctl, v(0), v(4));
        let before = ctl.session().clone();
        let err = ctl.load_code("1234567").unwrap_err();
        assert!(matches!(err, SpellError::InvalidCodeFormat(_)));
        assert_eq!(ctl.session(), &before);
        assert!(sink.completions().is_empty());
    }

    #[test]
    fn undo_is_unsupported() {
        let (mut ctl, _) = controller();
        drag(&mut ctl, v(0), v(4));
        let before = ctl.session().clone();
        assert_eq!(ctl.apply(Command::Undo), Err(SpellError::Unsupported("undo")));
        assert_eq!(ctl.session(), &before);
    }

    #[test]
    fn reset_restores_vertex_zero() {
        let (mut ctl, sink) = controller();
        drag(&mut ctl, v(0), v(4));
        ctl.apply(Command::Reset).unwrap();
        assert_eq!(ctl.session(), &Session::new());
        assert!(matches!(
            sink.events().last(),
            Some(PresentationEvent::Progress(Progress { step_count: 0, .. }))
        ));
    }

    #[test]
    fn resize_mid_drag_resolves_by_index() {
        let (mut ctl, _) = controller();
        let start = ctl.layout().vertex(v(0));
        ctl.pointer_down(start);
        ctl.pointer_move(start.offset(0.0, 40.0));
        ctl.resize(Size::new(1200.0, 900.0));
        let target = ctl.layout().vertex(v(3));
        let out = ctl.pointer_up(target);
        assert_eq!(out, GestureOutcome::Committed(StepIntent::line(v(0), v(3))));
    }

    #[test]
    fn progress_titles_follow_step_count() {
        let (mut ctl, sink) = controller();
        drag(&mut ctl, v(0), v(2));
        let last = sink.progress_updates().last().cloned().unwrap();
        assert_eq!(last.step_count, 1);
        assert_eq!(last.title.as_deref(), Some("MOC"));
    }

    #[test]
    fn command_json_shape() {
        let cmd: Command =
            serde_json::from_str(r#"{"command":"load_code","code":"81234567"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::LoadCode {
                code: "81234567".into()
            }
        );
        let cmd: Command = serde_json::from_str(r#"{"command":"skip"}"#).unwrap();
        assert_eq!(cmd, Command::Skip);
    }

    #[test]
    fn step_shape_lists_kinds() {
        let (mut ctl, _) = controller();
        ctl.load_code("88000000").unwrap();
        let shape = step_shape(ctl.session());
        assert_eq!(shape[0], (StepKind::Marker, v(0)));
        assert_eq!(shape[1], (StepKind::Marker, v(0)));
        assert!(shape[2..].iter().all(|s| *s == (StepKind::Skip, v(0))));
    }

    struct Plain;

    const PLAIN_ROW: DescriptionRow<'static> = DescriptionRow {
        vertices: ["0", "1", "2", "3", "4", "5", "6", "7"],
        skip: Some("-"),
    };

    impl Vocabulary for Plain {
        fn description_row(&self, _ordinal: usize) -> DescriptionRow<'_> {
            PLAIN_ROW
        }

        fn step_title(&self, step_count: usize) -> Option<&str> {
            ["A", "B", "C", "D", "E", "F", "G", "H"].get(step_count).copied()
        }

        fn presentation_order(&self) -> [usize; codec::ACTION_LIMIT] {
            [0, 1, 2, 3, 4, 5, 6, 7]
        }
    }

    #[test]
    fn custom_vocabulary_drives_summary_and_progress() {
        let sink = RecordingSink::new();
        let mut ctl = SessionController::new(Size::square(600.0), OktagramConfig::default())
            .unwrap()
            .with_vocabulary(Plain)
            .with_sink(sink.clone());

        drag(&mut ctl, v(0), v(3));
        drag(&mut ctl, v(3), v(5));
        tap(&mut ctl, v(5));

        let summary = ctl.summary();
        assert_eq!(summary.code, "355");
        assert_eq!(summary.description, "355");
        assert_eq!(summary.total_cost, 13);

        let titles: Vec<Option<String>> = sink
            .progress_updates()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(
            titles,
            vec![Some("B".into()), Some("C".into()), Some("D".into())]
        );
    }

    #[test]
    fn partial_session_summary_skips_missing_ordinals() {
        let (mut ctl, _) = controller();
        drag(&mut ctl, v(0), v(1));
        drag(&mut ctl, v(1), v(2));
        tap(&mut ctl, v(2));

        let summary = ctl.summary();
        assert_eq!(summary.code, "122");
        assert_eq!(summary.description, "zaatakuj elementem światła za K4.");
        assert_eq!(summary.total_cost, 5);
    }
}
