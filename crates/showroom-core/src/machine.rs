//! Event-driven state machine for the upload widget.
//!
//! One *cycle* runs per accepted selection: decode, then a simulated
//! progress ramp, then a single deferred completion. Timers live in
//! `showroom-io`; the driving task reports timer firings and decode
//! outcomes here as events tagged with the [`CycleId`] they belong to.
//! Events carrying a stale id are discarded, which is what guarantees
//! that re-selecting a file can never let the previous cycle's timers
//! fire a stale completion.

use crate::config::UploadConfig;
use crate::file::SelectedFile;

/// Token identifying one selection cycle.
///
/// Returned by [`UploadMachine::select`] and required by every
/// subsequent event for that cycle. A new selection mints a new id,
/// instantly staling all outstanding events of the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CycleId(u64);

/// Outcome of one simulated progress tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The counter advanced to the contained value (still below 100).
    Advanced(u8),
    /// The counter reached exactly 100; no further ticks should fire.
    Finished,
    /// The event belonged to a superseded cycle and was ignored.
    Stale,
}

/// Render-relevant phase derived from the machine's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    /// No file selected; the dropzone is interactive iff signed in.
    Idle,
    /// A file is selected and the ramp is below 100 %.
    Analysing,
    /// The ramp reached 100 %; completion is pending or delivered.
    Redirecting,
    /// The file could not be read. Terminal for this cycle.
    Failed,
}

/// The upload widget's composed state.
///
/// Holds the current selection, drag flag, progress counter, and the
/// decoded payload awaiting delivery. All mutation happens through
/// event methods that validate the caller's [`CycleId`] first.
#[derive(Debug)]
pub struct UploadMachine {
    config: UploadConfig,
    file: Option<SelectedFile>,
    progress: u8,
    dragging: bool,
    cycle: u64,
    payload: Option<String>,
    failed: bool,
    delivered: bool,
}

impl UploadMachine {
    /// Create an idle machine with the given configuration.
    #[must_use]
    pub const fn new(config: UploadConfig) -> Self {
        Self {
            config,
            file: None,
            progress: 0,
            dragging: false,
            cycle: 0,
            payload: None,
            failed: false,
            delivered: false,
        }
    }

    /// The machine's configuration.
    #[must_use]
    pub const fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// The current selection, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Current progress counter in [0, 100].
    #[must_use]
    pub const fn progress(&self) -> u8 {
        self.progress
    }

    /// Whether a drag is hovering the dropzone.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Render-relevant phase derived from the current state.
    #[must_use]
    pub const fn phase(&self) -> UploadPhase {
        if self.file.is_none() {
            UploadPhase::Idle
        } else if self.failed {
            UploadPhase::Failed
        } else if self.progress >= 100 {
            UploadPhase::Redirecting
        } else {
            UploadPhase::Analysing
        }
    }

    /// Accept a candidate file, starting a new cycle.
    ///
    /// Signed-out selection is a deliberate no-op (policy, not an
    /// error): no state changes and no cycle starts. Signed-in
    /// selection replaces any previous file wholesale, resets the
    /// counter to 0, discards an undelivered payload, and returns the
    /// fresh cycle's id. Outstanding events of the previous cycle
    /// become stale at that moment.
    pub fn select(&mut self, file: SelectedFile, signed_in: bool) -> Option<CycleId> {
        if !signed_in {
            return None;
        }
        self.file = Some(file);
        self.progress = 0;
        self.payload = None;
        self.failed = false;
        self.delivered = false;
        self.cycle += 1;
        Some(CycleId(self.cycle))
    }

    /// Record a successful decode for the given cycle.
    ///
    /// Returns `false` (and changes nothing) when the cycle has been
    /// superseded. Returns `true` when the payload was stored; the
    /// driver may then begin the progress ramp.
    pub fn decode_finished(&mut self, cycle: CycleId, data_uri: String) -> bool {
        if !self.is_current(cycle) {
            return false;
        }
        self.payload = Some(data_uri);
        true
    }

    /// Record a decode failure for the given cycle.
    ///
    /// The cycle enters [`UploadPhase::Failed`] and never progresses;
    /// a subsequent selection replaces it as usual. Returns `false`
    /// when the cycle has been superseded.
    pub fn decode_failed(&mut self, cycle: CycleId) -> bool {
        if !self.is_current(cycle) {
            return false;
        }
        self.failed = true;
        true
    }

    /// Advance the counter by one simulated tick.
    ///
    /// Adds the configured step, clamping to exactly 100. The tick
    /// that reaches 100 reports [`Tick::Finished`] and the driver must
    /// stop ticking; stale cycles report [`Tick::Stale`].
    pub fn tick(&mut self, cycle: CycleId) -> Tick {
        if !self.is_current(cycle) {
            return Tick::Stale;
        }
        // The driver only ticks after decode_finished was accepted.
        debug_assert!(
            self.payload.is_some(),
            "tick fired before decode completed"
        );
        if self.progress >= 100 {
            return Tick::Finished;
        }
        self.progress = self.progress.saturating_add(self.config.progress_step).min(100);
        if self.progress >= 100 {
            Tick::Finished
        } else {
            Tick::Advanced(self.progress)
        }
    }

    /// Hand out the decoded payload after the redirect delay.
    ///
    /// Yields `Some` at most once per cycle, and only when the cycle
    /// is still current and its ramp reached 100 %. The payload moves
    /// out; repeated calls return `None`.
    pub fn take_completion(&mut self, cycle: CycleId) -> Option<String> {
        if !self.is_current(cycle) || self.progress < 100 || self.delivered {
            return None;
        }
        let payload = self.payload.take()?;
        self.delivered = true;
        Some(payload)
    }

    /// A drag entered or moved over the dropzone.
    ///
    /// The dragging affordance only lights up while signed in.
    pub fn drag_enter(&mut self, signed_in: bool) {
        if signed_in {
            self.dragging = true;
        }
    }

    /// A drag left the dropzone, or a drop landed.
    ///
    /// Always clears the flag regardless of sign-in state so the
    /// affordance can never get stuck.
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    const fn is_current(&self, cycle: CycleId) -> bool {
        cycle.0 == self.cycle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> UploadMachine {
        UploadMachine::new(UploadConfig::default())
    }

    fn start_cycle(m: &mut UploadMachine, name: &str) -> CycleId {
        let cycle = m.select(SelectedFile::from_name(name), true).unwrap();
        assert!(m.decode_finished(cycle, format!("data:image/png;base64,{name}")));
        cycle
    }

    /// Run the ramp to 100 % and return the number of ticks it took.
    fn run_ramp(m: &mut UploadMachine, cycle: CycleId) -> u32 {
        let mut ticks = 0;
        loop {
            ticks += 1;
            match m.tick(cycle) {
                Tick::Advanced(_) => {}
                Tick::Finished => return ticks,
                Tick::Stale => panic!("ramp went stale after {ticks} ticks"),
            }
        }
    }

    #[test]
    fn starts_idle() {
        let m = machine();
        assert_eq!(m.phase(), UploadPhase::Idle);
        assert_eq!(m.progress(), 0);
        assert!(m.file().is_none());
        assert!(!m.is_dragging());
    }

    #[test]
    fn signed_out_selection_is_a_silent_no_op() {
        let mut m = machine();
        let cycle = m.select(SelectedFile::from_name("plan.png"), false);
        assert!(cycle.is_none());
        assert_eq!(m.phase(), UploadPhase::Idle);
        assert!(m.file().is_none());
        assert_eq!(m.progress(), 0);
    }

    #[test]
    fn signed_in_selection_enters_analysing_at_zero() {
        let mut m = machine();
        let cycle = m.select(SelectedFile::from_name("plan.png"), true);
        assert!(cycle.is_some());
        assert_eq!(m.phase(), UploadPhase::Analysing);
        assert_eq!(m.progress(), 0);
        assert_eq!(m.file().map(|f| f.name.as_str()), Some("plan.png"));
    }

    #[test]
    fn progress_advances_by_exactly_the_step_each_tick() {
        let mut m = machine();
        let cycle = start_cycle(&mut m, "plan.png");
        for expected in (5..100).step_by(5) {
            #[allow(clippy::cast_possible_truncation)]
            let expected = expected as u8;
            assert_eq!(m.tick(cycle), Tick::Advanced(expected));
            assert_eq!(m.progress(), expected);
        }
    }

    #[test]
    fn progress_clamps_at_exactly_100_for_non_divisor_steps() {
        let config = UploadConfig {
            progress_step: 15,
            ..UploadConfig::default()
        };
        let mut m = UploadMachine::new(config);
        let cycle = start_cycle(&mut m, "plan.png");
        // 15, 30, 45, 60, 75, 90, then the clamp.
        for _ in 0..6 {
            assert!(matches!(m.tick(cycle), Tick::Advanced(_)));
        }
        assert_eq!(m.progress(), 90);
        assert_eq!(m.tick(cycle), Tick::Finished);
        assert_eq!(m.progress(), 100);
    }

    #[test]
    fn reference_cadence_finishes_in_twenty_ticks() {
        let mut m = machine();
        let cycle = start_cycle(&mut m, "plan.png");
        assert_eq!(run_ramp(&mut m, cycle), 20);
        assert_eq!(m.progress(), 100);
        assert_eq!(m.phase(), UploadPhase::Redirecting);
    }

    #[test]
    fn finished_ramp_never_exceeds_100() {
        let mut m = machine();
        let cycle = start_cycle(&mut m, "plan.png");
        run_ramp(&mut m, cycle);
        // A spurious extra tick must not push past 100.
        assert_eq!(m.tick(cycle), Tick::Finished);
        assert_eq!(m.progress(), 100);
    }

    #[test]
    fn completion_delivers_the_decoded_payload_exactly_once() {
        let mut m = machine();
        let cycle = start_cycle(&mut m, "plan.png");
        run_ramp(&mut m, cycle);
        assert_eq!(
            m.take_completion(cycle).as_deref(),
            Some("data:image/png;base64,plan.png")
        );
        assert_eq!(m.take_completion(cycle), None);
    }

    #[test]
    fn completion_requires_a_finished_ramp() {
        let mut m = machine();
        let cycle = start_cycle(&mut m, "plan.png");
        m.tick(cycle);
        assert_eq!(m.take_completion(cycle), None);
    }

    #[test]
    fn stale_ticks_are_discarded() {
        let mut m = machine();
        let first = start_cycle(&mut m, "a.png");
        m.tick(first);
        let second = start_cycle(&mut m, "b.png");
        assert_eq!(m.tick(first), Tick::Stale);
        // The stale tick must not have advanced the new cycle.
        assert_eq!(m.progress(), 0);
        assert_eq!(m.tick(second), Tick::Advanced(5));
    }

    #[test]
    fn stale_decode_results_are_discarded() {
        let mut m = machine();
        let first = m.select(SelectedFile::from_name("a.png"), true).unwrap();
        let second = start_cycle(&mut m, "b.png");
        assert!(!m.decode_finished(first, "data:late".into()));
        run_ramp(&mut m, second);
        assert_eq!(
            m.take_completion(second).as_deref(),
            Some("data:image/png;base64,b.png")
        );
    }

    #[test]
    fn reselection_yields_exactly_one_completion_for_the_newer_file() {
        let mut m = machine();
        let first = start_cycle(&mut m, "a.png");
        // Partway through a's ramp, b takes over.
        for _ in 0..12 {
            m.tick(first);
        }
        let second = start_cycle(&mut m, "b.png");
        assert_eq!(m.progress(), 0, "reselection resets the counter");

        run_ramp(&mut m, second);
        // a's outstanding timers can only observe staleness.
        assert_eq!(m.tick(first), Tick::Stale);
        assert_eq!(m.take_completion(first), None);
        // b completes exactly once.
        assert_eq!(
            m.take_completion(second).as_deref(),
            Some("data:image/png;base64,b.png")
        );
        assert_eq!(m.take_completion(second), None);
    }

    #[test]
    fn completion_after_a_finished_cycle_is_replaced_goes_to_the_new_cycle_only() {
        let mut m = machine();
        let first = start_cycle(&mut m, "a.png");
        run_ramp(&mut m, first);
        // Before a's redirect delay elapses, b takes over.
        let second = start_cycle(&mut m, "b.png");
        assert_eq!(m.take_completion(first), None);
        run_ramp(&mut m, second);
        assert!(m.take_completion(second).is_some());
    }

    #[test]
    fn decode_failure_enters_the_failed_phase() {
        let mut m = machine();
        let cycle = m.select(SelectedFile::from_name("plan.png"), true).unwrap();
        assert!(m.decode_failed(cycle));
        assert_eq!(m.phase(), UploadPhase::Failed);
        assert_eq!(m.progress(), 0);
        assert_eq!(m.take_completion(cycle), None);
    }

    #[test]
    fn failed_cycle_is_replaced_by_a_fresh_selection() {
        let mut m = machine();
        let first = m.select(SelectedFile::from_name("a.png"), true).unwrap();
        m.decode_failed(first);
        let second = start_cycle(&mut m, "b.png");
        assert_eq!(m.phase(), UploadPhase::Analysing);
        run_ramp(&mut m, second);
        assert!(m.take_completion(second).is_some());
    }

    #[test]
    fn stale_decode_failure_is_discarded() {
        let mut m = machine();
        let first = m.select(SelectedFile::from_name("a.png"), true).unwrap();
        let _second = start_cycle(&mut m, "b.png");
        assert!(!m.decode_failed(first));
        assert_eq!(m.phase(), UploadPhase::Analysing);
    }

    #[test]
    fn drag_enter_lights_up_only_while_signed_in() {
        let mut m = machine();
        m.drag_enter(false);
        assert!(!m.is_dragging());
        m.drag_enter(true);
        assert!(m.is_dragging());
    }

    #[test]
    fn drag_end_always_clears_regardless_of_sign_in() {
        let mut m = machine();
        m.drag_enter(true);
        assert!(m.is_dragging());
        // Sign-out between enter and leave must not strand the flag.
        m.drag_end();
        assert!(!m.is_dragging());
        // Clearing while already clear stays clear.
        m.drag_end();
        assert!(!m.is_dragging());
    }

    #[test]
    fn phases_follow_the_cycle() {
        let mut m = machine();
        assert_eq!(m.phase(), UploadPhase::Idle);
        let cycle = start_cycle(&mut m, "plan.png");
        assert_eq!(m.phase(), UploadPhase::Analysing);
        for _ in 0..10 {
            m.tick(cycle);
        }
        assert_eq!(m.phase(), UploadPhase::Analysing);
        run_ramp(&mut m, cycle);
        assert_eq!(m.phase(), UploadPhase::Redirecting);
        // Delivery does not leave Redirecting; only remount resets to Idle.
        m.take_completion(cycle);
        assert_eq!(m.phase(), UploadPhase::Redirecting);
    }
}
