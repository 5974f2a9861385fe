#![forbid(unsafe_code)]

//! Run lifecycle: generate or shuffle, then step until sorted.
//!
//! The controller exclusively owns the data, the algorithm state, the metrics
//! and the progress ratchet. An external driver calls [`SortController::tick`]
//! once per frame and renders the returned [`StepSnapshot`]; pacing delays
//! are the driver's business and happen outside the timed region.
//!
//! ```text
//!   reset(kind, true) ──────────────────────────┐
//!                                               ▼
//!   reset(kind, false) ─▶ Shuffling ─(cursor == len)─▶ Stepping ─(finished)─▶ Sorted
//! ```

use crate::algorithm::AlgorithmKind;
use crate::clock::{Clock, MonotonicClock};
use crate::config::{ConfigError, EngineConfig};
use crate::mailbox::{SILENCE, SonificationMailbox};
use crate::metrics::Metrics;
use crate::progress::{ProgressEstimator, raw_progress};
use crate::rng::SeededRng;
use crate::stepper::{AlgorithmState, Highlights};

/// Where the controller is in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but never reset.
    Idle,
    /// Shuffling in place, one swap per tick; `cursor` is the next slot.
    Shuffling { cursor: usize },
    /// Stepping the active algorithm.
    Stepping,
    /// Finished; ticks are no-ops.
    Sorted,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSnapshot<'a> {
    pub data: &'a [u32],
    pub kind: AlgorithmKind,
    pub phase: Phase,
    pub highlights: Highlights,
    pub sorted: bool,
    /// Ratcheted progress in `[0, 1]`.
    pub progress: f32,
    pub metrics: Metrics,
    /// A merge is copying values back; drivers may slow these ticks down.
    pub merging: bool,
}

/// Owns one sorting run and advances it a tick at a time.
#[derive(Debug)]
pub struct SortController<C: Clock = MonotonicClock> {
    config: EngineConfig,
    kind: AlgorithmKind,
    data: Vec<u32>,
    state: AlgorithmState,
    phase: Phase,
    metrics: Metrics,
    progress: ProgressEstimator,
    mailbox: SonificationMailbox,
    rng: SeededRng,
    clock: C,
}

impl SortController<MonotonicClock> {
    /// Create a controller timed by the system monotonic clock.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> SortController<C> {
    /// Create a controller with a custom clock.
    ///
    /// The initial data is generated immediately, but nothing runs until the
    /// first [`reset`](Self::reset).
    pub fn with_clock(config: EngineConfig, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SeededRng::new(config.seed);
        let data = generate(&config, &mut rng);
        let kind = AlgorithmKind::default();
        let state = AlgorithmState::new(kind, &data);
        Ok(Self {
            config,
            kind,
            data,
            state,
            phase: Phase::Idle,
            metrics: Metrics::default(),
            progress: ProgressEstimator::new(),
            mailbox: SonificationMailbox::new(),
            rng,
            clock,
        })
    }

    /// Start a new run with `kind`.
    ///
    /// With `regenerate`, fresh data is drawn and stepping starts on the next
    /// tick. Without it, the current data is shuffled in place first, one
    /// swap per tick. Either way the previous algorithm state, metrics and
    /// progress are discarded.
    pub fn reset(&mut self, kind: AlgorithmKind, regenerate: bool) {
        self.kind = kind;
        self.mailbox.publish(SILENCE);
        self.metrics.clear();
        self.progress.reset();

        if regenerate {
            self.data = generate(&self.config, &mut self.rng);
            self.begin_sort();
        } else {
            self.state = AlgorithmState::new(kind, &self.data);
            self.phase = Phase::Shuffling { cursor: 0 };
        }
        crate::debug!(
            algorithm = kind.name(),
            len = self.data.len(),
            regenerate,
            "sort reset"
        );
    }

    /// Start a new run with `kind` over caller-supplied data, skipping both
    /// generation and shuffling.
    pub fn load(&mut self, kind: AlgorithmKind, data: Vec<u32>) {
        self.kind = kind;
        self.data = data;
        self.mailbox.publish(SILENCE);
        self.metrics.clear();
        self.progress.reset();
        self.begin_sort();
        crate::debug!(
            algorithm = kind.name(),
            len = self.data.len(),
            "sort loaded"
        );
    }

    /// Advance exactly one unit of work: one shuffle swap or one algorithm
    /// step. Does nothing once the run is sorted.
    pub fn tick(&mut self) -> StepSnapshot<'_> {
        match self.phase {
            Phase::Idle | Phase::Sorted => self.mailbox.publish(SILENCE),
            Phase::Shuffling { cursor } => self.shuffle_step(cursor),
            Phase::Stepping => self.algorithm_step(),
        }

        let raw = match self.phase {
            Phase::Stepping | Phase::Sorted => raw_progress(&self.data, &self.state),
            Phase::Idle | Phase::Shuffling { .. } => 0.0,
        };
        self.progress
            .observe(raw, self.metrics.comparisons, self.is_sorted());

        self.snapshot()
    }

    /// The current frame without advancing anything.
    #[must_use]
    pub fn snapshot(&self) -> StepSnapshot<'_> {
        let highlights = match self.phase {
            Phase::Shuffling { cursor } if cursor < self.data.len() => Highlights {
                active: vec![cursor],
                ..Highlights::default()
            },
            Phase::Stepping => self.state.highlights(self.data.len()),
            _ => Highlights::default(),
        };
        StepSnapshot {
            data: &self.data,
            kind: self.kind,
            phase: self.phase,
            highlights,
            sorted: self.is_sorted(),
            progress: self.progress.value(),
            metrics: self.metrics,
            merging: self.phase == Phase::Stepping && self.state.is_merging(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[must_use]
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.phase == Phase::Sorted
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Ratcheted progress as of the last tick.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// The active algorithm's resumable state.
    #[must_use]
    pub fn state(&self) -> &AlgorithmState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Another handle to the sonification slot, for an audio thread.
    #[must_use]
    pub fn mailbox(&self) -> SonificationMailbox {
        self.mailbox.clone()
    }

    /// Last value published to the mailbox; 0 means silence.
    #[must_use]
    pub fn latest_sonification_value(&self) -> u32 {
        self.mailbox.latest()
    }

    fn begin_sort(&mut self) {
        self.state = AlgorithmState::new(self.kind, &self.data);
        self.metrics.clear();
        self.progress.reset();
        if self.data.len() <= 1 {
            self.phase = Phase::Sorted;
            crate::debug!(len = self.data.len(), "trivially sorted");
        } else {
            self.phase = Phase::Stepping;
        }
    }

    fn shuffle_step(&mut self, mut cursor: usize) {
        let len = self.data.len();
        let mut tone = SILENCE;
        if cursor < len {
            let other = self.rng.next_below(len);
            self.data.swap(cursor, other);
            tone = self.data[cursor];
            cursor += 1;
        }
        self.mailbox.publish(tone);

        if cursor >= len {
            crate::debug!(len, "shuffle complete");
            self.begin_sort();
        } else {
            self.phase = Phase::Shuffling { cursor };
        }
    }

    fn algorithm_step(&mut self) {
        let start = self.clock.now_mono();
        let outcome = self.state.step(&mut self.data);
        let spent = self.clock.now_mono().saturating_sub(start);

        self.metrics.record(&outcome, spent);
        self.mailbox.publish(outcome.tone.unwrap_or(SILENCE));

        if outcome.finished {
            self.phase = Phase::Sorted;
            crate::info!(
                algorithm = self.kind.name(),
                len = self.data.len(),
                comparisons = self.metrics.comparisons,
                swaps = self.metrics.swaps,
                elapsed_ms = self.metrics.elapsed_ms(),
                "sort complete"
            );
        }
    }
}

fn generate(config: &EngineConfig, rng: &mut SeededRng) -> Vec<u32> {
    (0..config.len)
        .map(|_| rng.next_in(config.value_range()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;

    /// Advances by a fixed amount on every reading.
    struct TickingClock {
        now: Cell<Duration>,
        step: Duration,
    }

    impl TickingClock {
        fn new(step: Duration) -> Self {
            Self {
                now: Cell::new(Duration::ZERO),
                step,
            }
        }
    }

    impl Clock for TickingClock {
        fn now_mono(&self) -> Duration {
            let t = self.now.get() + self.step;
            self.now.set(t);
            t
        }
    }

    fn controller(len: usize) -> SortController {
        SortController::new(EngineConfig::default().with_len(len).with_seed(11)).unwrap()
    }

    fn drive_to_sorted<C: Clock>(ctl: &mut SortController<C>) -> usize {
        let mut ticks = 0;
        while !ctl.tick().sorted {
            ticks += 1;
            assert!(ticks < 1_000_000, "run did not terminate");
        }
        ticks
    }

    #[test]
    fn starts_idle_and_idle_ticks_do_nothing() {
        let mut ctl = controller(10);
        let before = ctl.data().to_vec();
        let snap = ctl.tick();
        assert_eq!(snap.phase, Phase::Idle);
        assert!(!snap.sorted);
        assert_eq!(ctl.data(), &before[..]);
    }

    #[test]
    fn regenerate_goes_straight_to_stepping() {
        let mut ctl = controller(20);
        ctl.reset(AlgorithmKind::SelectionSort, true);
        assert_eq!(ctl.phase(), Phase::Stepping);
        assert_eq!(ctl.data().len(), 20);
        assert!(ctl.data().iter().all(|v| (5..=104).contains(v)));
        assert!(matches!(ctl.state(), AlgorithmState::Selection(_)));
    }

    #[test]
    fn reshuffle_takes_one_tick_per_element() {
        let mut ctl = controller(8);
        ctl.reset(AlgorithmKind::BubbleSort, true);
        drive_to_sorted(&mut ctl);
        let mut before = ctl.data().to_vec();

        ctl.reset(AlgorithmKind::QuickSort, false);
        assert_eq!(ctl.phase(), Phase::Shuffling { cursor: 0 });
        for expected in 1..8 {
            ctl.tick();
            assert_eq!(ctl.phase(), Phase::Shuffling { cursor: expected });
        }
        ctl.tick();
        assert_eq!(ctl.phase(), Phase::Stepping);
        assert!(matches!(ctl.state(), AlgorithmState::Quick(_)));

        let mut after = ctl.data().to_vec();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn reset_clears_metrics_and_progress() {
        let mut ctl = controller(30);
        ctl.reset(AlgorithmKind::InsertionSort, true);
        for _ in 0..50 {
            ctl.tick();
        }
        assert!(ctl.metrics().comparisons > 0);
        ctl.reset(AlgorithmKind::MergeSort, false);
        assert_eq!(*ctl.metrics(), Metrics::default());
        assert_eq!(ctl.progress(), 0.0);
        assert_eq!(ctl.latest_sonification_value(), SILENCE);
    }

    #[test]
    fn elapsed_only_counts_stepper_calls() {
        let clock = TickingClock::new(Duration::from_micros(10));
        let config = EngineConfig::default().with_len(6).with_seed(1);
        let mut ctl = SortController::with_clock(config, &clock).unwrap();
        ctl.reset(AlgorithmKind::BubbleSort, false);

        // Shuffle ticks are not timed.
        for _ in 0..6 {
            ctl.tick();
        }
        assert_eq!(ctl.metrics().elapsed, Duration::ZERO);

        let steps = drive_to_sorted(&mut ctl) + 1;
        assert_eq!(
            ctl.metrics().elapsed,
            Duration::from_micros(10) * steps as u32
        );
    }

    #[test]
    fn sorted_ticks_are_no_ops() {
        let mut ctl = controller(25);
        ctl.reset(AlgorithmKind::MergeSort, true);
        drive_to_sorted(&mut ctl);

        let data = ctl.data().to_vec();
        let metrics = *ctl.metrics();
        let progress = ctl.progress();
        for _ in 0..5 {
            let snap = ctl.tick();
            assert!(snap.sorted);
            assert_eq!(snap.data, &data[..]);
            assert_eq!(snap.metrics, metrics);
            assert_eq!(snap.progress, progress);
        }
        assert_eq!(progress, 1.0);
        assert_eq!(ctl.latest_sonification_value(), SILENCE);
    }

    #[test]
    fn tiny_inputs_are_sorted_immediately() {
        for len in [0, 1] {
            let mut ctl = controller(len);
            ctl.reset(AlgorithmKind::QuickSort, true);
            assert!(ctl.is_sorted());
            let snap = ctl.tick();
            assert!(snap.sorted);
            assert_eq!(snap.metrics.comparisons, 0);
        }
    }

    #[test]
    fn empty_reshuffle_finishes_on_first_tick() {
        let mut ctl = controller(0);
        ctl.reset(AlgorithmKind::BubbleSort, false);
        assert!(ctl.tick().sorted);
    }

    #[test]
    fn stepping_publishes_touched_value() {
        let mut ctl = controller(0);
        ctl.load(AlgorithmKind::BubbleSort, vec![9, 4, 7]);
        ctl.tick();
        assert_eq!(ctl.latest_sonification_value(), 4);
        let audio = ctl.mailbox();
        ctl.tick();
        assert_eq!(audio.latest(), 7);
    }

    #[test]
    fn snapshot_highlights_follow_phase() {
        let mut ctl = controller(5);
        ctl.reset(AlgorithmKind::SelectionSort, false);
        assert_eq!(ctl.snapshot().highlights.active, vec![0]);

        ctl.load(AlgorithmKind::SelectionSort, vec![3, 1, 2]);
        let snap = ctl.snapshot();
        assert_eq!(snap.highlights.active, vec![1]);
        assert_eq!(snap.highlights.marker, Some(0));
    }

    #[test]
    fn merging_flag_only_while_copying() {
        let mut ctl = controller(0);
        ctl.load(AlgorithmKind::MergeSort, vec![2, 1]);
        assert!(!ctl.snapshot().merging);
        assert!(ctl.tick().merging);
    }

    #[test]
    fn switching_algorithm_replaces_state() {
        let mut ctl = controller(12);
        ctl.reset(AlgorithmKind::QuickSort, true);
        for _ in 0..10 {
            ctl.tick();
        }
        ctl.reset(AlgorithmKind::InsertionSort, true);
        assert_eq!(ctl.kind(), AlgorithmKind::InsertionSort);
        assert_eq!(ctl.state().outer_index(), Some(1));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = SortController::new(EngineConfig::default().with_value_range(9, 1)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyRange { min: 9, max: 1 });
    }
}
