// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel state machine.
//!
//! [`CoverflowController`] owns the focused index, the animation lock, and the
//! timers that drive both the lock release and autoplay. Every operation that
//! takes a `now` first fires any timers already due at `now`, so callers that
//! only ever drive the controller through input still see a consistent state.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut controller = CoverflowController::new(deck, CoverflowConfig::standard(), view);
//! controller.mount(now);
//! // every frame:
//! controller.advance(now);
//! // on input:
//! controller.handle(InputEvent::Next, now);
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::autoplay::AutoplayState;
use crate::config::CoverflowConfig;
use crate::slide::{SlideDeck, SlideRecord};
use crate::time::HostTime;
use crate::timer::{TimerId, TimerQueue};
use crate::trace::{
    LockReleaseEvent, NavigationEvent, NavigationKind, RenderEvent, TraceSink, Tracer,
};
use crate::view::CoverflowView;
use crate::visual::VisualTransform;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Direction of a single navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One slide back, wrapping from the first to the last.
    Prev,
    /// One slide forward, wrapping from the last to the first.
    Next,
}

impl Direction {
    /// Signed step size: `-1` or `+1`.
    #[must_use]
    pub const fn delta(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }

    /// The index one step from `current` in a ring of `len`.
    #[must_use]
    pub const fn step(self, current: usize, len: usize) -> usize {
        match self {
            Self::Prev => (current + len - 1) % len,
            Self::Next => (current + 1) % len,
        }
    }
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavOutcome {
    /// The focus changed (or was re-rendered) and the lock is now held.
    Committed,
    /// Rejected: a transition is still settling.
    Locked,
    /// Rejected: the requested slide is already focused.
    Unchanged,
    /// Rejected: the requested position is not in the deck.
    OutOfRange,
}

impl NavOutcome {
    /// Whether the request committed.
    #[must_use]
    pub const fn is_committed(self) -> bool {
        matches!(self, Self::Committed)
    }
}

/// Timer payloads owned by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum TimerKind {
    /// Releases the animation lock.
    Settle,
    /// Advances one slide.
    AutoplayTick,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The navigation state proper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CarouselState {
    /// Focused slide position, always below the deck length.
    pub current_index: usize,
    /// Whether a transition is still settling. Manual navigation is rejected
    /// while this is set.
    pub is_animating: bool,
}

/// Drives a [`CoverflowView`] from navigation input and timers.
pub struct CoverflowController<V: CoverflowView> {
    pub(crate) deck: SlideDeck,
    pub(crate) config: CoverflowConfig,
    pub(crate) view: V,
    pub(crate) carousel: CarouselState,
    pub(crate) autoplay: AutoplayState,
    pub(crate) timers: TimerQueue<TimerKind>,
    settle_timer: Option<TimerId>,
    render_count: u64,
    sink: Option<Box<dyn TraceSink>>,
}

impl<V: CoverflowView + fmt::Debug> fmt::Debug for CoverflowController<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverflowController")
            .field("carousel", &self.carousel)
            .field("autoplay", &self.autoplay)
            .field("timers", &self.timers)
            .field("render_count", &self.render_count)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

impl<V: CoverflowView> CoverflowController<V> {
    /// Creates a controller focused on
    /// [`config.initial_index_for(deck.len())`](CoverflowConfig::initial_index_for).
    ///
    /// Nothing is pushed to the view until [`mount`](Self::mount).
    #[must_use]
    pub fn new(deck: SlideDeck, config: CoverflowConfig, view: V) -> Self {
        let current_index = config.initial_index_for(deck.len());
        Self {
            deck,
            config,
            view,
            carousel: CarouselState {
                current_index,
                is_animating: false,
            },
            autoplay: AutoplayState::default(),
            timers: TimerQueue::new(),
            settle_timer: None,
            render_count: 0,
            sink: None,
        }
    }

    /// Renders the initial focus and, if configured, starts autoplay.
    ///
    /// Calling it again simply re-renders (and restarts autoplay).
    pub fn mount(&mut self, now: HostTime) {
        self.pump(now);
        self.render(now);
        if self.config.autoplay_on_mount {
            self.start_autoplay(now);
        }
    }

    /// Fires every timer due at or before `now`, in deadline order.
    ///
    /// Hosts call this from their frame loop.
    pub fn advance(&mut self, now: HostTime) {
        self.pump(now);
    }

    /// Steps one slide in `direction`.
    ///
    /// Rejected with [`NavOutcome::Locked`] while a transition is settling.
    pub fn navigate(&mut self, direction: Direction, now: HostTime) -> NavOutcome {
        self.pump(now);
        let from = self.carousel.current_index;
        let outcome = if self.carousel.is_animating {
            NavOutcome::Locked
        } else {
            self.carousel.current_index = direction.step(from, self.deck.len());
            self.render(now);
            NavOutcome::Committed
        };
        self.trace_navigation(now, NavigationKind::Step(direction), from, outcome);
        outcome
    }

    /// Focuses `index` directly.
    ///
    /// The lock is checked first, then the range, then whether `index` is
    /// already focused. Only [`NavOutcome::Committed`] renders.
    pub fn go_to_index(&mut self, index: usize, now: HostTime) -> NavOutcome {
        self.pump(now);
        let from = self.carousel.current_index;
        let outcome = if self.carousel.is_animating {
            NavOutcome::Locked
        } else if index >= self.deck.len() {
            NavOutcome::OutOfRange
        } else if index == from {
            NavOutcome::Unchanged
        } else {
            self.carousel.current_index = index;
            self.render(now);
            NavOutcome::Committed
        };
        self.trace_navigation(now, NavigationKind::Jump(index), from, outcome);
        outcome
    }

    // -- accessors ---------------------------------------------------------

    /// Focused slide position.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.carousel.current_index
    }

    /// Whether a transition is still settling.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.carousel.is_animating
    }

    /// Snapshot of the navigation state.
    #[must_use]
    pub fn carousel(&self) -> CarouselState {
        self.carousel
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.deck.len()
    }

    /// The focused slide's record.
    #[must_use]
    pub fn current_slide(&self) -> &SlideRecord {
        &self.deck.slides()[self.carousel.current_index]
    }

    /// Poses for every slide at the current focus, in deck order.
    #[must_use]
    pub fn visual_transforms(&self) -> Vec<VisualTransform> {
        let len = self.deck.len();
        (0..len)
            .map(|p| {
                VisualTransform::compute(p, self.carousel.current_index, len, &self.config.layout)
            })
            .collect()
    }

    /// Number of render passes pushed to the view so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    /// Number of live timers (settle and autoplay).
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending deadline, if any. Hosts without a frame loop can use
    /// this to arm a single wake-up.
    #[must_use]
    pub fn next_deadline(&self) -> Option<HostTime> {
        self.timers.next_deadline()
    }

    /// The deck.
    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &CoverflowConfig {
        &self.config
    }

    /// The view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// The view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the controller and returns its view.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Installs a trace sink, returning the previous one.
    ///
    /// Events are only delivered when the `trace` feature is enabled.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) -> Option<Box<dyn TraceSink>> {
        self.sink.replace(sink)
    }

    /// Removes and returns the trace sink.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.sink.take()
    }

    // -- internals ---------------------------------------------------------

    pub(crate) fn tracer(&mut self) -> Tracer<'_> {
        match self.sink.as_deref_mut() {
            Some(sink) => Tracer::new(sink),
            None => Tracer::none(),
        }
    }

    /// Fires due timers.
    pub(crate) fn pump(&mut self, now: HostTime) {
        while let Some(fired) = self.timers.pop_due(now) {
            match fired.payload {
                TimerKind::Settle => {
                    if self.settle_timer == Some(fired.id) {
                        self.settle_timer = None;
                    }
                    self.carousel.is_animating = false;
                    let current = self.carousel.current_index;
                    self.tracer().lock_release(&LockReleaseEvent {
                        at: fired.deadline,
                        current,
                    });
                }
                TimerKind::AutoplayTick => self.autoplay_tick(fired.deadline),
            }
        }
    }

    /// Pushes the full visual state to the view and (re)arms the settle
    /// timer.
    pub(crate) fn render(&mut self, at: HostTime) {
        self.carousel.is_animating = true;
        let len = self.deck.len();
        let current = self.carousel.current_index;

        let mut parked = 0;
        for position in 0..len {
            let pose = VisualTransform::compute(position, current, len, &self.config.layout);
            parked += usize::from(pose.parked);
            self.view.set_slide_transform(position, &pose);
        }
        self.view.set_active_slide(current);
        self.view.set_dot_active(current);
        if let Some(slide) = self.deck.get(current) {
            self.view.set_caption(&slide.title, &slide.description);
        }

        if let Some(id) = self.settle_timer.take() {
            self.timers.cancel(id);
        }
        let settle_until = at.saturating_add(self.config.settle_delay);
        self.settle_timer = Some(self.timers.schedule_once(settle_until, TimerKind::Settle));

        let render_index = self.render_count;
        self.render_count += 1;
        self.tracer().render(&RenderEvent {
            at,
            render_index,
            current,
            parked,
            settle_until,
        });
    }

    pub(crate) fn trace_navigation(
        &mut self,
        at: HostTime,
        kind: NavigationKind,
        from: usize,
        outcome: NavOutcome,
    ) {
        let to = self.carousel.current_index;
        self.tracer().navigation(&NavigationEvent {
            at,
            kind,
            from,
            to,
            outcome,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Lcg, RecordingView, numbered_deck};
    use crate::time::Duration;

    fn controller(len: usize) -> CoverflowController<RecordingView> {
        let config = CoverflowConfig {
            autoplay_on_mount: false,
            ..CoverflowConfig::standard()
        };
        CoverflowController::new(numbered_deck(len), config, RecordingView::new(len))
    }

    fn mounted(len: usize) -> CoverflowController<RecordingView> {
        let mut c = controller(len);
        c.mount(HostTime(0));
        c
    }

    #[test]
    fn initial_focus_is_clamped_to_deck() {
        assert_eq!(controller(7).current_index(), 3);
        assert_eq!(controller(2).current_index(), 1);
        assert_eq!(controller(1).current_index(), 0);
    }

    #[test]
    fn nothing_is_rendered_before_mount() {
        let c = controller(7);
        assert_eq!(c.render_count(), 0);
        assert!(!c.is_animating());
        assert_eq!(c.view().active, None);
    }

    #[test]
    fn mount_renders_and_locks() {
        let c = mounted(7);
        assert_eq!(c.render_count(), 1);
        assert!(c.is_animating());
        assert_eq!(c.view().active, Some(3));
        assert_eq!(c.view().dot, Some(3));
        assert_eq!(c.view().title(), "Slide 3");
        assert_eq!(c.pending_timers(), 1, "only the settle timer");
    }

    #[test]
    fn lock_releases_after_settle_delay() {
        let mut c = mounted(7);
        c.advance(HostTime(599));
        assert!(c.is_animating());
        c.advance(HostTime(600));
        assert!(!c.is_animating());
        assert_eq!(c.pending_timers(), 0);
    }

    #[test]
    fn navigation_is_rejected_while_settling() {
        let mut c = mounted(7);
        assert_eq!(c.navigate(Direction::Next, HostTime(100)), NavOutcome::Locked);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.render_count(), 1);

        assert_eq!(c.navigate(Direction::Next, HostTime(600)), NavOutcome::Committed);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.view().title(), "Slide 4");
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut c = mounted(7);
        c.go_to_index(6, HostTime(600));
        assert_eq!(c.navigate(Direction::Next, HostTime(1200)), NavOutcome::Committed);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.navigate(Direction::Prev, HostTime(1800)), NavOutcome::Committed);
        assert_eq!(c.current_index(), 6);
    }

    #[test]
    fn single_slide_deck_navigates_in_place() {
        let mut c = mounted(1);
        assert_eq!(c.navigate(Direction::Next, HostTime(600)), NavOutcome::Committed);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.render_count(), 2);
        assert_eq!(c.go_to_index(0, HostTime(1200)), NavOutcome::Unchanged);
    }

    #[test]
    fn go_to_current_index_does_not_render() {
        let mut c = mounted(7);
        assert_eq!(c.go_to_index(3, HostTime(600)), NavOutcome::Unchanged);
        assert_eq!(c.render_count(), 1);
        assert!(!c.is_animating());
    }

    #[test]
    fn go_to_out_of_range_changes_nothing() {
        let mut c = mounted(7);
        assert_eq!(c.go_to_index(7, HostTime(600)), NavOutcome::OutOfRange);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.render_count(), 1);
    }

    #[test]
    fn lock_is_checked_before_range() {
        let mut c = mounted(7);
        assert_eq!(c.go_to_index(99, HostTime(10)), NavOutcome::Locked);
    }

    #[test]
    fn render_pushes_every_slide() {
        let c = mounted(9);
        let view = c.view();
        for p in 0..9 {
            let t = view.transform(p);
            assert_eq!(t.is_active, p == 3);
        }
        // Focus 3 in 9: position 8 folds to -4 and is parked.
        assert!(view.transform(8).parked);
        assert_eq!(view.transform(8).translate_x, -800.0);
        let pushed: Vec<_> = view.transforms.iter().flatten().copied().collect();
        assert_eq!(c.visual_transforms(), pushed);
    }

    #[test]
    fn each_render_rearms_a_single_settle_timer() {
        let mut c = mounted(7);
        c.start_autoplay(HostTime(0));
        // Tick at 4000 renders, lock until 4600.
        c.advance(HostTime(4000));
        assert!(c.is_animating());
        assert_eq!(c.pending_timers(), 2, "one settle plus the autoplay tick");
        c.advance(HostTime(4599));
        assert!(c.is_animating());
        c.advance(HostTime(4600));
        assert!(!c.is_animating());
    }

    #[test]
    fn late_poll_fires_one_tick_then_settles() {
        let mut c = mounted(7);
        c.start_autoplay(HostTime(0));
        // One poll far in the future: the mount lock releases at 600, the
        // ticks missed at 4000 and 8000 collapse into one tick at 12000, and
        // its lock releases at 12600.
        c.advance(HostTime(12_700));
        assert_eq!(c.autoplay_ticks(), 1);
        assert_eq!(c.render_count(), 2);
        assert_eq!(c.current_index(), 4);
        assert!(!c.is_animating());
        c.advance(HostTime(16_000));
        assert_eq!(c.autoplay_ticks(), 2, "phase kept after the gap");
    }

    #[test]
    fn long_gap_fires_at_most_one_tick() {
        let mut c = CoverflowController::new(
            numbered_deck(7),
            CoverflowConfig::standard(),
            RecordingView::new(7),
        );
        c.mount(HostTime(0));
        c.advance(HostTime(3_600_000));
        assert_eq!(c.autoplay_ticks(), 1);
        assert_eq!(c.render_count(), 2, "mount plus a single tick");
        assert_eq!(c.current_index(), 4);
        assert!(c.is_animating(), "the tick at 3600000 is still settling");
        c.advance(HostTime(3_604_000));
        assert_eq!(c.autoplay_ticks(), 2);
        assert_eq!(c.pending_timers(), 2, "one settle plus the autoplay tick");
    }

    #[test]
    fn round_trip_returns_to_start() {
        let settle = CoverflowConfig::standard().settle_delay;
        for len in 1..=12_usize {
            for start in 0..len {
                for (there, back) in [
                    (Direction::Next, Direction::Prev),
                    (Direction::Prev, Direction::Next),
                ] {
                    let mut c = mounted(len);
                    let mut now = HostTime(0) + settle;
                    assert_ne!(c.go_to_index(start, now), NavOutcome::Locked);
                    assert_eq!(c.current_index(), start);

                    now = now + settle;
                    assert_eq!(c.navigate(there, now), NavOutcome::Committed);
                    now = now + settle;
                    assert_eq!(c.navigate(back, now), NavOutcome::Committed);
                    assert_eq!(
                        c.current_index(),
                        start,
                        "{there:?} then {back:?} from {start} in {len}"
                    );
                }
            }
        }
    }

    #[test]
    fn current_slide_matches_focus() {
        let mut c = mounted(5);
        c.navigate(Direction::Prev, HostTime(700));
        assert_eq!(c.current_slide().title, "Slide 2");
        assert_eq!(c.slide_count(), 5);
    }

    #[test]
    fn random_sessions_keep_invariants() {
        for len in 1..=12_usize {
            let mut rng = Lcg(len as u64 * 7919);
            let mut c = controller(len);
            c.mount(HostTime(0));
            let mut now = HostTime(0);
            for _ in 0..300 {
                now = now + Duration::from_millis(u64::from(rng.below(900)));
                let before = c.carousel();
                let renders = c.render_count();
                let outcome = match rng.below(4) {
                    0 => c.navigate(Direction::Prev, now),
                    1 => c.navigate(Direction::Next, now),
                    2 => c.go_to_index(rng.below(len as u32 + 1) as usize, now),
                    _ => {
                        c.advance(now);
                        continue;
                    }
                };

                assert!(c.current_index() < len);
                if outcome.is_committed() {
                    assert_eq!(c.render_count(), renders + 1);
                    assert!(c.is_animating());
                    assert_eq!(c.view().active, Some(c.current_index()));
                    assert_eq!(c.view().dot, Some(c.current_index()));
                    let active = c.view().transforms.iter().flatten().filter(|t| t.is_active);
                    assert_eq!(active.count(), 1);
                } else {
                    assert_eq!(c.render_count(), renders);
                    if outcome == NavOutcome::Locked {
                        assert_eq!(c.current_index(), before.current_index);
                    }
                }
            }
        }
    }
}
