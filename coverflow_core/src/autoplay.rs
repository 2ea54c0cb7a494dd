// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay: a repeating timer that advances one slide per period.
//!
//! At most one autoplay timer is live at any moment. Starting while already
//! playing replaces the timer rather than stacking a second one, so the tick
//! rate never exceeds one per period.
//!
//! Ticks advance and render even while a manual transition is settling. The
//! tick's render re-arms the settle timer like any other render.

use crate::controller::{CoverflowController, NavOutcome, TimerKind};
use crate::time::HostTime;
use crate::timer::TimerId;
use crate::trace::{AutoplayChange, AutoplayEvent, NavigationKind};
use crate::view::CoverflowView;

/// Autoplay bookkeeping held by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoplayState {
    timer: Option<TimerId>,
    ticks: u64,
}

impl AutoplayState {
    /// Whether a tick timer is live.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    /// Ticks fired so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl<V: CoverflowView> CoverflowController<V> {
    /// Starts autoplay: the first tick fires one period after `now`.
    ///
    /// Any live autoplay timer is cancelled first.
    pub fn start_autoplay(&mut self, now: HostTime) {
        self.pump(now);
        let change = match self.autoplay.timer.take() {
            Some(id) => {
                self.timers.cancel(id);
                AutoplayChange::Restarted
            }
            None => AutoplayChange::Started,
        };
        let period = self.config.autoplay_period;
        self.autoplay.timer = Some(self.timers.schedule_every(now, period, TimerKind::AutoplayTick));
        self.view.set_autoplay_icon(true);
        self.trace_autoplay(now, change);
    }

    /// Stops autoplay. Safe to call when not playing.
    ///
    /// The icon is always reset; a stop is only traced when a timer was
    /// actually cancelled.
    pub fn stop_autoplay(&mut self, now: HostTime) {
        self.pump(now);
        let was_playing = match self.autoplay.timer.take() {
            Some(id) => self.timers.cancel(id),
            None => false,
        };
        self.view.set_autoplay_icon(false);
        if was_playing {
            self.trace_autoplay(now, AutoplayChange::Stopped);
        }
    }

    /// Stops autoplay if playing, starts it otherwise.
    pub fn toggle_autoplay(&mut self, now: HostTime) {
        self.pump(now);
        if self.autoplay.is_playing() {
            self.stop_autoplay(now);
        } else {
            self.start_autoplay(now);
        }
    }

    /// Whether autoplay is running.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.autoplay.is_playing()
    }

    /// Autoplay ticks fired so far.
    #[must_use]
    pub fn autoplay_ticks(&self) -> u64 {
        self.autoplay.ticks
    }

    /// One tick at `deadline`: advance and render, ignoring the lock.
    pub(crate) fn autoplay_tick(&mut self, deadline: HostTime) {
        self.autoplay.ticks += 1;
        let from = self.carousel.current_index;
        self.carousel.current_index = (from + 1) % self.deck.len();
        self.render(deadline);
        self.trace_navigation(
            deadline,
            NavigationKind::AutoplayTick,
            from,
            NavOutcome::Committed,
        );
    }

    fn trace_autoplay(&mut self, at: HostTime, change: AutoplayChange) {
        let period = self.config.autoplay_period;
        let ticks = self.autoplay.ticks;
        self.tracer().autoplay(&AutoplayEvent {
            at,
            change,
            period,
            ticks,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CoverflowConfig;
    use crate::controller::{CoverflowController, Direction, NavOutcome};
    use crate::input::InputEvent;
    use crate::testing::{RecordingView, numbered_deck};
    use crate::time::HostTime;

    fn mounted(len: usize) -> CoverflowController<RecordingView> {
        let mut c = CoverflowController::new(
            numbered_deck(len),
            CoverflowConfig::standard(),
            RecordingView::new(len),
        );
        c.mount(HostTime(0));
        c
    }

    /// Polls every `step` ms from `from` through `to`, like a frame loop.
    fn run(c: &mut CoverflowController<RecordingView>, from: u64, to: u64, step: usize) {
        for t in (from..=to).step_by(step) {
            c.advance(HostTime(t));
        }
    }

    #[test]
    fn mount_starts_autoplay_by_default() {
        let c = mounted(7);
        assert!(c.is_playing());
        assert_eq!(c.view().icon, Some(true));
    }

    #[test]
    fn ticks_advance_one_slide_per_period() {
        let mut c = mounted(7);
        c.advance(HostTime(3999));
        assert_eq!(c.current_index(), 3);
        c.advance(HostTime(4000));
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.view().title(), "Slide 4");
        run(&mut c, 4016, 16_000, 16);
        assert_eq!(c.current_index(), 0, "wrapped after 4 ticks");
        assert_eq!(c.autoplay_ticks(), 4);
    }

    #[test]
    fn double_start_does_not_double_the_rate() {
        let mut c = mounted(7);
        c.start_autoplay(HostTime(0));
        c.start_autoplay(HostTime(0));
        run(&mut c, 0, 40_700, 100);
        assert_eq!(c.autoplay_ticks(), 10);
        assert_eq!(c.pending_timers(), 1, "one autoplay timer, lock released");
    }

    #[test]
    fn restart_resets_the_phase() {
        let mut c = mounted(7);
        c.start_autoplay(HostTime(3000));
        c.advance(HostTime(4000));
        assert_eq!(c.autoplay_ticks(), 0);
        c.advance(HostTime(7000));
        assert_eq!(c.autoplay_ticks(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut c = mounted(7);
        c.stop_autoplay(HostTime(10));
        c.stop_autoplay(HostTime(20));
        assert!(!c.is_playing());
        assert_eq!(c.view().icon, Some(false));
        c.advance(HostTime(20_000));
        assert_eq!(c.autoplay_ticks(), 0);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn toggle_flips_state_and_icon() {
        let mut c = mounted(7);
        c.toggle_autoplay(HostTime(10));
        assert!(!c.is_playing());
        assert_eq!(c.view().icon, Some(false));
        c.toggle_autoplay(HostTime(20));
        assert!(c.is_playing());
        assert_eq!(c.view().icon, Some(true));
        assert_eq!(c.view().icon_calls, 3);
    }

    #[test]
    fn ticks_render_through_the_lock() {
        let mut c = mounted(7);
        c.stop_autoplay(HostTime(0));
        c.start_autoplay(HostTime(0));
        assert_eq!(c.navigate(Direction::Next, HostTime(3800)), NavOutcome::Committed);
        // Lock from the manual render holds until 4400; the tick at 4000
        // still advances.
        c.advance(HostTime(4000));
        assert_eq!(c.current_index(), 5);
        assert!(c.is_animating());
        assert_eq!(c.render_count(), 3);
    }

    #[test]
    fn manual_input_stops_autoplay_even_when_locked() {
        let mut c = mounted(7);
        assert_eq!(c.handle(InputEvent::Next, HostTime(100)), Some(NavOutcome::Locked));
        assert!(!c.is_playing());
        assert_eq!(c.view().icon, Some(false));
        c.advance(HostTime(10_000));
        assert_eq!(c.autoplay_ticks(), 0);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn only_a_cancelled_timer_is_traced_as_stopped() {
        use alloc::boxed::Box;
        use alloc::rc::Rc;
        use core::cell::Cell;

        use crate::trace::{AutoplayChange, AutoplayEvent, TraceSink};

        struct CountStops(Rc<Cell<u32>>);

        impl TraceSink for CountStops {
            fn on_autoplay(&mut self, e: &AutoplayEvent) {
                if e.change == AutoplayChange::Stopped {
                    self.0.set(self.0.get() + 1);
                }
            }
        }

        let stops = Rc::new(Cell::new(0));
        let mut c = mounted(7);
        c.set_trace_sink(Box::new(CountStops(stops.clone())));
        c.handle(InputEvent::Next, HostTime(700));
        c.handle(InputEvent::Prev, HostTime(1400));
        c.handle(InputEvent::Select(0), HostTime(2100));
        c.stop_autoplay(HostTime(2800));
        assert_eq!(stops.get(), 1);
        assert_eq!(c.view().icon, Some(false));
        assert_eq!(c.view().icon_calls, 5, "icon is reset on every stop");
    }
}
