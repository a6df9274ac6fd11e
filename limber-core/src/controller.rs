//! Pose cycle controller
//!
//! Owns the only mutable state of the application: which pose is shown,
//! whether the countdown is running and how far it has progressed. Every
//! mutation is pushed to the [`DisplaySurface`] straight away.
//!
//! The controller is driven by three inputs, all delivered serially by the
//! caller's event loop:
//! - [`PoseController::advance`] for the up/down buttons
//! - [`PoseController::toggle_run`] for the select button
//! - [`PoseController::on_tick`] once per second

use crate::catalog::{Pose, PoseCatalog};
use crate::config::TimerConfig;
use crate::state::{Button, Direction, Event, State};
use crate::text::{format_countdown, format_header, PAUSED_TEXT, TITLE_TEXT};
use crate::traits::{DisplaySurface, Haptic, Region, TextStyle};

/// Controller state
///
/// Only [`PoseController`] mutates it; [`PoseController::snapshot`] hands
/// out read-only copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerState {
    /// Selected pose, `None` until the first navigation
    current: Option<usize>,
    screen: State,
    running: bool,
    /// Seconds since the last pose change, in `0..=interval`
    elapsed_s: u16,
}

impl ControllerState {
    /// Selected pose index, `None` on the title page
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Title page or cycling
    pub fn screen(&self) -> State {
        self.screen
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds since the last pose change
    pub fn elapsed_s(&self) -> u16 {
        self.elapsed_s
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            current: None,
            screen: State::TitleScreen,
            running: false,
            elapsed_s: 0,
        }
    }
}

/// Result of a one-second tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Timer stopped, nothing counted
    Paused,
    /// Timer running, pose unchanged
    Counting { remaining_s: u16 },
    /// Interval elapsed, moved to the next pose
    Advanced { index: usize },
}

/// Cycles through a pose catalog on button presses and timer ticks
pub struct PoseController<'a> {
    catalog: PoseCatalog<'a>,
    timer: TimerConfig,
    state: ControllerState,
}

impl<'a> PoseController<'a> {
    /// Create a controller on the title page, timer stopped
    pub fn new(catalog: PoseCatalog<'a>, timer: TimerConfig) -> Self {
        Self {
            catalog,
            timer,
            state: ControllerState::default(),
        }
    }

    /// Paint the title page
    ///
    /// Called once at startup before any event is delivered.
    pub fn show_title<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.set_visible(Region::Header, false);
        surface.set_style(Region::Description, TextStyle::Title);
        surface.set_text(Region::Description, TITLE_TEXT);
        surface.set_visible(Region::Description, true);
        surface.set_visible(Region::Footer, true);
    }

    /// Move to the next or previous pose
    ///
    /// Leaves the title page on first use, resets the countdown and redraws
    /// the header and description. Returns the new pose index.
    pub fn advance<S: DisplaySurface + ?Sized>(
        &mut self,
        direction: Direction,
        surface: &mut S,
    ) -> usize {
        if self.state.screen.is_title() {
            self.state.screen = self.state.screen.transition(Event::Navigate(direction));
            surface.set_visible(Region::Header, true);
            surface.set_visible(Region::Description, true);
            surface.set_style(Region::Description, TextStyle::Body);
        }

        let count = self.catalog.len();
        let index = match (direction, self.state.current) {
            (Direction::Next, Some(current)) => (current + 1) % count,
            (Direction::Next, None) => 0,
            (Direction::Previous, Some(current)) => (current + count - 1) % count,
            // Going back from the title page shows the last pose
            (Direction::Previous, None) => count - 1,
        };

        self.state.current = Some(index);
        self.state.elapsed_s = 0;

        if let Some(pose) = self.catalog.get(index) {
            surface.set_text(Region::Header, &format_header(index, pose.fullname));
            surface.set_text(Region::Description, pose.description);
        }

        index
    }

    /// Start or stop the countdown
    ///
    /// The footer is left alone; it changes on the next tick.
    pub fn toggle_run(&mut self) -> bool {
        self.state.running = !self.state.running;
        self.state.running
    }

    /// Handle the once-per-second tick
    pub fn on_tick<S, H>(&mut self, surface: &mut S, haptic: &mut H) -> TickOutcome
    where
        S: DisplaySurface + ?Sized,
        H: Haptic + ?Sized,
    {
        if !self.state.running {
            surface.set_text(Region::Footer, PAUSED_TEXT);
            return TickOutcome::Paused;
        }

        self.state.elapsed_s = self.state.elapsed_s.saturating_add(1);

        let outcome = if self.state.elapsed_s >= self.timer.interval_s {
            let index = self.advance(Direction::Next, surface);
            haptic.short_pulse();
            TickOutcome::Advanced { index }
        } else {
            TickOutcome::Counting {
                remaining_s: self.remaining_s(),
            }
        };

        surface.set_text(Region::Footer, &format_countdown(self.remaining_s()));
        outcome
    }

    /// Apply a button press and return the event it produced
    pub fn handle_button<S: DisplaySurface + ?Sized>(
        &mut self,
        button: Button,
        surface: &mut S,
    ) -> Event {
        let event = Event::from_button(button);
        match event {
            Event::Navigate(direction) => {
                self.advance(direction, surface);
            }
            Event::ToggleRun => {
                self.toggle_run();
            }
            Event::Tick => {}
        }
        event
    }

    /// Selected pose index, `None` on the title page
    pub fn current_index(&self) -> Option<usize> {
        self.state.current
    }

    /// Selected pose
    pub fn current_pose(&self) -> Option<&'a Pose> {
        self.state.current.and_then(|i| self.catalog.get(i))
    }

    /// Check if the countdown is running
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Seconds since the last pose change
    pub fn elapsed_s(&self) -> u16 {
        self.state.elapsed_s
    }

    /// Seconds until the next automatic change
    pub fn remaining_s(&self) -> u16 {
        self.timer.interval_s.saturating_sub(self.state.elapsed_s)
    }

    /// Configured seconds per pose
    pub fn interval_s(&self) -> u16 {
        self.timer.interval_s
    }

    /// Title page or cycling
    pub fn state(&self) -> State {
        self.state.screen
    }

    /// Snapshot of the full controller state
    pub fn snapshot(&self) -> ControllerState {
        self.state
    }

    /// The catalog being cycled
    pub fn catalog(&self) -> &PoseCatalog<'a> {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Default)]
    struct RecordingSurface {
        header: String,
        description: String,
        footer: String,
        header_visible: bool,
        description_visible: bool,
        description_style: TextStyle,
        writes: usize,
    }

    impl DisplaySurface for RecordingSurface {
        fn set_text(&mut self, region: Region, text: &str) {
            self.writes += 1;
            let slot = match region {
                Region::Header => &mut self.header,
                Region::Description => &mut self.description,
                Region::Footer => &mut self.footer,
            };
            *slot = text.to_string();
        }

        fn set_style(&mut self, region: Region, style: TextStyle) {
            if region == Region::Description {
                self.description_style = style;
            }
        }

        fn set_visible(&mut self, region: Region, visible: bool) {
            match region {
                Region::Header => self.header_visible = visible,
                Region::Description => self.description_visible = visible,
                Region::Footer => {}
            }
        }
    }

    #[derive(Default)]
    struct CountingHaptic {
        pulses: usize,
    }

    impl Haptic for CountingHaptic {
        fn short_pulse(&mut self) {
            self.pulses += 1;
        }
    }

    static ABC: [Pose; 3] = [
        Pose::new("A", "first"),
        Pose::new("B", "second"),
        Pose::new("C", "third"),
    ];

    static MANY: [Pose; 8] = [Pose::new("P", "pose"); 8];

    fn controller(poses: &'static [Pose]) -> PoseController<'static> {
        let catalog = PoseCatalog::new(poses).unwrap();
        PoseController::new(catalog, TimerConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let ctl = controller(&ABC);
        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.current(), None);
        assert_eq!(snapshot.screen(), State::TitleScreen);
        assert!(!snapshot.is_running());
        assert_eq!(snapshot.elapsed_s(), 0);
        assert_eq!(ctl.interval_s(), 60);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        ctl.advance(Direction::Next, &mut surface);
        ctl.toggle_run();

        let snapshot = ctl.snapshot();
        assert_eq!(snapshot.current(), Some(0));
        assert_eq!(snapshot.screen(), State::Cycling);
        assert!(snapshot.is_running());

        ctl.advance(Direction::Next, &mut surface);
        assert_eq!(snapshot.current(), Some(0));
        assert_eq!(ctl.snapshot().current(), Some(1));
    }

    #[test]
    fn test_show_title() {
        let ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        ctl.show_title(&mut surface);
        assert!(!surface.header_visible);
        assert_eq!(surface.description, TITLE_TEXT);
        assert_eq!(surface.description_style, TextStyle::Title);
    }

    #[test]
    fn test_navigation_scenario() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        ctl.show_title(&mut surface);

        assert_eq!(ctl.advance(Direction::Next, &mut surface), 0);
        assert_eq!(surface.header, "1: A");
        assert_eq!(surface.description, "first");
        assert!(surface.header_visible);
        assert_eq!(surface.description_style, TextStyle::Body);
        assert_eq!(ctl.state(), State::Cycling);

        assert_eq!(ctl.advance(Direction::Next, &mut surface), 1);
        assert_eq!(surface.header, "2: B");

        assert_eq!(ctl.advance(Direction::Previous, &mut surface), 0);
        assert_eq!(ctl.current_pose().map(|p| p.fullname), Some("A"));
    }

    #[test]
    fn test_first_previous_shows_last_pose() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        assert_eq!(ctl.advance(Direction::Previous, &mut surface), 2);
        assert_eq!(surface.header, "3: C");
    }

    #[test]
    fn test_wraps_both_ways() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        for _ in 0..3 {
            ctl.advance(Direction::Next, &mut surface);
        }
        assert_eq!(ctl.current_index(), Some(2));
        assert_eq!(ctl.advance(Direction::Next, &mut surface), 0);
        assert_eq!(ctl.advance(Direction::Previous, &mut surface), 2);
    }

    #[test]
    fn test_single_pose_catalog() {
        const ONE: [Pose; 1] = [Pose::new("Only", "one")];
        let mut ctl = controller(&ONE);
        let mut surface = RecordingSurface::default();
        assert_eq!(ctl.advance(Direction::Previous, &mut surface), 0);
        assert_eq!(ctl.advance(Direction::Next, &mut surface), 0);
        assert_eq!(ctl.advance(Direction::Previous, &mut surface), 0);
    }

    #[test]
    fn test_countdown_scenario() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        let mut haptic = CountingHaptic::default();
        ctl.advance(Direction::Next, &mut surface);

        assert!(ctl.toggle_run());
        for _ in 0..59 {
            ctl.on_tick(&mut surface, &mut haptic);
        }
        assert_eq!(surface.footer, "1 seconds left");
        assert_eq!(ctl.current_index(), Some(0));
        assert_eq!(haptic.pulses, 0);

        let outcome = ctl.on_tick(&mut surface, &mut haptic);
        assert_eq!(outcome, TickOutcome::Advanced { index: 1 });
        assert_eq!(ctl.current_index(), Some(1));
        assert_eq!(surface.footer, "60 seconds left");
        assert_eq!(surface.header, "2: B");
        assert_eq!(haptic.pulses, 1);
        assert_eq!(ctl.elapsed_s(), 0);
    }

    #[test]
    fn test_timer_leaves_title_page() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        let mut haptic = CountingHaptic::default();
        ctl.show_title(&mut surface);
        ctl.toggle_run();

        for _ in 0..60 {
            ctl.on_tick(&mut surface, &mut haptic);
        }
        assert_eq!(ctl.state(), State::Cycling);
        assert_eq!(ctl.current_index(), Some(0));
        assert_eq!(surface.description_style, TextStyle::Body);
        assert_eq!(haptic.pulses, 1);
    }

    #[test]
    fn test_paused_after_double_toggle() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        let mut haptic = CountingHaptic::default();
        ctl.advance(Direction::Next, &mut surface);

        assert!(ctl.toggle_run());
        assert!(!ctl.toggle_run());
        let before = ctl.snapshot();

        assert_eq!(ctl.on_tick(&mut surface, &mut haptic), TickOutcome::Paused);
        assert_eq!(surface.footer, "Paused");
        assert_eq!(ctl.snapshot(), before);
    }

    #[test]
    fn test_toggle_does_not_redraw() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        let mut haptic = CountingHaptic::default();
        ctl.toggle_run();
        ctl.on_tick(&mut surface, &mut haptic);
        assert_eq!(surface.footer, "59 seconds left");

        let writes = surface.writes;
        ctl.handle_button(Button::Select, &mut surface);
        assert_eq!(surface.writes, writes);
        assert_eq!(surface.footer, "59 seconds left");

        ctl.on_tick(&mut surface, &mut haptic);
        assert_eq!(surface.footer, "Paused");
    }

    #[test]
    fn test_manual_navigation_resets_countdown_without_pulse() {
        let mut ctl = controller(&ABC);
        let mut surface = RecordingSurface::default();
        let mut haptic = CountingHaptic::default();
        ctl.handle_button(Button::Down, &mut surface);
        ctl.handle_button(Button::Select, &mut surface);
        for _ in 0..30 {
            ctl.on_tick(&mut surface, &mut haptic);
        }
        assert_eq!(ctl.elapsed_s(), 30);

        assert_eq!(
            ctl.handle_button(Button::Up, &mut surface),
            Event::Navigate(Direction::Previous)
        );
        assert_eq!(ctl.elapsed_s(), 0);
        assert_eq!(ctl.current_index(), Some(2));
        assert_eq!(haptic.pulses, 0);
    }

    #[test]
    fn test_one_second_interval() {
        let catalog = PoseCatalog::new(&ABC).unwrap();
        let mut ctl = PoseController::new(catalog, TimerConfig::new(1, 50).unwrap());
        let mut surface = RecordingSurface::default();
        let mut haptic = CountingHaptic::default();
        ctl.toggle_run();
        for expected in [0, 1, 2, 0] {
            assert_eq!(
                ctl.on_tick(&mut surface, &mut haptic),
                TickOutcome::Advanced { index: expected }
            );
            assert_eq!(surface.footer, "1 seconds left");
        }
        assert_eq!(haptic.pulses, 4);
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Press(Button),
        Tick,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Press(Button::Select)),
            Just(Op::Press(Button::Up)),
            Just(Op::Press(Button::Down)),
            Just(Op::Tick),
        ]
    }

    proptest! {
        #[test]
        fn prop_next_cycles_every_pose(len in 1usize..=8, start in 0usize..8) {
            let mut ctl = controller(&MANY[..len]);
            let mut surface = RecordingSurface::default();
            for _ in 0..=(start % len) {
                ctl.advance(Direction::Next, &mut surface);
            }
            let origin = ctl.current_index().unwrap();

            let mut seen = [false; 8];
            for _ in 0..len {
                let index = ctl.advance(Direction::Next, &mut surface);
                prop_assert!(!seen[index]);
                seen[index] = true;
            }
            prop_assert_eq!(ctl.current_index(), Some(origin));
            prop_assert!(seen[..len].iter().all(|s| *s));
        }

        #[test]
        fn prop_previous_then_next_is_identity(len in 1usize..=8, steps in 1usize..20) {
            let mut ctl = controller(&MANY[..len]);
            let mut surface = RecordingSurface::default();
            for _ in 0..steps {
                ctl.advance(Direction::Next, &mut surface);
            }
            let origin = ctl.current_index();
            ctl.advance(Direction::Previous, &mut surface);
            ctl.advance(Direction::Next, &mut surface);
            prop_assert_eq!(ctl.current_index(), origin);
        }

        #[test]
        fn prop_elapsed_stays_in_range(
            interval in 1u16..10,
            ops in proptest::collection::vec(op(), 0..200),
        ) {
            let catalog = PoseCatalog::new(&ABC).unwrap();
            let timer = TimerConfig::new(interval, 100).unwrap();
            let mut ctl = PoseController::new(catalog, timer);
            let mut surface = RecordingSurface::default();
            let mut haptic = CountingHaptic::default();

            for op in ops {
                match op {
                    Op::Press(button) => {
                        let event = ctl.handle_button(button, &mut surface);
                        if let Event::Navigate(_) = event {
                            prop_assert_eq!(ctl.elapsed_s(), 0);
                        }
                    }
                    Op::Tick => {
                        ctl.on_tick(&mut surface, &mut haptic);
                    }
                }
                prop_assert!(ctl.elapsed_s() <= interval);
                if ctl.state() == State::Cycling {
                    prop_assert!(ctl.current_index().unwrap() < ABC.len());
                }
            }
        }

        #[test]
        fn prop_paused_ticks_change_nothing(
            navigations in 0usize..5,
            ticks in 1usize..200,
        ) {
            let mut ctl = controller(&ABC);
            let mut surface = RecordingSurface::default();
            let mut haptic = CountingHaptic::default();
            for _ in 0..navigations {
                ctl.advance(Direction::Next, &mut surface);
            }
            let before = ctl.snapshot();
            for _ in 0..ticks {
                prop_assert_eq!(ctl.on_tick(&mut surface, &mut haptic), TickOutcome::Paused);
            }
            prop_assert_eq!(ctl.snapshot(), before);
            prop_assert_eq!(haptic.pulses, 0);
        }
    }
}
