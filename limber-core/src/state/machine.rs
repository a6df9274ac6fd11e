//! State machine definition

use super::events::Event;

/// Screen states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Instructions shown, no pose selected yet
    TitleScreen,
    /// A pose is on screen; the timer may be running or paused
    Cycling,
}

impl State {
    /// Check if the title page is showing
    pub fn is_title(&self) -> bool {
        matches!(self, State::TitleScreen)
    }

    /// Process an event and return the next state
    ///
    /// The title screen is left on the first navigation and never re-entered.
    pub fn transition(self, event: Event) -> Self {
        match (self, event) {
            (State::TitleScreen, Event::Navigate(_)) => State::Cycling,
            _ => self,
        }
    }
}
