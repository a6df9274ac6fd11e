//! Events that drive the controller

/// Navigation direction through the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Next,
    Previous,
}

/// Physical buttons on the watch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Middle button: start/stop the timer
    Select,
    /// Top button: previous pose
    Up,
    /// Bottom button: next pose
    Down,
}

/// Events that can be applied to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Move to another pose
    Navigate(Direction),
    /// Start or stop the countdown
    ToggleRun,
    /// One second elapsed
    Tick,
}

impl Event {
    /// Map a button press to its event
    pub fn from_button(button: Button) -> Self {
        match button {
            Button::Select => Event::ToggleRun,
            Button::Up => Event::Navigate(Direction::Previous),
            Button::Down => Event::Navigate(Direction::Next),
        }
    }

    /// Check if this event is user-initiated
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::Navigate(_) | Event::ToggleRun)
    }
}

impl From<Button> for Event {
    fn from(button: Button) -> Self {
        Event::from_button(button)
    }
}
