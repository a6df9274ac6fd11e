//! Debounced push buttons
//!
//! Buttons are wired active-low with pull-ups. A press is reported once the
//! pin has read low for [`DEBOUNCE_MS`]; the button must be released (and
//! stay released for the same time) before it can fire again.

use heapless::Vec;
use limber_core::Button;
use limber_hal::InputPin;

/// Time a level must be stable before it is accepted
pub const DEBOUNCE_MS: u32 = 20;

/// A single debounced button
pub struct DebouncedButton<P> {
    pin: P,
    button: Button,
    /// Accepted state (true = pressed)
    stable: bool,
    /// Last raw reading
    candidate: bool,
    /// When `candidate` last changed
    changed_at_ms: u32,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Wrap an active-low input pin
    pub fn new(pin: P, button: Button) -> Self {
        let pressed = pin.is_low();
        Self {
            pin,
            button,
            // A button held at boot must be released before it fires
            stable: pressed,
            candidate: pressed,
            changed_at_ms: 0,
        }
    }

    /// Which button this is
    pub fn button(&self) -> Button {
        self.button
    }

    /// Accepted pressed state
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Sample the pin
    ///
    /// Returns the button on the sample where a press is accepted.
    pub fn update(&mut self, now_ms: u32) -> Option<Button> {
        let pressed = self.pin.is_low();

        if pressed != self.candidate {
            self.candidate = pressed;
            self.changed_at_ms = now_ms;
            return None;
        }

        if pressed != self.stable && now_ms.wrapping_sub(self.changed_at_ms) >= DEBOUNCE_MS {
            self.stable = pressed;
            if pressed {
                return Some(self.button);
            }
        }

        None
    }
}

/// The three watch buttons sampled together
pub struct ButtonPanel<P> {
    buttons: [DebouncedButton<P>; 3],
}

impl<P: InputPin> ButtonPanel<P> {
    /// Create a panel from the up, select and down pins
    pub fn new(up: P, select: P, down: P) -> Self {
        Self {
            buttons: [
                DebouncedButton::new(up, Button::Up),
                DebouncedButton::new(select, Button::Select),
                DebouncedButton::new(down, Button::Down),
            ],
        }
    }

    /// Sample all buttons, returning presses in up/select/down order
    pub fn poll(&mut self, now_ms: u32) -> Vec<Button, 3> {
        let mut pressed = Vec::new();
        for button in self.buttons.iter_mut() {
            if let Some(b) = button.update(now_ms) {
                let _ = pressed.push(b);
            }
        }
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin<'a> {
        high: &'a Cell<bool>,
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    #[test]
    fn test_press_after_debounce() {
        let level = Cell::new(true);
        let mut btn = DebouncedButton::new(MockPin { high: &level }, Button::Select);

        assert_eq!(btn.update(0), None);
        level.set(false);
        assert_eq!(btn.update(5), None);
        assert_eq!(btn.update(15), None);
        assert_eq!(btn.update(25), Some(Button::Select));
        assert!(btn.is_pressed());

        // Held: no repeat
        assert_eq!(btn.update(100), None);
    }

    #[test]
    fn test_bounce_is_ignored() {
        let level = Cell::new(true);
        let mut btn = DebouncedButton::new(MockPin { high: &level }, Button::Up);

        for t in 0..10 {
            level.set(t % 2 == 0);
            assert_eq!(btn.update(t * 3), None);
        }
        level.set(true);
        assert_eq!(btn.update(100), None);
        assert!(!btn.is_pressed());
    }

    #[test]
    fn test_release_rearms() {
        let level = Cell::new(true);
        let mut btn = DebouncedButton::new(MockPin { high: &level }, Button::Down);

        level.set(false);
        btn.update(0);
        assert_eq!(btn.update(20), Some(Button::Down));

        level.set(true);
        btn.update(30);
        assert_eq!(btn.update(50), None);
        assert!(!btn.is_pressed());

        level.set(false);
        btn.update(60);
        assert_eq!(btn.update(80), Some(Button::Down));
    }

    #[test]
    fn test_held_at_boot_does_not_fire() {
        let level = Cell::new(false);
        let mut btn = DebouncedButton::new(MockPin { high: &level }, Button::Select);
        assert_eq!(btn.update(0), None);
        assert_eq!(btn.update(100), None);
    }

    #[test]
    fn test_panel_order() {
        let up = Cell::new(true);
        let select = Cell::new(true);
        let down = Cell::new(true);
        let mut panel = ButtonPanel::new(
            MockPin { high: &up },
            MockPin { high: &select },
            MockPin { high: &down },
        );

        down.set(false);
        up.set(false);
        assert!(panel.poll(0).is_empty());
        let pressed = panel.poll(DEBOUNCE_MS);
        assert_eq!(pressed.as_slice(), &[Button::Up, Button::Down]);
    }
}
