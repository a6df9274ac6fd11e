//! Vibration motor
//!
//! A coin vibration motor switched by a GPIO (usually through a transistor).
//! The motor is driven for `pulse_ms` after each [`Haptic::short_pulse`]
//! request; [`VibrationMotor::update`] must be called with the current time
//! to stop it.

use limber_core::Haptic;
use limber_hal::OutputPin;

/// GPIO vibration motor
pub struct VibrationMotor<P> {
    pin: P,
    /// If true, motor ON = pin LOW
    inverted: bool,
    pulse_ms: u16,
    /// Last time seen by `update`
    now_ms: u32,
    /// When the running pulse ends
    stop_at_ms: Option<u32>,
}

impl<P: OutputPin> VibrationMotor<P> {
    /// Create a motor output, initially off
    pub fn new(pin: P, pulse_ms: u16, inverted: bool) -> Self {
        let mut motor = Self {
            pin,
            inverted,
            pulse_ms,
            now_ms: 0,
            stop_at_ms: None,
        };
        motor.drive(false);
        motor
    }

    /// Create a motor with active-high output
    pub fn new_active_high(pin: P, pulse_ms: u16) -> Self {
        Self::new(pin, pulse_ms, false)
    }

    /// Check if the motor is currently vibrating
    pub fn is_active(&self) -> bool {
        self.stop_at_ms.is_some()
    }

    /// Configured pulse duration
    pub fn pulse_ms(&self) -> u16 {
        self.pulse_ms
    }

    /// Advance time, stopping the motor when the pulse is over
    pub fn update(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
        if let Some(stop_at) = self.stop_at_ms {
            // Wrapping-safe "now >= stop_at"
            if now_ms.wrapping_sub(stop_at) < u32::MAX / 2 {
                self.drive(false);
                self.stop_at_ms = None;
            }
        }
    }

    fn drive(&mut self, on: bool) {
        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }
}

impl<P: OutputPin> Haptic for VibrationMotor<P> {
    fn short_pulse(&mut self) {
        self.drive(true);
        // A new request while vibrating extends the pulse
        self.stop_at_ms = Some(self.now_ms.wrapping_add(self.pulse_ms as u32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_pulse_stops_after_duration() {
        let mut motor = VibrationMotor::new_active_high(MockPin { high: true }, 100);
        assert!(!motor.pin.is_set_high());

        motor.update(1_000);
        motor.short_pulse();
        assert!(motor.is_active());
        assert!(motor.pin.is_set_high());

        motor.update(1_099);
        assert!(motor.pin.is_set_high());

        motor.update(1_100);
        assert!(!motor.is_active());
        assert!(!motor.pin.is_set_high());
    }

    #[test]
    fn test_inverted_output() {
        let mut motor = VibrationMotor::new(MockPin { high: false }, 50, true);
        assert!(motor.pin.is_set_high());

        motor.short_pulse();
        assert!(!motor.pin.is_set_high());

        motor.update(50);
        assert!(motor.pin.is_set_high());
    }

    #[test]
    fn test_repeat_request_extends_pulse() {
        let mut motor = VibrationMotor::new_active_high(MockPin { high: false }, 100);
        motor.short_pulse();
        motor.update(80);
        motor.short_pulse();
        motor.update(150);
        assert!(motor.is_active());
        motor.update(180);
        assert!(!motor.is_active());
    }

    #[test]
    fn test_pulse_across_timer_wrap() {
        let mut motor = VibrationMotor::new_active_high(MockPin { high: false }, 100);
        motor.update(u32::MAX - 10);
        motor.short_pulse();
        motor.update(20);
        assert!(motor.is_active());
        motor.update(89);
        assert!(!motor.is_active());
    }
}
