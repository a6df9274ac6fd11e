//! Haptic feedback trait

/// Vibration output
pub trait Haptic {
    /// Request a short vibration pulse
    ///
    /// Fire-and-forget: the implementation is responsible for stopping the
    /// motor once the pulse is over.
    fn short_pulse(&mut self);
}

impl<T: Haptic + ?Sized> Haptic for &mut T {
    fn short_pulse(&mut self) {
        (**self).short_pulse();
    }
}
