//! The quantity counter.

use std::fmt;

/// A user-adjustable item quantity, floored at 1.
///
/// Held independently of the view state: adjusting it issues no request, and
/// it resets only when the page is re-created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest representable quantity.
    pub const MIN: u32 = 1;

    /// Create a quantity, clamping to the floor.
    pub fn new(value: u32) -> Self {
        Self(value.max(Self::MIN))
    }

    /// The current value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Increment, saturating at `u32::MAX`.
    pub fn increase(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Decrement, saturating at the floor.
    pub fn decrease(&mut self) {
        if self.0 > Self::MIN {
            self.0 -= 1;
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
