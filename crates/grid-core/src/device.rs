use crate::constants::{TOUCH_GROWTH_DIVISOR, TOUCH_VIEWPORT_MAX_WIDTH};

/// Coarse device classification used to tune radius growth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    /// Touch-capable device with a narrow viewport.
    Touch,
}

impl DeviceClass {
    pub fn classify(touch_capable: bool, viewport_width: f32) -> Self {
        if touch_capable && viewport_width < TOUCH_VIEWPORT_MAX_WIDTH {
            DeviceClass::Touch
        } else {
            DeviceClass::Desktop
        }
    }

    /// Radius growth is slowed on touch devices. Every growth computation goes
    /// through here so the policy applies uniformly.
    #[inline]
    pub fn adjust_growth_rate(self, rate: f32) -> f32 {
        match self {
            DeviceClass::Desktop => rate,
            DeviceClass::Touch => rate / TOUCH_GROWTH_DIVISOR,
        }
    }
}
