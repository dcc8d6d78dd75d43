//! Device classification by viewport width

use serde::Serialize;

/// Widest viewport still treated as a phone
pub const MOBILE_MAX_WIDTH: u32 = 767;

/// Narrowest viewport treated as a desktop
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            DeviceClass::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }

    pub fn is_tablet(&self) -> bool {
        matches!(self, DeviceClass::Tablet)
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, DeviceClass::Desktop)
    }
}

/// Snapshot of the window size, logged at start-up and after resizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewportInfo {
    pub width: u32,
    pub height: u32,
    pub device: DeviceClass,
}

impl ViewportInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            device: DeviceClass::from_width(width),
        }
    }
}
