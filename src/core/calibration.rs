//! Per-map calibration values and their validated partial update.

use crate::core::constants::MIN_SCALE_MAGNITUDE;
use serde::{Deserialize, Serialize};

/// Parameters of the mapping between world and percent space for one map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    /// Percent-space origin on the horizontal image axis
    pub offset_x: f64,
    /// Percent-space origin on the vertical image axis
    pub offset_z: f64,
    /// World-unit-to-percent factor for the horizontal axis, never zero
    pub scale_x: f64,
    /// World-unit-to-percent factor for the vertical axis, never zero
    pub scale_z: f64,
    pub flip_x: bool,
    pub flip_z: bool,
    /// Exchange world x and z before projecting
    #[serde(rename = "swapXZ")]
    pub swap_axes: bool,
}

impl Calibration {
    pub const fn new(
        offset_x: f64,
        offset_z: f64,
        scale_x: f64,
        scale_z: f64,
        flip_x: bool,
        flip_z: bool,
        swap_axes: bool,
    ) -> Self {
        Self {
            offset_x,
            offset_z,
            scale_x,
            scale_z,
            flip_x,
            flip_z,
            swap_axes,
        }
    }

    /// Identity mapping: world units map 1:1 onto percent space
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0, false, false, false)
    }

    /// Returns a new record with the supplied fields merged in.
    ///
    /// Non-finite numbers keep the previous value; scales are kept away from zero.
    pub fn merged(&self, update: &CalibrationUpdate) -> Calibration {
        let mut next = *self;

        if let Some(value) = update.offset_x {
            next.offset_x = finite_or(value, self.offset_x, "offsetX");
        }
        if let Some(value) = update.offset_z {
            next.offset_z = finite_or(value, self.offset_z, "offsetZ");
        }
        if let Some(value) = update.scale_x {
            next.scale_x = clamp_scale(finite_or(value, self.scale_x, "scaleX"));
        }
        if let Some(value) = update.scale_z {
            next.scale_z = clamp_scale(finite_or(value, self.scale_z, "scaleZ"));
        }
        if let Some(value) = update.flip_x {
            next.flip_x = value;
        }
        if let Some(value) = update.flip_z {
            next.flip_z = value;
        }
        if let Some(value) = update.swap_axes {
            next.swap_axes = value;
        }

        next
    }

    /// Reads a single field as a number (booleans read as 0/1)
    pub fn field(&self, field: CalibrationField) -> f64 {
        match field {
            CalibrationField::OffsetX => self.offset_x,
            CalibrationField::OffsetZ => self.offset_z,
            CalibrationField::ScaleX => self.scale_x,
            CalibrationField::ScaleZ => self.scale_z,
            CalibrationField::FlipX => f64::from(u8::from(self.flip_x)),
            CalibrationField::FlipZ => f64::from(u8::from(self.flip_z)),
            CalibrationField::SwapAxes => f64::from(u8::from(self.swap_axes)),
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Self::identity()
    }
}

fn finite_or(value: f64, previous: f64, name: &str) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Rejected non-finite {} = {}, keeping {}", name, value, previous);
        previous
    }
}

/// Keeps a scale factor at least `MIN_SCALE_MAGNITUDE` away from zero, preserving its sign
pub fn clamp_scale(scale: f64) -> f64 {
    if scale.abs() >= MIN_SCALE_MAGNITUDE {
        scale
    } else if scale < 0.0 {
        log::warn!("Scale {} too small, clamped to {}", scale, -MIN_SCALE_MAGNITUDE);
        -MIN_SCALE_MAGNITUDE
    } else {
        log::warn!("Scale {} too small, clamped to {}", scale, MIN_SCALE_MAGNITUDE);
        MIN_SCALE_MAGNITUDE
    }
}

/// The individually editable calibration fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalibrationField {
    OffsetX,
    OffsetZ,
    ScaleX,
    ScaleZ,
    FlipX,
    FlipZ,
    SwapAxes,
}

impl CalibrationField {
    pub const ALL: [CalibrationField; 7] = [
        CalibrationField::OffsetX,
        CalibrationField::OffsetZ,
        CalibrationField::ScaleX,
        CalibrationField::ScaleZ,
        CalibrationField::FlipX,
        CalibrationField::FlipZ,
        CalibrationField::SwapAxes,
    ];

    /// Label shown next to the edit control
    pub fn label(&self) -> &'static str {
        match self {
            CalibrationField::OffsetX => "Origin Offset X (%)",
            CalibrationField::OffsetZ => "Origin Offset Z (%)",
            CalibrationField::ScaleX => "Coord Scale X",
            CalibrationField::ScaleZ => "Coord Scale Z",
            CalibrationField::FlipX => "Invert X",
            CalibrationField::FlipZ => "Invert Z",
            CalibrationField::SwapAxes => "Swap X/Z Axes",
        }
    }

    pub fn is_toggle(&self) -> bool {
        matches!(
            self,
            CalibrationField::FlipX | CalibrationField::FlipZ | CalibrationField::SwapAxes
        )
    }

    /// Slider range and step for numeric fields
    pub fn slider_range(&self) -> Option<(f64, f64, f64)> {
        match self {
            CalibrationField::OffsetX | CalibrationField::OffsetZ => Some((0.0, 100.0, 0.001)),
            CalibrationField::ScaleX | CalibrationField::ScaleZ => {
                Some((MIN_SCALE_MAGNITUDE, 0.3, 0.0001))
            }
            _ => None,
        }
    }
}

/// A sparse set of calibration fields to merge into an existing record
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalibrationUpdate {
    pub offset_x: Option<f64>,
    pub offset_z: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_z: Option<f64>,
    pub flip_x: Option<bool>,
    pub flip_z: Option<bool>,
    #[serde(rename = "swapXZ")]
    pub swap_axes: Option<bool>,
}

impl CalibrationUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset_x(mut self, value: f64) -> Self {
        self.offset_x = Some(value);
        self
    }

    pub fn offset_z(mut self, value: f64) -> Self {
        self.offset_z = Some(value);
        self
    }

    pub fn scale_x(mut self, value: f64) -> Self {
        self.scale_x = Some(value);
        self
    }

    pub fn scale_z(mut self, value: f64) -> Self {
        self.scale_z = Some(value);
        self
    }

    pub fn flip_x(mut self, value: bool) -> Self {
        self.flip_x = Some(value);
        self
    }

    pub fn flip_z(mut self, value: bool) -> Self {
        self.flip_z = Some(value);
        self
    }

    pub fn swap_axes(mut self, value: bool) -> Self {
        self.swap_axes = Some(value);
        self
    }

    /// Builds an update for one field from a numeric control value.
    ///
    /// NaN produces an empty update, leaving the prior value in place.
    pub fn with_value(field: CalibrationField, value: f64) -> Self {
        let update = Self::new();
        if value.is_nan() {
            log::warn!("Ignoring NaN {:?} value", field);
            return update;
        }
        match field {
            CalibrationField::OffsetX => update.offset_x(value),
            CalibrationField::OffsetZ => update.offset_z(value),
            CalibrationField::ScaleX => update.scale_x(value),
            CalibrationField::ScaleZ => update.scale_z(value),
            CalibrationField::FlipX => update.flip_x(value != 0.0),
            CalibrationField::FlipZ => update.flip_z(value != 0.0),
            CalibrationField::SwapAxes => update.swap_axes(value != 0.0),
        }
    }

    /// Builds an update from the raw text of an edit control.
    ///
    /// Input that does not parse produces an empty update, leaving the prior value in place.
    pub fn from_input(field: CalibrationField, raw: &str) -> Self {
        let raw = raw.trim();
        if field.is_toggle() {
            return match raw {
                "true" | "on" | "1" => Self::with_value(field, 1.0),
                "false" | "off" | "0" => Self::with_value(field, 0.0),
                _ => {
                    log::warn!("Ignoring unparsable {:?} input {:?}", field, raw);
                    Self::new()
                }
            };
        }

        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::with_value(field, value),
            _ => {
                log::warn!("Ignoring unparsable {:?} input {:?}", field, raw);
                Self::new()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
