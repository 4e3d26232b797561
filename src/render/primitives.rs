use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const SILVER: Self = Self::rgb(0.753, 0.753, 0.753);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.647, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 0.502, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const INDIGO: Self = Self::rgb(0.294, 0.0, 0.510);
    pub const VIOLET: Self = Self::rgb(0.933, 0.510, 0.933);
    pub const GOLD: Self = Self::rgb(1.0, 0.843, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    /// Looks up one of the named colors the crate ships with.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        let color = match name.trim().to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "silver" => Self::SILVER,
            "red" => Self::RED,
            "orange" => Self::ORANGE,
            "yellow" => Self::YELLOW,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "indigo" => Self::INDIGO,
            "violet" => Self::VIOLET,
            "gold" => Self::GOLD,
            _ => return None,
        };
        Some(color)
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(ChartError::InvalidData(format!(
                "color `{input}` must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |index: usize| -> ChartResult<f64> {
            u8::from_str_radix(&digits[index..index + 2], 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| ChartError::InvalidData(format!("color `{input}` is not valid hex")))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match Self::named(input) {
            Some(color) => Ok(color),
            None => Self::from_hex(input.trim()),
        }
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled circular marker in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub color: Color,
}

impl CirclePrimitive {
    #[must_use]
    pub const fn new(center_x: f64, center_y: f64, radius: f64, color: Color) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextVAlign {
    Top,
    Middle,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    /// Rotation around the anchor in degrees; negative turns counter-clockwise.
    pub rotation_deg: f64,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align: TextVAlign::Middle,
            rotation_deg: 0.0,
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text rotation must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Any drawable the scene can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Marker(CirclePrimitive),
    Segment(LinePrimitive),
    Label(TextPrimitive),
}

impl Shape {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Marker(circle) => circle.color,
            Self::Segment(line) => line.color,
            Self::Label(text) => text.color,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        match self {
            Self::Marker(circle) => circle.color = color,
            Self::Segment(line) => line.color = color,
            Self::Label(text) => text.color = color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Marker(circle) => circle.validate(),
            Self::Segment(line) => line.validate(),
            Self::Label(text) => text.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, LinePrimitive, Shape};

    #[test]
    fn parses_named_and_hex_colors() {
        assert_eq!("black".parse::<Color>().expect("named"), Color::BLACK);
        assert_eq!(" Red ".parse::<Color>().expect("named"), Color::RED);
        let teal = "#008080".parse::<Color>().expect("hex");
        assert_eq!(teal.red, 0.0);
        assert!((teal.green - 128.0 / 255.0).abs() <= 1e-12);
        assert!("not-a-color".parse::<Color>().is_err());
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn zero_width_line_is_invalid() {
        let line = LinePrimitive::new(0.0, 0.0, 1.0, 1.0, 0.0, Color::BLACK);
        assert!(Shape::Segment(line).validate().is_err());
    }
}
