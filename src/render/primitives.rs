use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serializes as a CSS hex string (`#rrggbb` or `#rrggbbaa`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
        )
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidData(format!("invalid hex color `{input}`"));
        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |hex: &str| -> ChartResult<f64> {
            let value = u8::from_str_radix(hex, 16).map_err(|_| invalid())?;
            Ok(f64::from(value) / 255.0)
        };

        match digits.len() {
            3 => {
                let mut channels = [0.0; 3];
                for (slot, index) in channels.iter_mut().zip(0..3) {
                    let digit = &digits[index..index + 1];
                    *slot = channel(&format!("{digit}{digit}"))?;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 | 8 => {
                let alpha = if digits.len() == 8 {
                    channel(&digits[6..8])?
                } else {
                    1.0
                };
                Ok(Self::rgba(
                    channel(&digits[0..2])?,
                    channel(&digits[2..4])?,
                    channel(&digits[4..6])?,
                    alpha,
                ))
            }
            _ => Err(invalid()),
        }
    }

    /// CSS representation, `#rrggbb` when opaque.
    #[must_use]
    pub fn to_css(self) -> String {
        let byte = |value: f64| (value * 255.0).round().clamp(0.0, 255.0) as u8;
        let (r, g, b) = (byte(self.red), byte(self.green), byte(self.blue));
        if self.alpha >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{:02x}", byte(self.alpha))
        }
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

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Stable identity of one rendered element across redraws.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKey {
    Segment {
        segment_id: String,
    },
    Category {
        segment_id: String,
        category_index: usize,
    },
    Label {
        segment_id: String,
    },
}

impl ShapeKey {
    #[must_use]
    pub fn segment(segment_id: impl Into<String>) -> Self {
        Self::Segment {
            segment_id: segment_id.into(),
        }
    }

    #[must_use]
    pub fn category(segment_id: impl Into<String>, category_index: usize) -> Self {
        Self::Category {
            segment_id: segment_id.into(),
            category_index,
        }
    }

    #[must_use]
    pub fn label(segment_id: impl Into<String>) -> Self {
        Self::Label {
            segment_id: segment_id.into(),
        }
    }

    #[must_use]
    pub fn segment_id(&self) -> &str {
        match self {
            Self::Segment { segment_id }
            | Self::Category { segment_id, .. }
            | Self::Label { segment_id } => segment_id,
        }
    }

    #[must_use]
    pub fn category_index(&self) -> Option<usize> {
        match self {
            Self::Category { category_index, .. } => Some(*category_index),
            Self::Segment { .. } | Self::Label { .. } => None,
        }
    }
}

/// Interaction flags reapplied to a shape on every pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeState {
    pub selected: bool,
    pub dragging: bool,
    pub hovered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcRole {
    Segment,
    Category,
}

/// One filled arc in chart-local coordinates (origin at the pie center).
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPrimitive {
    pub key: ShapeKey,
    pub role: ArcRole,
    pub element_id: String,
    /// Data-order index of the owning segment.
    pub segment_index: usize,
    pub path: BezPath,
    /// `None` leaves the fill to renderer styling.
    pub fill: Option<Color>,
    pub state: ShapeState,
}

impl ArcPrimitive {
    /// Style classes for class-based renderers.
    #[must_use]
    pub fn css_classes(&self) -> String {
        let mut classes = match self.role {
            ArcRole::Segment => format!("drag-pie-segment drag-pie-segment{}", self.segment_index),
            ArcRole::Category => format!(
                "drag-pie-category drag-pie-segment{}-category",
                self.segment_index
            ),
        };
        if self.state.selected {
            classes.push_str(" drag-pie-selected");
        }
        if self.state.dragging {
            classes.push_str(" drag-pie-dragging");
        }
        if self.state.hovered {
            classes.push_str(" drag-pie-hover");
        }
        classes
    }

    pub fn validate(&self) -> ChartResult<()> {
        let finite = |point: &Point| point.is_finite();
        for element in self.path.elements() {
            let ok = match element {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => finite(p),
                PathEl::QuadTo(p1, p2) => finite(p1) && finite(p2),
                PathEl::CurveTo(p1, p2, p3) => finite(p1) && finite(p2) && finite(p3),
                PathEl::ClosePath => true,
            };
            if !ok {
                return Err(ChartError::InvalidData(format!(
                    "arc `{}` has non-finite geometry",
                    self.element_id
                )));
            }
        }
        if let Some(fill) = self.fill {
            fill.validate()?;
        }
        Ok(())
    }
}

/// Segment name label laid along its segment's arc outline.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrimitive {
    pub key: ShapeKey,
    pub element_id: String,
    pub segment_index: usize,
    pub text: String,
    /// Element id of the arc the label follows.
    pub path_element_id: String,
}

impl LabelPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if self.path_element_id.is_empty() {
            return Err(ChartError::InvalidData(
                "label must reference an arc element".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Anything the reconciler tracks by key.
#[derive(Debug, Clone, PartialEq)]
pub enum ScenePrimitive {
    Arc(ArcPrimitive),
    Label(LabelPrimitive),
}

impl ScenePrimitive {
    #[must_use]
    pub fn key(&self) -> &ShapeKey {
        match self {
            Self::Arc(arc) => &arc.key,
            Self::Label(label) => &label.key,
        }
    }

    #[must_use]
    pub fn element_id(&self) -> &str {
        match self {
            Self::Arc(arc) => &arc.element_id,
            Self::Label(label) => &label.element_id,
        }
    }

    #[must_use]
    pub fn as_arc(&self) -> Option<&ArcPrimitive> {
        match self {
            Self::Arc(arc) => Some(arc),
            Self::Label(_) => None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Arc(arc) => arc.validate(),
            Self::Label(label) => label.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_parse_and_print() {
        let color = Color::from_hex("#1f77b4").expect("valid hex");
        assert_eq!(color.to_css(), "#1f77b4");
        assert_eq!(
            Color::from_hex("#fff").expect("short hex").to_css(),
            "#ffffff"
        );
        assert_eq!(
            Color::from_hex("#00000080").expect("alpha hex").to_css(),
            "#00000080"
        );
        assert!(Color::from_hex("1f77b4").is_err());
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn colors_serialize_as_css_strings() {
        let json = serde_json::to_string(&Color::from_rgb8(255, 0, 0)).expect("serialize");
        assert_eq!(json, "\"#ff0000\"");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.to_css(), "#ff0000");
    }

    #[test]
    fn state_flags_extend_css_classes() {
        let arc = ArcPrimitive {
            key: ShapeKey::segment("a"),
            role: ArcRole::Segment,
            element_id: "p-segment-a".to_owned(),
            segment_index: 2,
            path: BezPath::new(),
            fill: None,
            state: ShapeState {
                selected: true,
                dragging: false,
                hovered: true,
            },
        };
        assert_eq!(
            arc.css_classes(),
            "drag-pie-segment drag-pie-segment2 drag-pie-selected drag-pie-hover"
        );
    }
}
