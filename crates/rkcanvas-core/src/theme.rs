//! Theme configuration
//!
//! A read-only set of named numeric and color parameters consulted while
//! hit-testing, painting and resizing. The theme is injected into elements at
//! construction; nothing in the workspace reads global settings.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// Canvas theme: every key the elements and the select box consult.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color of the selection outline, handles and selected centroids
    pub select_box_color: Color,
    /// Stroke width of every selection outline
    pub select_outline_width: f64,
    /// Padding around a single selected node, and around each member of a
    /// multi-selection
    pub select_outline_padding: f64,
    /// Padding around the bounding box of a multi-node selection
    pub select_box_padding: f64,
    /// Side length of the square resize handles
    pub select_handle_length: f64,
    /// Smallest width a node may be resized to
    pub min_node_width: f64,
    /// Smallest height a node may be resized to
    pub min_node_height: f64,
    /// Radius of the dot drawn at a reaction centroid
    pub reaction_radius: f64,
    /// Font size of node labels at scale 1.0
    pub node_font_size: f64,
    /// Color of node labels
    pub label_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            select_box_color: Color::rgb(0, 140, 255),
            select_outline_width: 2.0,
            select_outline_padding: 3.0,
            select_box_padding: 5.0,
            select_handle_length: 8.0,
            min_node_width: 20.0,
            min_node_height: 15.0,
            reaction_radius: 6.0,
            node_font_size: 10.0,
            label_color: Color::BLACK,
        }
    }
}

impl Theme {
    /// Parses a (possibly partial) JSON override. Missing keys keep their
    /// default values. The result is validated before it is returned.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let theme: Theme = serde_json::from_str(json)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Padding of the selection bounding box for `count` selected nodes.
    pub fn selection_padding(&self, count: usize) -> f64 {
        if count > 1 {
            self.select_box_padding
        } else {
            self.select_outline_padding
        }
    }

    /// Checks that every size is in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("select_outline_width", self.select_outline_width),
            ("select_handle_length", self.select_handle_length),
            ("min_node_width", self.min_node_width),
            ("min_node_height", self.min_node_height),
            ("node_font_size", self.node_font_size),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(key, value));
            }
        }

        let non_negative = [
            ("select_outline_padding", self.select_outline_padding),
            ("select_box_padding", self.select_box_padding),
            ("reaction_radius", self.reaction_radius),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(out_of_range(key, value));
            }
        }

        Ok(())
    }
}

fn out_of_range(key: &str, value: f64) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}
