//! # RKCanvas
//!
//! The interactive geometry engine of a reaction-network diagram editor:
//! - Z-ordered hit testing and painting of nodes, reactions and overlays
//! - A select box that moves and resizes groups of nodes under positional
//!   and minimum-size constraints
//! - Observable selection sets driving highlight state
//!
//! ## Architecture
//!
//! RKCanvas is organized as a workspace with multiple crates:
//!
//! 1. **rkcanvas-core** - Geometry, observable sets, errors, theme
//! 2. **rkcanvas-elements** - Element kinds, registry, select box, canvas router
//! 3. **rkcanvas** - Facade and a headless demo binary
//!
//! Windowing, rendering and undo are collaborators: the host supplies a
//! [`PaintSurface`] and a [`Controller`] and feeds pointer events into a
//! [`Canvas`].

pub use rkcanvas_elements as elements;

pub use rkcanvas_core::{
    bounding_rect, clamp_point, clamp_rect_pos, padded_rect, rects_intersect, within,
    CanvasError, Color, ConfigError, ObserverId, Rect, Result, SetSubject, Subject, Theme, Vec2,
};

pub use rkcanvas_elements::{
    Canvas, CanvasElement, Controller, ControllerCall, DrawCommand, ElementBase, ElementRef,
    HitPart, LayeredElements, Node, PaintSurface, Reaction, ReactionCurve, RecordingController,
    RecordingSurface, SelectBox, SelectMode, ViewTransform, Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Reads `RKCANVAS_LOG_FORMAT`; `json` selects JSON output, anything else
    /// pretty output.
    pub fn from_env() -> Self {
        match std::env::var("RKCANVAS_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output, pretty or JSON depending on `RKCANVAS_LOG_FORMAT`
/// - RUST_LOG environment variable support
/// - INFO level by default
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::from_env())
}

/// Initialize logging with an explicit output format.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
