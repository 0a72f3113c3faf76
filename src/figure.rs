//! The chart description handed to a display surface: a flat list of
//! renderable primitives plus canvas metadata. Serialized as JSON the
//! same way the layout dump of a diagram renderer would be; no charting
//! library API leaks into these types.

use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub const FIGURE_TITLE: &str = "Network Graph";
pub const CANVAS_SIZE: f64 = 800.0;
pub const TITLE_FONT_SIZE: f64 = 50.0;
pub const NODE_TEXT_FONT_SIZE: f64 = 15.0;
pub const WEIGHT_LABEL_FONT_SIZE: f64 = 12.0;
pub const COLOR_SCALE: &str = "bluered";
pub const COLORBAR_TITLE: &str = "Weight";

/// A 2D node marker with its single-character text and full-name hover.
#[derive(Debug, Clone, Serialize)]
pub struct Marker2d {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
    pub text: String,
    pub text_font_size: f64,
    pub hover: String,
}

/// A 2D arrow annotation from `from` to `to`, standing off the node
/// markers at both ends.
#[derive(Debug, Clone, Serialize)]
pub struct ArrowAnnotation {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub color: String,
    pub opacity: f64,
    pub head_style: u8,
    pub head_scale: f64,
    pub width: f64,
    pub standoff: f64,
    pub start_standoff: f64,
}

/// Free-standing text, used for the 2D edge weight labels.
#[derive(Debug, Clone, Serialize)]
pub struct TextLabel {
    pub position: [f64; 2],
    pub text: String,
    pub font_size: f64,
}

/// A 3D node marker with centered text.
#[derive(Debug, Clone, Serialize)]
pub struct Marker3d {
    pub position: [f64; 3],
    pub size: f64,
    pub color: String,
    pub text: String,
    pub text_font_size: f64,
    pub hover: String,
}

/// A 3D line segment colored by its scalar `color_value` on a shared
/// scale. Exactly one segment per figure carries `show_scale` and the
/// colorbar title.
#[derive(Debug, Clone, Serialize)]
pub struct Line3d {
    pub from: [f64; 3],
    pub to: [f64; 3],
    pub width: f64,
    pub opacity: f64,
    pub color_value: f64,
    pub color_scale: String,
    pub color_min: f64,
    pub color_max: f64,
    pub show_scale: bool,
    pub colorbar_title: Option<String>,
    pub hover: String,
}

/// A directional cone glyph at one end of a 3D segment.
#[derive(Debug, Clone, Serialize)]
pub struct ConeGlyph {
    pub position: [f64; 3],
    pub direction: [f64; 3],
    pub opacity: f64,
    pub size_mode: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Marker2d(Marker2d),
    Arrow(ArrowAnnotation),
    Label(TextLabel),
    Marker3d(Marker3d),
    Line3d(Line3d),
    Cone(ConeGlyph),
}

/// Axis cosmetics. Planar figures hide grid, zeroline, and tick
/// labels; spatial figures hide the three scene axes entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Axes {
    Planar {
        show_grid: bool,
        show_zeroline: bool,
        show_tick_labels: bool,
    },
    Spatial {
        axis_visible: bool,
        show_tick_labels: bool,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct FigureLayout {
    pub title: String,
    pub title_font_size: f64,
    pub title_x: f64,
    pub width: f64,
    pub height: f64,
    pub show_legend: bool,
    pub hover_mode: String,
    pub axes: Axes,
}

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub layout: FigureLayout,
    pub traces: Vec<Trace>,
}

impl Figure {
    /// Canvas shared by both scene builders: fixed square size,
    /// centered oversized title, no legend, closest-point hover.
    fn layout(axes: Axes) -> FigureLayout {
        FigureLayout {
            title: FIGURE_TITLE.to_string(),
            title_font_size: TITLE_FONT_SIZE,
            title_x: 0.5,
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            show_legend: false,
            hover_mode: "closest".to_string(),
            axes,
        }
    }

    pub fn planar(traces: Vec<Trace>) -> Self {
        Self {
            layout: Self::layout(Axes::Planar {
                show_grid: false,
                show_zeroline: false,
                show_tick_labels: false,
            }),
            traces,
        }
    }

    pub fn spatial(traces: Vec<Trace>) -> Self {
        Self {
            layout: Self::layout(Axes::Spatial {
                axis_visible: false,
                show_tick_labels: false,
            }),
            traces,
        }
    }
}

/// Writes the figure as pretty JSON to `output`, or stdout when no path
/// is given.
pub fn write_figure_json(figure: &Figure, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, figure)?;
        }
        None => {
            let json = serde_json::to_string_pretty(figure)?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Weight text the way a spreadsheet shows it: whole numbers without a
/// trailing `.0`.
pub(crate) fn format_weight(weight: f64) -> String {
    if weight.fract() == 0.0 && weight.abs() < 1e15 {
        format!("{}", weight as i64)
    } else {
        format!("{weight}")
    }
}
