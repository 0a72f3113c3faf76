//! 2D scene builder: one marker per node, one arrow annotation plus
//! weight label per directed edge. Bidirectional pairs get their
//! arrows offset to opposite sides so neither hides the other.

use crate::config::RenderOptions;
use crate::error::FigureError;
use crate::figure::{
    ArrowAnnotation, Figure, Marker2d, TextLabel, Trace, format_weight, NODE_TEXT_FONT_SIZE,
    WEIGHT_LABEL_FONT_SIZE,
};
use crate::geometry::{midpoint_shift, parallel_shift};
use crate::model::PlotModel;

const ARROW_COLOR: &str = "black";
const ARROW_OPACITY: f64 = 0.2;
const ARROW_HEAD_STYLE: u8 = 2;
const ARROW_HEAD_SCALE: f64 = 1.0;
const ARROW_WIDTH: f64 = 1.5;

pub fn build_scene_2d(model: &PlotModel, options: &RenderOptions) -> Result<Figure, FigureError> {
    let mut traces = Vec::new();
    draw_nodes(model, options, &mut traces);
    draw_edges(model, options, &mut traces)?;
    Ok(Figure::planar(traces))
}

fn draw_nodes(model: &PlotModel, options: &RenderOptions, traces: &mut Vec<Trace>) {
    for record in model.iter() {
        let [x, y] = record.pos2();
        traces.push(Trace::Marker2d(Marker2d {
            x,
            y,
            size: options.node_radius * 2.0,
            color: record.color.clone(),
            text: first_char(&record.label),
            text_font_size: NODE_TEXT_FONT_SIZE,
            hover: record.label.clone(),
        }));
    }
}

/// Every directed edge gets its own arrow; duplicates in the target
/// list are drawn separately, there is no dedup in 2D. The weight
/// label sits on the un-shifted edge axis even when the arrow itself
/// is parallel-shifted.
fn draw_edges(
    model: &PlotModel,
    options: &RenderOptions,
    traces: &mut Vec<Trace>,
) -> Result<(), FigureError> {
    for record in model.iter() {
        for (target, weight) in record.targets.iter().zip(&record.target_weights) {
            let target_record = model
                .node(target)
                .ok_or_else(|| FigureError::MissingNodeAttrs(target.clone()))?;
            let p1 = record.pos2();
            let p2 = target_record.pos2();

            let bidirectional = model.has_edge(target, &record.id);
            let (arrow_from, arrow_to) = if bidirectional {
                parallel_shift(p1, p2, options.parallel_shift, &record.id, target)?
            } else {
                (p1, p2)
            };

            traces.push(Trace::Arrow(ArrowAnnotation {
                from: arrow_from,
                to: arrow_to,
                color: ARROW_COLOR.to_string(),
                opacity: ARROW_OPACITY,
                head_style: ARROW_HEAD_STYLE,
                head_scale: ARROW_HEAD_SCALE,
                width: ARROW_WIDTH,
                standoff: options.node_radius,
                start_standoff: options.node_radius,
            }));

            traces.push(Trace::Label(TextLabel {
                position: midpoint_shift(p1, p2, options.midpoint_shift),
                text: format_weight(*weight),
                font_size: WEIGHT_LABEL_FONT_SIZE,
            }));
        }
    }
    Ok(())
}

fn first_char(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}
