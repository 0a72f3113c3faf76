//! 3D scene builder. Bidirectional pairs collapse into a single line
//! segment with a combined hover label and a cone at each end; edge
//! colors share one scale domain padded past the extremal weights so
//! no segment saturates at the boundary.

use std::collections::HashSet;

use crate::config::RenderOptions;
use crate::error::FigureError;
use crate::figure::{
    ConeGlyph, Figure, Line3d, Marker3d, Trace, format_weight, COLORBAR_TITLE, COLOR_SCALE,
    NODE_TEXT_FONT_SIZE,
};
use crate::geometry::move_middle_points;
use crate::model::{PlotModel, PlotNode};

const LINE_OPACITY: f64 = 0.5;
const FORWARD_CONE_OPACITY: f64 = 0.8;
const REVERSE_CONE_OPACITY: f64 = 0.5;
const CONE_SIZE_MODE: &str = "scaled";
/// Padding on each side of the weight range, so min and max weights
/// still map inside the color scale.
const SCALE_PADDING: f64 = 1.0;

pub fn build_scene_3d(model: &PlotModel, options: &RenderOptions) -> Result<Figure, FigureError> {
    let mut traces = Vec::new();
    draw_nodes(model, options, &mut traces);
    draw_edges(model, options, &mut traces)?;
    Ok(Figure::spatial(traces))
}

fn draw_nodes(model: &PlotModel, options: &RenderOptions, traces: &mut Vec<Trace>) {
    for record in model.iter() {
        traces.push(Trace::Marker3d(Marker3d {
            position: record.pos3(),
            size: options.node_size_3d,
            color: record.color.clone(),
            text: first_char(&record.label),
            text_font_size: NODE_TEXT_FONT_SIZE,
            hover: record.label.clone(),
        }));
    }
}

fn draw_edges(
    model: &PlotModel,
    options: &RenderOptions,
    traces: &mut Vec<Trace>,
) -> Result<(), FigureError> {
    let (weight_min, weight_max) = model.weight_range();
    let color_min = weight_min - SCALE_PADDING;
    let color_max = weight_max + SCALE_PADDING;

    // edges already drawn from the other direction
    let mut skip: HashSet<(String, String)> = HashSet::new();
    let mut scale_shown = false;

    for record in model.iter() {
        for (target, weight) in record.targets.iter().zip(&record.target_weights) {
            if skip.contains(&(record.id.clone(), target.clone())) {
                continue;
            }
            let target_record = model
                .node(target)
                .ok_or_else(|| FigureError::MissingNodeAttrs(target.clone()))?;
            let p1_init = record.pos3();
            let p2_init = target_record.pos3();
            let (p1_line, p2_line, unit) = move_middle_points(
                p1_init,
                p2_init,
                options.midpoint_shift_3d,
                &record.id,
                target,
            )?;

            let bidirectional = model.has_edge(target, &record.id);
            let hover = if bidirectional {
                let other_weight = reverse_weight(target_record, &record.id);
                skip.insert((target.clone(), record.id.clone()));
                format!(
                    "<b>{} -> {}: {} <br> {} -> {}: {}</b>",
                    record.label,
                    target_record.label,
                    format_weight(*weight),
                    target_record.label,
                    record.label,
                    format_weight(other_weight),
                )
            } else {
                format!(
                    "<b>{} -> {}: {}</b>",
                    record.label,
                    target_record.label,
                    format_weight(*weight),
                )
            };

            traces.push(Trace::Line3d(Line3d {
                from: p1_line,
                to: p2_line,
                width: options.line_width_3d,
                opacity: LINE_OPACITY,
                color_value: *weight,
                color_scale: COLOR_SCALE.to_string(),
                color_min,
                color_max,
                show_scale: !scale_shown,
                colorbar_title: (!scale_shown).then(|| COLORBAR_TITLE.to_string()),
                hover,
            }));
            scale_shown = true;

            traces.push(cone(p2_line, unit, options.cone_size, FORWARD_CONE_OPACITY));

            if bidirectional {
                let (_, reverse_tip, reverse_unit) = move_middle_points(
                    p2_init,
                    p1_init,
                    options.midpoint_shift_3d,
                    target,
                    &record.id,
                )?;
                traces.push(cone(
                    reverse_tip,
                    reverse_unit,
                    options.cone_size,
                    REVERSE_CONE_OPACITY,
                ));
            }
        }
    }
    Ok(())
}

/// Weight of the reverse edge for the combined hover label. First
/// occurrence wins when the reverse node lists the target twice.
fn reverse_weight(record: &PlotNode, back_to: &str) -> f64 {
    record
        .targets
        .iter()
        .position(|candidate| candidate == back_to)
        .map(|index| record.target_weights[index])
        .unwrap_or_default()
}

fn cone(position: [f64; 3], unit: [f64; 3], size: f64, opacity: f64) -> Trace {
    Trace::Cone(ConeGlyph {
        position,
        direction: [unit[0] * size, unit[1] * size, unit[2] * size],
        opacity,
        size_mode: CONE_SIZE_MODE.to_string(),
    })
}

fn first_char(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}
