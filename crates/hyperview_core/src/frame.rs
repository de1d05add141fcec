//! Per-frame pipeline
//!
//! One frame runs to completion before the next begins:
//! integrate rotation → rebuild model → rotate → project → normalize depth →
//! emit draw commands.

use hyperview_math::projection::screen_position;
use hyperview_math::{MatrixError, PerspectiveParams, Point2, Point4, Projection, RotationOrder};

use crate::color::{self, LABEL_COLOR};
use crate::display::{DisplayFlags, SceneState};
use crate::draw::{DrawCommand, DrawStyle};
use crate::model::{TesseractModel, CUBE_VERTEX_COUNT};
use crate::rotation_state::RotationState;

/// Output of the projection stages for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedModel {
    /// 2D position of every model point
    pub positions: Vec<Point2>,
    /// Projected w (depth proxy) of every model point
    pub projected_w: Vec<f64>,
    /// Normalized depth of each cube vertex, in [0, 1]
    pub depths: Vec<f64>,
    /// Cube vertices after rotation, before projection
    pub rotated_vertices: Vec<Point4>,
}

/// Everything computed for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub model: TesseractModel,
    pub projected: ProjectedModel,
    pub commands: Vec<DrawCommand>,
}

/// Runs the frame pipeline against a [`SceneState`]
#[derive(Clone, Debug)]
pub struct FrameOrchestrator {
    order: RotationOrder,
    projection: Projection,
    style: DrawStyle,
}

impl FrameOrchestrator {
    /// Canonical rotation order and default style
    pub fn new(params: PerspectiveParams) -> Result<Self, MatrixError> {
        Ok(Self {
            order: RotationOrder::default(),
            projection: Projection::new(params)?,
            style: DrawStyle::default(),
        })
    }

    /// Builder: override the order in which plane rotations are applied
    pub fn with_order(mut self, order: RotationOrder) -> Self {
        self.order = order;
        self
    }

    /// Builder: override line width, dot radius and label layout
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// Advance rotation by one step and produce the frame
    pub fn render_frame(&self, state: &mut SceneState) -> Result<Frame, MatrixError> {
        state.rotation.integrate();
        self.project_static(&state.rotation, state.display)
    }

    /// Produce a frame for the current angles without integrating
    pub fn project_static(
        &self,
        rotation: &RotationState,
        display: DisplayFlags,
    ) -> Result<Frame, MatrixError> {
        let mut model = TesseractModel::build();

        for p in model.points_mut() {
            *p = self.order.apply(*p, rotation.angles())?;
        }
        let rotated_vertices = model.cube_vertices().to_vec();

        let projected = model
            .points()
            .iter()
            .map(|&p| self.projection.project(p))
            .collect::<Result<Vec<_>, _>>()?;

        let positions: Vec<Point2> = projected.iter().copied().map(screen_position).collect();
        let projected_w: Vec<f64> = projected.iter().map(|p| p.w).collect();
        let depths = color::normalize_depths(&projected_w[..CUBE_VERTEX_COUNT]);

        let projected = ProjectedModel {
            positions,
            projected_w,
            depths,
            rotated_vertices,
        };
        let commands = self.emit(&model, &projected, display);

        log::debug!("frame: {} draw commands", commands.len());

        Ok(Frame { model, projected, commands })
    }

    /// Axis edges → cube edges → vertex dots (each followed by its label)
    fn emit(
        &self,
        model: &TesseractModel,
        projected: &ProjectedModel,
        display: DisplayFlags,
    ) -> Vec<DrawCommand> {
        let style = &self.style;
        let pos = &projected.positions;
        let mut commands = Vec::new();

        if display.contains(DisplayFlags::AXES) {
            for (axis, edge) in model.axis_edges().iter().enumerate() {
                commands.push(DrawCommand::solid_line(
                    pos[edge.a],
                    pos[edge.b],
                    color::axis_color(axis),
                    style.line_width,
                ));
            }
        }

        for edge in model.cube_edges() {
            commands.push(DrawCommand::Line {
                from: pos[edge.a],
                to: pos[edge.b],
                color_start: color::edge_color(projected.depths[edge.a]),
                color_end: color::edge_color(projected.depths[edge.b]),
                width: style.line_width,
            });
        }

        for (i, &depth) in projected.depths.iter().enumerate() {
            commands.push(DrawCommand::FilledCircle {
                center: pos[i],
                radius: style.vertex_radius,
                color: color::vertex_color(depth),
            });

            if display.contains(DisplayFlags::LABELS) {
                let (dx, dy) = style.label_offset;
                commands.push(DrawCommand::Text {
                    position: pos[i].offset(dx, dy),
                    text: vertex_label(projected.rotated_vertices[i]),
                    color: LABEL_COLOR,
                    size: style.label_size,
                });
            }
        }

        commands
    }
}

/// Label text of a rotated vertex
pub fn vertex_label(p: Point4) -> String {
    format!("{:.2},{:.2},{:.2},{:.2}", p.x, p.y, p.z, p.w)
}
