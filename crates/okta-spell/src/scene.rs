#![forbid(unsafe_code)]

//! Display list for the octagon and the recorded steps.
//!
//! [`build_scene`] is a pure function of layout, log, and drag state. All
//! sizes scale with the layout radius, so a scene built after a resize is the
//! same drawing at the new size. Steps are matched to vertices by index.
//!
//! Draw order: mesh, vertex rings, line strokes, marker/skip rings, preview.

use okta_core::geometry::{OctagonLayout, Point, VERTEX_COUNT, VertexId};
use serde::Serialize;

use crate::action_log::{ActionLog, Step, StepColor};
use crate::codec::StepKind;
use crate::config::SceneConfig;
use crate::interaction::DragState;

/// What a primitive is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "ink", content = "color")]
pub enum Ink {
    /// The 28 chords and the outer circle.
    Mesh,
    /// The small ring around each vertex.
    Vertex,
    /// A recorded step.
    Step(StepColor),
    /// The stroke following the pointer during a drag.
    Preview,
}

/// Stroke parameters shared by every primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f32,
    pub ink: Ink,
    /// Dash pattern `[on, off]`; `None` is solid.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    fn solid(width: f32, ink: Ink) -> Self {
        Self {
            width,
            ink,
            dash: None,
        }
    }
}

/// One stroked shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "shape")]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f32,
        stroke: Stroke,
    },
    Segment {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    /// Quadratic curve through `control`.
    Curve {
        from: Point,
        control: Point,
        to: Point,
        stroke: Stroke,
    },
}

impl Primitive {
    /// Stroke of this primitive.
    pub fn stroke(&self) -> &Stroke {
        match self {
            Primitive::Circle { stroke, .. }
            | Primitive::Segment { stroke, .. }
            | Primitive::Curve { stroke, .. } => stroke,
        }
    }
}

/// Ordered display list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Number of primitives.
    #[inline]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// True if nothing is drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Primitives painted with `ink`.
    pub fn with_ink(&self, ink: Ink) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(move |p| p.stroke().ink == ink)
    }

    /// Primitives belonging to recorded steps, in draw order.
    pub fn step_primitives(&self) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives
            .iter()
            .filter(|p| matches!(p.stroke().ink, Ink::Step(_)))
    }

    /// The preview stroke, if a drag is showing one.
    pub fn preview(&self) -> Option<&Primitive> {
        self.with_ink(Ink::Preview).next()
    }
}

/// Build the display list for the current state.
#[must_use]
pub fn build_scene(
    layout: &OctagonLayout,
    log: &ActionLog,
    drag: Option<&DragState>,
    config: &SceneConfig,
) -> Scene {
    let r = layout.radius();
    let mut out = Vec::with_capacity(64);
    if r <= 0.0 {
        return Scene { primitives: out };
    }

    push_mesh(&mut out, layout, config);
    push_connections(&mut out, layout, log.steps(), config);
    push_rings(&mut out, layout, log.steps(), config);

    if let Some(drag) = drag
        && let Some(pointer) = drag.pointer
    {
        let rings = ring_count(log.steps(), drag.anchor);
        let from = pushed_start(layout, drag.anchor, pointer, rings, config);
        out.push(Primitive::Segment {
            from,
            to: pointer,
            stroke: Stroke::solid(r * config.preview_line_width_scale, Ink::Preview),
        });
    }

    Scene { primitives: out }
}

fn push_mesh(out: &mut Vec<Primitive>, layout: &OctagonLayout, config: &SceneConfig) {
    let r = layout.radius();
    let mesh = Stroke::solid(r * config.base_line_width_scale, Ink::Mesh);
    let points = layout.vertices();
    for i in 0..VERTEX_COUNT {
        for j in i + 1..VERTEX_COUNT {
            out.push(Primitive::Segment {
                from: points[i],
                to: points[j],
                stroke: mesh,
            });
        }
    }
    out.push(Primitive::Circle {
        center: layout.center(),
        radius: r,
        stroke: mesh,
    });

    let ring = Stroke::solid(r * config.vertex_line_width_scale, Ink::Vertex);
    for &center in points {
        out.push(Primitive::Circle {
            center,
            radius: r * config.vertex_radius_scale,
            stroke: ring,
        });
    }
}

/// Radius of the `k`-th ring stacked on one vertex.
fn ring_radius(r: f32, k: usize, config: &SceneConfig) -> f32 {
    r * (config.ring_base_radius_scale + k as f32 * config.ring_spacing_scale)
}

fn ring_count(steps: &[Step], at: VertexId) -> usize {
    steps
        .iter()
        .filter(|s| s.is_ring() && s.target == at)
        .count()
}

/// Start of a stroke leaving `source` towards `toward`, moved out past the
/// outermost of `rings` rings already drawn there.
fn pushed_start(
    layout: &OctagonLayout,
    source: VertexId,
    toward: Point,
    rings: usize,
    config: &SceneConfig,
) -> Point {
    let from = layout.vertex(source);
    if rings == 0 {
        return from;
    }
    match from.direction_to(toward) {
        Some((ux, uy)) => {
            let d = ring_radius(layout.radius(), rings - 1, config);
            from.offset(ux * d, uy * d)
        }
        None => from,
    }
}

struct Connection {
    from: Point,
    to: Point,
    color: StepColor,
}

fn push_connections(
    out: &mut Vec<Primitive>,
    layout: &OctagonLayout,
    steps: &[Step],
    config: &SceneConfig,
) {
    let r = layout.radius();
    // Unordered vertex pair -> strokes between them, in step order.
    let mut groups: Vec<((VertexId, VertexId), Vec<Connection>)> = Vec::new();

    for (i, step) in steps.iter().enumerate() {
        if step.kind != StepKind::Line {
            continue;
        }
        let Some(source) = step.source else { continue };
        if source == step.target {
            // Decoded skip-then-return; there is no chord to draw.
            continue;
        }
        let to = layout.vertex(step.target);
        let rings = ring_count(&steps[..i], source);
        let conn = Connection {
            from: pushed_start(layout, source, to, rings, config),
            to,
            color: step.color,
        };

        let key = if source < step.target {
            (source, step.target)
        } else {
            (step.target, source)
        };
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(conn),
            None => groups.push((key, vec![conn])),
        }
    }

    let width = r * config.connection_line_width_scale;
    let spread = r * config.curve_offset_scale;
    for ((a, b), group) in groups {
        let pa = layout.vertex(a);
        let pb = layout.vertex(b);
        let mid = pa.midpoint(pb);
        let Some((ux, uy)) = pa.direction_to(pb) else {
            continue;
        };
        let (nx, ny) = (-uy, ux);
        let center = (group.len() as f32 - 1.0) / 2.0;
        for (i, conn) in group.into_iter().enumerate() {
            let offset = (i as f32 - center) * spread;
            out.push(Primitive::Curve {
                from: conn.from,
                control: mid.offset(nx * offset, ny * offset),
                to: conn.to,
                stroke: Stroke::solid(width, Ink::Step(conn.color)),
            });
        }
    }
}

fn push_rings(out: &mut Vec<Primitive>, layout: &OctagonLayout, steps: &[Step], config: &SceneConfig) {
    let r = layout.radius();
    let mut stacked = [0usize; VERTEX_COUNT];
    for step in steps.iter().filter(|s| s.is_ring()) {
        let k = &mut stacked[step.target.index()];
        let stroke = if step.kind == StepKind::Skip {
            Stroke {
                width: r * config.skip_line_width_scale,
                ink: Ink::Step(step.color),
                dash: Some([r * config.skip_dash_scale[0], r * config.skip_dash_scale[1]]),
            }
        } else {
            Stroke::solid(r * config.marker_line_width_scale, Ink::Step(step.color))
        };
        out.push(Primitive::Circle {
            center: layout.vertex(step.target),
            radius: ring_radius(r, *k, config),
            stroke,
        });
        *k += 1;
    }
}
