#![forbid(unsafe_code)]

//! Octagon layout geometry.
//!
//! The drawing surface holds eight vertices evenly spaced on a circle. Vertex
//! 0 sits due north and indices increase clockwise (screen coordinates, y
//! grows downward).
//!
//! # Invariants
//!
//! 1. Vertex `i` lies at angle `(π/4)·i − π/2` from the center, at exactly
//!    `radius` distance.
//! 2. `radius` is a fixed fraction of the smaller layout dimension.
//! 3. Vertices are identified by [`VertexId`], never by coordinates. A resize
//!    recomputes every coordinate but leaves every index valid.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of vertices on the octagon.
pub const VERTEX_COUNT: usize = 8;

/// Fraction of the smaller layout dimension used as the circle radius.
pub const DEFAULT_RADIUS_SCALE: f32 = 0.34;

/// A point in layout-local coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Unit vector pointing from `self` towards `other`.
    ///
    /// Returns `None` when the points coincide.
    pub fn direction_to(self, other: Point) -> Option<(f32, f32)> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len > 0.0 && len.is_finite() {
            Some((dx / len, dy / len))
        } else {
            None
        }
    }
}

/// Identity of one of the eight octagon vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct VertexId(u8);

impl VertexId {
    /// The fixed first vertex (due north). Every session starts here.
    pub const FIRST: VertexId = VertexId(0);

    /// Create a vertex id, returning `None` for indices outside `0..8`.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < VERTEX_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create a vertex id from an index known to be in range.
    ///
    /// Indices are reduced modulo 8.
    #[must_use]
    pub const fn wrapping(index: usize) -> Self {
        Self((index % VERTEX_COUNT) as u8)
    }

    /// Raw index (`0..8`).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All vertices in index order.
    pub fn all() -> impl Iterator<Item = VertexId> + Clone {
        (0..VERTEX_COUNT as u8).map(VertexId)
    }

    /// Angle of this vertex from the circle center, in radians.
    #[inline]
    #[must_use]
    pub fn angle(self) -> f32 {
        FRAC_PI_4 * self.0 as f32 - FRAC_PI_2
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<VertexId> for u8 {
    fn from(id: VertexId) -> Self {
        id.0
    }
}

impl TryFrom<u8> for VertexId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        VertexId::new(value).ok_or_else(|| format!("vertex index {value} out of range 0..8"))
    }
}

/// Size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create a square size.
    #[inline]
    pub const fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    /// The smaller of the two dimensions.
    #[inline]
    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    /// True if either dimension is zero, negative, or not finite.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite())
    }
}

/// Computed octagon layout for a given surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct OctagonLayout {
    size: Size,
    center: Point,
    radius: f32,
    vertices: [Point; VERTEX_COUNT],
}

impl OctagonLayout {
    /// Compute the layout for `size`, with the radius set to
    /// `radius_scale × min(width, height)`.
    ///
    /// Empty or non-finite sizes produce a degenerate layout with every vertex
    /// at the origin and zero radius; hit tests against it never match.
    #[must_use]
    pub fn compute(size: Size, radius_scale: f32) -> Self {
        if size.is_empty() {
            return Self {
                size,
                center: Point::default(),
                radius: 0.0,
                vertices: [Point::default(); VERTEX_COUNT],
            };
        }

        let center = Point::new(size.width / 2.0, size.height / 2.0);
        let radius = size.min_dimension() * radius_scale;
        let mut vertices = [Point::default(); VERTEX_COUNT];
        for (id, slot) in VertexId::all().zip(vertices.iter_mut()) {
            let angle = id.angle();
            *slot = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
        }

        Self {
            size,
            center,
            radius,
            vertices,
        }
    }

    /// Surface size the layout was computed for.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Circle center.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Circle radius.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// All vertex positions, indexed by [`VertexId::index`].
    #[inline]
    pub fn vertices(&self) -> &[Point; VERTEX_COUNT] {
        &self.vertices
    }

    /// Position of a single vertex.
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Point {
        self.vertices[id.index()]
    }

    /// Vertices strictly within `threshold` of `p`, in index order.
    pub fn hits(&self, p: Point, threshold: f32) -> impl Iterator<Item = VertexId> + '_ {
        VertexId::all().filter(move |id| self.is_hit(*id, p, threshold))
    }

    /// True if `p` lies strictly within `threshold` of vertex `id`.
    pub fn is_hit(&self, id: VertexId, p: Point, threshold: f32) -> bool {
        self.radius > 0.0
            && threshold > 0.0
            && self.vertex(id).distance_sq(p) < threshold * threshold
    }

}
