// src/rasterizer/triangle.rs

//! Half-space triangle scan conversion.
//!
//! Vertices are reordered so the doubled signed area is positive (clockwise
//! on a y-down screen). A lattice point `(x, y)` is inside when every edge
//! function is positive there, or zero on a top or left edge:
//!
//! - top edge: horizontal, interior below it (`dy == 0 && dx > 0`)
//! - left edge: interior to its right (`dy < 0`)
//!
//! Shared edges between two triangles are therefore owned by exactly one of
//! them, so adjacent fills neither overlap nor leave seams.

use super::Point;
use log::trace;

/// One horizontal run of covered pixels, `x_start..=x_end` on row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.x_end - self.x_start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.x_end < self.x_start
    }
}

/// Twice the signed area of `p0 p1 p2`; positive for clockwise winding on a
/// y-down screen.
///
/// Computed in `i128`: each product of coordinate differences can reach
/// about 2^64 for `i32` vertices.
pub fn doubled_signed_area(p0: Point, p1: Point, p2: Point) -> i128 {
    let (x0, y0) = (p0.x as i128, p0.y as i128);
    let (x1, y1) = (p1.x as i128, p1.y as i128);
    let (x2, y2) = (p2.x as i128, p2.y as i128);
    (x1 - x0) * (y2 - y0) - (y1 - y0) * (x2 - x0)
}

/// Edge `a -> b` as a constraint on `x` for a given scanline.
#[derive(Debug, Clone, Copy)]
struct Edge {
    ax: i128,
    ay: i128,
    dx: i128,
    dy: i128,
    /// 0 when points on the edge belong to the triangle, -1 otherwise.
    bias: i128,
}

/// Inclusive bound on `x` imposed by one edge on one row.
enum Bound {
    All,
    Nothing,
    AtLeast(i128),
    AtMost(i128),
}

impl Edge {
    fn new(a: Point, b: Point) -> Self {
        let dx = b.x as i128 - a.x as i128;
        let dy = b.y as i128 - a.y as i128;
        let top_left = dy < 0 || (dy == 0 && dx > 0);
        Self {
            ax: a.x as i128,
            ay: a.y as i128,
            dx,
            dy,
            bias: if top_left { 0 } else { -1 },
        }
    }

    /// Solves `dx*(y-ay) - dy*(x-ax) + bias >= 0` for `x`.
    fn bound(&self, y: i128) -> Bound {
        let k = self.dx * (y - self.ay) + self.dy * self.ax + self.bias;
        match self.dy {
            0 if k >= 0 => Bound::All,
            0 => Bound::Nothing,
            dy if dy < 0 => Bound::AtLeast(ceil_div(-k, -dy)),
            dy => Bound::AtMost(k.div_euclid(dy)),
        }
    }
}

/// `ceil(a / b)` for `b > 0`.
fn ceil_div(a: i128, b: i128) -> i128 {
    -((-a).div_euclid(b))
}

/// Covered spans of the filled triangle, clipped to `[0, width) x [0, height)`.
///
/// Zero-area triangles produce no spans.
pub fn fill_spans(p0: Point, p1: Point, p2: Point, width: u32, height: u32) -> Vec<Span> {
    let area = doubled_signed_area(p0, p1, p2);
    if area == 0 {
        trace!("fill_spans: rejecting degenerate triangle {:?} {:?} {:?}", p0, p1, p2);
        return Vec::new();
    }
    let (p1, p2) = if area < 0 { (p2, p1) } else { (p1, p2) };
    let edges = [Edge::new(p0, p1), Edge::new(p1, p2), Edge::new(p2, p0)];

    let min_y = (p0.y.min(p1.y).min(p2.y) as i128).max(0);
    let max_y = (p0.y.max(p1.y).max(p2.y) as i128).min(height as i128 - 1);
    let min_x = (p0.x.min(p1.x).min(p2.x) as i128).max(0);
    let max_x = (p0.x.max(p1.x).max(p2.x) as i128).min(width as i128 - 1);

    let mut spans = Vec::new();
    for y in min_y..=max_y {
        let mut lo = min_x;
        let mut hi = max_x;
        for edge in &edges {
            match edge.bound(y) {
                Bound::All => {}
                Bound::Nothing => hi = lo - 1,
                Bound::AtLeast(x) => lo = lo.max(x),
                Bound::AtMost(x) => hi = hi.min(x),
            }
        }
        if lo <= hi {
            spans.push(Span {
                y: y as i32,
                x_start: lo as i32,
                x_end: hi as i32,
            });
        }
    }
    spans
}
