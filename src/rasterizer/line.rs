// src/rasterizer/line.rs

//! Integer Bresenham line walk.

use super::Point;

/// Iterator over the pixels of a line segment, both endpoints included.
///
/// The walk always starts at the endpoint that sorts first by `(x, y)`, so
/// `BresenhamLine::new(a, b)` and `BresenhamLine::new(b, a)` yield the same
/// pixel set.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    current: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    pub fn new(p0: Point, p1: Point) -> Self {
        let (start, end) = if (p1.x, p1.y) < (p0.x, p0.y) {
            (p1, p0)
        } else {
            (p0, p1)
        };

        let dx = (end.x as i64 - start.x as i64).abs();
        let dy = (end.y as i64 - start.y as i64).abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: (end.x as i64 - start.x as i64).signum() as i32,
            sy: (end.y as i64 - start.y as i64).signum() as i32,
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Every step moves at least one axis and at most both.
        let remaining_x = (self.end.x as i64 - self.current.x as i64).unsigned_abs() as usize;
        let remaining_y = (self.end.y as i64 - self.current.y as i64).unsigned_abs() as usize;
        (
            remaining_x.max(remaining_y) + 1,
            Some(remaining_x + remaining_y + 1),
        )
    }
}
