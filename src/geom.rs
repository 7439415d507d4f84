//! Plain 2D math on canvas-space coordinates. Kept free of wasm types so the
//! scoring logic stays testable on the native target.

/// A point in canvas pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned extent of a drawn path.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Extrema scan over a path. An empty path yields the zero box.
    pub fn of_path(path: &[Point]) -> Self {
        let Some(first) = path.first() else {
            return Self::default();
        };
        let mut bb = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for p in &path[1..] {
            bb.min_x = bb.min_x.min(p.x);
            bb.max_x = bb.max_x.max(p.x);
            bb.min_y = bb.min_y.min(p.y);
            bb.max_y = bb.max_y.max(p.y);
        }
        bb
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn largest_side(&self) -> f64 {
        self.width().max(self.height())
    }
}

/// Minimum distance from `p` to the segment `a`-`b`. The projection parameter
/// is clamped to the segment; a zero-length segment degrades to plain point
/// distance so there is no division by zero.
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return p.distance_to(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let projection = Point::new(a.x + t * dx, a.y + t * dy);
    p.distance_to(projection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_extrema() {
        let path = [
            Point::new(10.0, 40.0),
            Point::new(-5.0, 12.0),
            Point::new(30.0, 20.0),
        ];
        let bb = BoundingBox::of_path(&path);
        assert!((bb.min_x - -5.0).abs() < 1e-9);
        assert!((bb.max_x - 30.0).abs() < 1e-9);
        assert!((bb.width() - 35.0).abs() < 1e-9);
        assert!((bb.height() - 28.0).abs() < 1e-9);
        assert!((bb.largest_side() - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_bounding_box_empty_path_is_zero() {
        let bb = BoundingBox::of_path(&[]);
        assert_eq!(bb.width(), 0.0);
        assert_eq!(bb.height(), 0.0);
        assert_eq!(bb.largest_side(), 0.0);
    }

    #[test]
    fn test_segment_distance_perpendicular_drop() {
        let d = segment_distance(
            Point::new(5.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoint() {
        // Projection falls before the segment start, expect endpoint distance
        let d = segment_distance(
            Point::new(-4.0, 3.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
        );
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_distance_zero_length_segment() {
        let a = Point::new(2.0, 2.0);
        let d = segment_distance(Point::new(5.0, 6.0), a, a);
        assert!((d - 5.0).abs() < 1e-9);
    }
}
