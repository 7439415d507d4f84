//! Scoring engine for the freehand-square game.
//!
//! Everything here is a pure function of a path snapshot: fitting the
//! reference square a drawing is judged against, the final 0..=100 score, and
//! the per-point accuracy that drives live stroke coloring. Degenerate input
//! (empty boxes, zero side lengths) reads as 0 rather than NaN so callers
//! never have to special-case.

use crate::geom::{segment_distance, BoundingBox, Point};

/// Fewest points that define a reference square.
pub const REFERENCE_MIN_POINTS: usize = 2;
/// Fewest points a path needs to receive a score at all.
pub const SCORE_MIN_POINTS: usize = 10;
/// Live rescoring starts once the path holds strictly more points than this.
pub const LIVE_SCORE_THRESHOLD: usize = 20;
/// Side length as a multiple of the mean center distance. The mean for a
/// traced square sits between side/2 (edge midpoint) and side/sqrt(2)
/// (corner), so this stays a tuned constant rather than a derived one.
pub const SIDE_CALIBRATION: f64 = 1.4;
/// Score knocked off per unit of average deviation / side length.
pub const DEVIATION_SENSITIVITY: f64 = 300.0;
/// Aspect-ratio share of the combined score.
pub const ASPECT_WEIGHT: f64 = 0.6;
/// Edge-deviation share of the combined score.
pub const DEVIATION_WEIGHT: f64 = 0.4;
/// Live color window as a fraction of the larger bounding-box dimension.
pub const LIVE_WINDOW_RATIO: f64 = 0.2;

/// The ideal axis-aligned square a drawing is compared against. Corners run
/// clockwise from top-left.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceSquare {
    pub corners: [Point; 4],
}

impl ReferenceSquare {
    pub fn from_center(center: Point, side: f64) -> Self {
        let half = side / 2.0;
        Self {
            corners: [
                Point::new(center.x - half, center.y - half),
                Point::new(center.x + half, center.y - half),
                Point::new(center.x + half, center.y + half),
                Point::new(center.x - half, center.y + half),
            ],
        }
    }

    pub fn side_length(&self) -> f64 {
        self.corners[0].distance_to(self.corners[1])
    }

    pub fn edges(&self) -> [(Point, Point); 4] {
        let c = self.corners;
        [(c[0], c[1]), (c[1], c[2]), (c[2], c[3]), (c[3], c[0])]
    }

    /// Distance from `p` to the nearest of the four edges.
    pub fn min_edge_distance(&self, p: Point) -> f64 {
        self.edges()
            .iter()
            .map(|&(a, b)| segment_distance(p, a, b))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Fit the reference square for a path: mean Euclidean distance from every
/// point to `center`, scaled by [`SIDE_CALIBRATION`]. Returns `None` below
/// [`REFERENCE_MIN_POINTS`]. Insensitive to draw order and direction since
/// only the distance multiset matters.
pub fn fit_reference_square(path: &[Point], center: Point) -> Option<ReferenceSquare> {
    if path.len() < REFERENCE_MIN_POINTS {
        return None;
    }
    let total: f64 = path.iter().map(|p| p.distance_to(center)).sum();
    let avg_distance = total / path.len() as f64;
    Some(ReferenceSquare::from_center(
        center,
        avg_distance * SIDE_CALIBRATION,
    ))
}

/// Score a finished (or in-progress) path against a reference square.
///
/// Two independent components: aspect ratio of the path's bounding box
/// (min/max of width and height, worth 60%) and average deviation of the
/// points from the reference edges, normalized by the reference side length
/// and floored at zero (worth 40%). Result is rounded to one decimal. Paths
/// below [`SCORE_MIN_POINTS`] score 0 outright.
pub fn score_path(path: &[Point], reference: &ReferenceSquare) -> f64 {
    if path.len() < SCORE_MIN_POINTS {
        return 0.0;
    }

    let bounds = BoundingBox::of_path(path);
    let longer = bounds.width().max(bounds.height());
    let aspect_score = if longer > 0.0 {
        bounds.width().min(bounds.height()) / longer * 100.0
    } else {
        0.0
    };

    let side = reference.side_length();
    let deviation_score = if side > 0.0 {
        let total: f64 = path.iter().map(|&p| reference.min_edge_distance(p)).sum();
        let deviation_ratio = total / path.len() as f64 / side;
        (100.0 - deviation_ratio * DEVIATION_SENSITIVITY).max(0.0)
    } else {
        0.0
    };

    let combined = aspect_score * ASPECT_WEIGHT + deviation_score * DEVIATION_WEIGHT;
    (combined * 10.0).round() / 10.0
}

/// Per-point accuracy in 0..=100 for live stroke coloring. Uses its own
/// normalization (distance against an absolute pixel window, not the side
/// length) so close-in wobble shows up immediately while drawing.
pub fn segment_accuracy(point: Point, reference: &ReferenceSquare, max_deviation: f64) -> f64 {
    if max_deviation <= 0.0 {
        return 0.0;
    }
    let dist = reference.min_edge_distance(point);
    (100.0 - dist / max_deviation * 100.0).max(0.0)
}

/// Pixel window for [`segment_accuracy`]: 20% of the larger bounding-box
/// dimension of the path drawn so far.
pub fn live_deviation_window(bounds: &BoundingBox) -> f64 {
    bounds.largest_side() * LIVE_WINDOW_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_outline(center: Point, side: f64, per_edge: usize) -> Vec<Point> {
        let half = side / 2.0;
        let corners = [
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y - half),
            Point::new(center.x + half, center.y + half),
            Point::new(center.x - half, center.y + half),
        ];
        let mut path = Vec::new();
        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            for k in 0..per_edge {
                let t = k as f64 / per_edge as f64;
                path.push(Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t));
            }
        }
        path
    }

    #[test]
    fn test_fit_needs_two_points() {
        let center = Point::new(300.0, 300.0);
        assert!(fit_reference_square(&[], center).is_none());
        assert!(fit_reference_square(&[Point::new(10.0, 10.0)], center).is_none());
        assert!(
            fit_reference_square(&[Point::new(10.0, 10.0), Point::new(20.0, 10.0)], center)
                .is_some()
        );
    }

    #[test]
    fn test_reference_square_corner_order() {
        let sq = ReferenceSquare::from_center(Point::new(300.0, 300.0), 100.0);
        assert_eq!(sq.corners[0], Point::new(250.0, 250.0));
        assert_eq!(sq.corners[1], Point::new(350.0, 250.0));
        assert_eq!(sq.corners[2], Point::new(350.0, 350.0));
        assert_eq!(sq.corners[3], Point::new(250.0, 350.0));
        assert!((sq.side_length() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_min_edge_distance_inside_and_outside() {
        let sq = ReferenceSquare::from_center(Point::new(0.0, 0.0), 100.0);
        // Center is 50 away from every edge
        assert!((sq.min_edge_distance(Point::new(0.0, 0.0)) - 50.0).abs() < 1e-9);
        // A point on an edge is at distance 0
        assert!(sq.min_edge_distance(Point::new(50.0, 10.0)).abs() < 1e-9);
        // Outside, straight off the right edge
        assert!((sq.min_edge_distance(Point::new(70.0, 0.0)) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_path_short_path_scores_zero() {
        let sq = ReferenceSquare::from_center(Point::new(300.0, 300.0), 200.0);
        let path = square_outline(Point::new(300.0, 300.0), 200.0, 2);
        assert!(path.len() < SCORE_MIN_POINTS);
        assert_eq!(score_path(&path, &sq), 0.0);
    }

    #[test]
    fn test_score_path_exact_square_is_perfect() {
        let center = Point::new(300.0, 300.0);
        let sq = ReferenceSquare::from_center(center, 200.0);
        let path = square_outline(center, 200.0, 10);
        let score = score_path(&path, &sq);
        assert!((score - 100.0).abs() < 1e-9, "score was {score}");
    }

    #[test]
    fn test_score_path_zero_side_reference() {
        let sq = ReferenceSquare::from_center(Point::new(300.0, 300.0), 0.0);
        let path = square_outline(Point::new(300.0, 300.0), 200.0, 10);
        // Aspect still perfect, deviation component collapses to 0
        assert!((score_path(&path, &sq) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_segment_accuracy_window() {
        let sq = ReferenceSquare::from_center(Point::new(0.0, 0.0), 100.0);
        // On the edge: full accuracy
        assert!((segment_accuracy(Point::new(50.0, 0.0), &sq, 40.0) - 100.0).abs() < 1e-9);
        // Exactly one window away: zero
        assert!(segment_accuracy(Point::new(90.0, 0.0), &sq, 40.0).abs() < 1e-9);
        // Halfway out
        assert!((segment_accuracy(Point::new(70.0, 0.0), &sq, 40.0) - 50.0).abs() < 1e-9);
        // Degenerate window
        assert_eq!(segment_accuracy(Point::new(50.0, 0.0), &sq, 0.0), 0.0);
    }

    #[test]
    fn test_live_deviation_window_tracks_bbox() {
        let path = [Point::new(0.0, 0.0), Point::new(150.0, 100.0)];
        let bounds = BoundingBox::of_path(&path);
        assert!((live_deviation_window(&bounds) - 30.0).abs() < 1e-9);
    }
}
