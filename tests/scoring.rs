// Scoring engine tests (native) for the freehand square game.
// Pure geometry and scoring math, no canvas or browser APIs involved.

use doodle_arcade::geom::Point;
use doodle_arcade::square::scoring::{
    fit_reference_square, score_path, ReferenceSquare, SIDE_CALIBRATION,
};

// Clockwise rectangle perimeter starting at the top-left corner.
fn rect_path(cx: f64, cy: f64, half_w: f64, half_h: f64, per_side: usize) -> Vec<Point> {
    let mut path = Vec::new();
    let step_x = 2.0 * half_w / per_side as f64;
    let step_y = 2.0 * half_h / per_side as f64;
    for i in 0..per_side {
        path.push(Point::new(cx - half_w + step_x * i as f64, cy - half_h));
    }
    for i in 0..per_side {
        path.push(Point::new(cx + half_w, cy - half_h + step_y * i as f64));
    }
    for i in 0..per_side {
        path.push(Point::new(cx + half_w - step_x * i as f64, cy + half_h));
    }
    for i in 0..per_side {
        path.push(Point::new(cx - half_w, cy + half_h - step_y * i as f64));
    }
    path
}

fn square_path(cx: f64, cy: f64, half: f64, per_side: usize) -> Vec<Point> {
    rect_path(cx, cy, half, half, per_side)
}

#[test]
fn fitting_is_deterministic() {
    let center = Point::new(300.0, 300.0);
    let path = square_path(300.0, 300.0, 90.0, 12);
    let a = fit_reference_square(&path, center).expect("fit");
    let b = fit_reference_square(&path, center).expect("fit");
    assert_eq!(a.corners, b.corners);
    assert_eq!(score_path(&path, &a), score_path(&path, &b));
}

#[test]
fn fitted_side_tracks_mean_center_distance() {
    let center = Point::new(300.0, 300.0);
    let path = square_path(300.0, 300.0, 100.0, 10);
    let fitted = fit_reference_square(&path, center).expect("fit");
    let mean: f64 =
        path.iter().map(|p| p.distance_to(center)).sum::<f64>() / path.len() as f64;
    assert!((fitted.side_length() - mean * SIDE_CALIBRATION).abs() < 1e-9);
}

// A clean square traced around the center fits close to the drawn outline and
// still scores high against its own fitted reference.
#[test]
fn clean_square_fits_near_the_outline_and_scores_high() {
    let center = Point::new(300.0, 300.0);
    let path = square_path(300.0, 300.0, 100.0, 10);
    let fitted = fit_reference_square(&path, center).expect("fit");

    let nominal = ReferenceSquare::from_center(center, 200.0);
    for (f, n) in fitted.corners.iter().zip(nominal.corners.iter()) {
        assert!((f.x - n.x).abs() < 25.0, "corner x {} drifted from {}", f.x, n.x);
        assert!((f.y - n.y).abs() < 25.0, "corner y {} drifted from {}", f.y, n.y);
    }

    let score = score_path(&path, &fitted);
    assert!(score >= 80.0, "clean square should score well, got {score}");
}

#[test]
fn perfect_square_scores_100_against_its_nominal_reference() {
    let center = Point::new(300.0, 300.0);
    let path = square_path(300.0, 300.0, 100.0, 10);
    let nominal = ReferenceSquare::from_center(center, 200.0);
    let score = score_path(&path, &nominal);
    assert!((score - 100.0).abs() < 1e-9, "expected 100, got {score}");
}

#[test]
fn flat_rectangle_is_penalized_for_aspect() {
    let center = Point::new(300.0, 300.0);
    let rect = rect_path(300.0, 300.0, 100.0, 25.0, 10);
    let rect_fit = fit_reference_square(&rect, center).expect("fit");
    let rect_score = score_path(&rect, &rect_fit);
    // Aspect 25 caps the shape component at 15 of its 60
    assert!(rect_score <= 55.0, "got {rect_score}");

    let square = square_path(300.0, 300.0, 100.0, 10);
    let square_fit = fit_reference_square(&square, center).expect("fit");
    assert!(score_path(&square, &square_fit) > rect_score);
}

#[test]
fn drifting_outward_lowers_the_score() {
    let center = Point::new(300.0, 300.0);
    let reference = ReferenceSquare::from_center(center, 200.0);
    let mut last = f64::INFINITY;
    for k in [1.0, 1.1, 1.2, 1.3] {
        let path: Vec<Point> = square_path(300.0, 300.0, 100.0, 10)
            .into_iter()
            .map(|p| Point::new(300.0 + (p.x - 300.0) * k, 300.0 + (p.y - 300.0) * k))
            .collect();
        let score = score_path(&path, &reference);
        assert!(score < last, "scale {k}: {score} should be below {last}");
        last = score;
    }
}

#[test]
fn score_ignores_drawing_direction() {
    let center = Point::new(300.0, 300.0);
    let path = square_path(300.0, 300.0, 95.0, 11);
    let reversed: Vec<Point> = path.iter().rev().copied().collect();

    let forward = fit_reference_square(&path, center).expect("fit");
    let backward = fit_reference_square(&reversed, center).expect("fit");
    for (f, b) in forward.corners.iter().zip(backward.corners.iter()) {
        assert!((f.x - b.x).abs() < 1e-9);
        assert!((f.y - b.y).abs() < 1e-9);
    }
    let diff = (score_path(&path, &forward) - score_path(&reversed, &backward)).abs();
    assert!(diff < 0.11, "direction changed the score by {diff}");
}
