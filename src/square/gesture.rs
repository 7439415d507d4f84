//! Press / drag / release lifecycle for the drawing canvas. Owns the path and
//! calls into the scoring engine at transitions; the page layers DOM events
//! and rendering on top of this.

use crate::geom::{BoundingBox, Point};
use crate::square::scoring::{
    fit_reference_square, live_deviation_window, score_path, ReferenceSquare,
    LIVE_SCORE_THRESHOLD, SCORE_MIN_POINTS,
};

/// Where a drawing attempt currently is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Drawing,
    Scored,
}

pub struct Gesture {
    center: Point,
    phase: Phase,
    path: Vec<Point>,
    reference: Option<ReferenceSquare>,
    live_score: Option<f64>,
    final_score: Option<f64>,
}

impl Gesture {
    pub fn new(center: Point) -> Self {
        Self {
            center,
            phase: Phase::Idle,
            path: Vec::new(),
            reference: None,
            live_score: None,
            final_score: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }

    pub fn reference(&self) -> Option<&ReferenceSquare> {
        self.reference.as_ref()
    }

    pub fn live_score(&self) -> Option<f64> {
        self.live_score
    }

    pub fn final_score(&self) -> Option<f64> {
        self.final_score
    }

    /// Pixel window for coloring the current path (0 until the path spans
    /// anything).
    pub fn deviation_window(&self) -> f64 {
        live_deviation_window(&BoundingBox::of_path(&self.path))
    }

    /// Pointer down. Starts a fresh attempt from any phase, discarding
    /// whatever was on screen.
    pub fn press(&mut self, point: Point) {
        self.phase = Phase::Drawing;
        self.path.clear();
        self.path.push(point);
        self.reference = None;
        self.live_score = None;
        self.final_score = None;
    }

    /// Pointer move. Appends while drawing; ignored in other phases. Once the
    /// path is past [`LIVE_SCORE_THRESHOLD`] points the reference square is
    /// refit and the live score recomputed on every sample.
    pub fn drag(&mut self, point: Point) {
        if self.phase != Phase::Drawing {
            return;
        }
        self.path.push(point);
        if self.path.len() > LIVE_SCORE_THRESHOLD {
            self.reference = fit_reference_square(&self.path, self.center);
            if let Some(reference) = &self.reference {
                self.live_score = Some(score_path(&self.path, reference));
            }
        }
    }

    /// Pointer up. A path below [`SCORE_MIN_POINTS`] is treated as an
    /// accidental tap and discarded. Otherwise the reference is refit from the
    /// full path, the final score computed, and the attempt freezes on screen.
    pub fn release(&mut self) -> Option<f64> {
        if self.phase != Phase::Drawing {
            return None;
        }
        if self.path.len() < SCORE_MIN_POINTS {
            self.reset();
            return None;
        }
        self.reference = fit_reference_square(&self.path, self.center);
        let score = match &self.reference {
            Some(reference) => score_path(&self.path, reference),
            None => 0.0,
        };
        self.final_score = Some(score);
        self.live_score = None;
        self.phase = Phase::Scored;
        Some(score)
    }

    /// Back to a blank canvas.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.path.clear();
        self.reference = None;
        self.live_score = None;
        self.final_score = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 300.0, y: 300.0 };

    #[test]
    fn test_press_starts_drawing_from_any_phase() {
        let mut g = Gesture::new(CENTER);
        assert_eq!(g.phase(), Phase::Idle);
        g.press(Point::new(100.0, 100.0));
        assert_eq!(g.phase(), Phase::Drawing);
        assert_eq!(g.path().len(), 1);

        // Pressing again mid-draw restarts the attempt
        g.drag(Point::new(101.0, 100.0));
        g.press(Point::new(200.0, 200.0));
        assert_eq!(g.path().len(), 1);
        assert_eq!(g.path()[0], Point::new(200.0, 200.0));
    }

    #[test]
    fn test_drag_ignored_when_idle() {
        let mut g = Gesture::new(CENTER);
        g.drag(Point::new(100.0, 100.0));
        assert!(g.path().is_empty());
        assert_eq!(g.phase(), Phase::Idle);
    }

    #[test]
    fn test_short_release_discards_path() {
        let mut g = Gesture::new(CENTER);
        g.press(Point::new(100.0, 100.0));
        for i in 1..5 {
            g.drag(Point::new(100.0 + i as f64, 100.0));
        }
        assert_eq!(g.release(), None);
        assert_eq!(g.phase(), Phase::Idle);
        assert!(g.path().is_empty());
        assert!(g.final_score().is_none());
    }

    #[test]
    fn test_live_score_appears_past_threshold() {
        let mut g = Gesture::new(CENTER);
        g.press(Point::new(200.0, 200.0));
        for i in 1..=LIVE_SCORE_THRESHOLD {
            g.drag(Point::new(200.0 + i as f64, 200.0));
            if g.path().len() <= LIVE_SCORE_THRESHOLD {
                assert!(g.live_score().is_none(), "early live score at {i}");
                assert!(g.reference().is_none());
            }
        }
        // One more sample pushes the path over the threshold
        g.drag(Point::new(260.0, 200.0));
        assert!(g.live_score().is_some());
        assert!(g.reference().is_some());
    }

    #[test]
    fn test_release_scores_and_freezes() {
        let mut g = Gesture::new(CENTER);
        g.press(Point::new(250.0, 250.0));
        for i in 1..30 {
            g.drag(Point::new(250.0 + i as f64, 250.0));
        }
        let score = g.release();
        assert!(score.is_some());
        assert_eq!(g.phase(), Phase::Scored);
        assert_eq!(g.final_score(), score);
        assert!(g.live_score().is_none());
        assert!(g.reference().is_some());
        assert_eq!(g.path().len(), 30);

        // Releasing again outside Drawing is a no-op
        assert_eq!(g.release(), None);
        assert_eq!(g.phase(), Phase::Scored);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut g = Gesture::new(CENTER);
        g.press(Point::new(250.0, 250.0));
        for i in 1..30 {
            g.drag(Point::new(250.0 + i as f64, 250.0));
        }
        g.release();
        g.reset();
        assert_eq!(g.phase(), Phase::Idle);
        assert!(g.path().is_empty());
        assert!(g.reference().is_none());
        assert!(g.final_score().is_none());
    }
}
