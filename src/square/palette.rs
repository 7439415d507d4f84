//! Color and caption feedback for the square game. All pure string helpers.

/// Stroke color for a live accuracy value in 0..=100: red through orange and
/// yellow to green. Input is clamped.
pub fn accuracy_color(accuracy: f64) -> String {
    let clamped = accuracy.clamp(0.0, 100.0);
    if clamped < 33.0 {
        // Red to orange
        let t = clamped / 33.0;
        let g = (69.0 + (165.0 - 69.0) * t).round() as u8;
        format!("rgb(255, {g}, 0)")
    } else if clamped < 66.0 {
        // Orange to yellow
        let t = (clamped - 33.0) / 33.0;
        let r = (255.0 - (255.0 - 234.0) * t).round() as u8;
        let g = (165.0 + (179.0 - 165.0) * t).round() as u8;
        format!("rgb({r}, {g}, 0)")
    } else {
        // Yellow to green
        let t = (clamped - 66.0) / 34.0;
        let r = (234.0 - 234.0 * t).round() as u8;
        let g = (179.0 + (220.0 - 179.0) * t).round() as u8;
        let b = (60.0 * t).round() as u8;
        format!("rgb({r}, {g}, {b})")
    }
}

/// Tier color for the big score readout.
pub fn score_color(score: f64, dark: bool) -> &'static str {
    if dark {
        match score {
            s if s >= 95.0 => "#4ade80",
            s if s >= 85.0 => "#60a5fa",
            s if s >= 70.0 => "#facc15",
            s if s >= 50.0 => "#fb923c",
            _ => "#f87171",
        }
    } else {
        match score {
            s if s >= 95.0 => "#22c55e",
            s if s >= 85.0 => "#3b82f6",
            s if s >= 70.0 => "#eab308",
            s if s >= 50.0 => "#f97316",
            _ => "#ef4444",
        }
    }
}

/// Caption under the final score.
pub fn verdict(score: f64) -> &'static str {
    match score {
        s if s >= 99.0 => "\u{1F3AF} PERFECT!",
        s if s >= 95.0 => "\u{2B50} Nearly Perfect!",
        s if s >= 85.0 => "\u{1F44D} Excellent!",
        s if s >= 70.0 => "\u{1F44C} Good!",
        s if s >= 50.0 => "\u{1F914} Not Bad",
        _ => "\u{1F605} Keep Trying!",
    }
}
