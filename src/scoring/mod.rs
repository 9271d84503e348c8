//! Score aggregation
//!
//! Turns a flat list of [`CheckResult`]s into an overall percentage, a
//! letter grade and per-category subtotals.
//!
//! # Scoring Formula
//!
//! ```text
//! score = round(100 × Σ earned / Σ weight)     (0 when Σ weight = 0)
//! ```
//!
//! Rounding is half-up and done in integer arithmetic, so a filtered run that
//! lands on exactly 87.5 scores 88 on every platform.
//!
//! # Grade Bands (inclusive lower bounds)
//!
//! | Grade | Score |
//! |-------|-------|
//! | A     | ≥ 90  |
//! | B     | ≥ 75  |
//! | C     | ≥ 60  |
//! | D     | ≥ 40  |
//! | F     | < 40  |

use crate::models::{CategoryScore, CheckResult, Grade};

/// Lower bound of each grade, highest first
const GRADE_BANDS: [(u32, Grade); 4] = [
    (90, Grade::A),
    (75, Grade::B),
    (60, Grade::C),
    (40, Grade::D),
];

/// Map a 0-100 score to its grade
pub fn compute_grade(score: u32) -> Grade {
    GRADE_BANDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::F)
}

/// `round(100 * earned / total)`, rounding halves up
pub fn percentage(earned: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let earned = u64::from(earned.min(total));
    let total = u64::from(total);
    // (200e + t) / 2t == floor(100e/t + 1/2)
    ((200 * earned + total) / (2 * total)) as u32
}

/// Per-category subtotals, in first-seen category order
pub fn category_scores(checks: &[CheckResult]) -> Vec<CategoryScore> {
    let mut scores: Vec<CategoryScore> = Vec::new();
    for check in checks {
        match scores.iter_mut().find(|s| s.category == check.category) {
            Some(score) => {
                score.earned += check.earned();
                score.total += check.weight;
            }
            None => scores.push(CategoryScore {
                category: check.category.clone(),
                earned: check.earned(),
                total: check.weight,
            }),
        }
    }
    scores
}
