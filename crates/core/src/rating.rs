//! Client-side rating aggregation.
//!
//! The backend stores raw review grades (1-10); average ratings per
//! teacher are computed on the client from the full review list.

use std::collections::HashMap;

use crate::types::ApiId;

/// Compute per-teacher average grades from `(teacher_id, grade)` pairs.
///
/// Averages are rounded to one decimal place. Teachers with no reviews
/// simply do not appear in the result; an empty input yields an empty
/// map.
pub fn average_ratings<I>(grades: I) -> HashMap<ApiId, f64>
where
    I: IntoIterator<Item = (ApiId, i32)>,
{
    let mut sums: HashMap<ApiId, (i64, u32)> = HashMap::new();
    for (teacher_id, grade) in grades {
        let entry = sums.entry(teacher_id).or_insert((0, 0));
        entry.0 += i64::from(grade);
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(teacher_id, (sum, count))| {
            let average = sum as f64 / f64::from(count);
            (teacher_id, (average * 10.0).round() / 10.0)
        })
        .collect()
}

/// Qualitative band for a 0-10 average rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    /// [0, 4)
    Poor,
    /// [4, 7)
    Average,
    /// [7, 9)
    Good,
    /// [9, 10]
    Excellent,
}

impl RatingBand {
    pub fn label(self) -> &'static str {
        match self {
            RatingBand::Poor => "poor",
            RatingBand::Average => "average",
            RatingBand::Good => "good",
            RatingBand::Excellent => "excellent",
        }
    }
}

/// Classify a rating into its band.
///
/// Returns `None` for NaN or values outside the 0-10 scale.
pub fn rating_band(rating: f64) -> Option<RatingBand> {
    if rating.is_nan() {
        return None;
    }
    match rating {
        r if (0.0..4.0).contains(&r) => Some(RatingBand::Poor),
        r if (4.0..7.0).contains(&r) => Some(RatingBand::Average),
        r if (7.0..9.0).contains(&r) => Some(RatingBand::Good),
        r if (9.0..=10.0).contains(&r) => Some(RatingBand::Excellent),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
