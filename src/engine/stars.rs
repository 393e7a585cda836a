use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence thresholds (inclusive) for 5, 4, 3 and 2 stars.
const STAR_THRESHOLDS: [(f64, u8); 4] = [(90.0, 5), (75.0, 4), (60.0, 3), (40.0, 2)];

/// 1–5 star readout of the model confidence. Independent of the grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(u8);

impl StarRating {
    pub fn from_confidence(ai_confidence: f64) -> Self {
        let stars = STAR_THRESHOLDS
            .iter()
            .find(|(threshold, _)| ai_confidence >= *threshold)
            .map(|(_, stars)| *stars)
            .unwrap_or(1);
        StarRating(stars)
    }

    pub fn count(&self) -> u8 {
        self.0
    }

    /// One ⭐ per star.
    pub fn glyphs(&self) -> String {
        "⭐".repeat(self.0 as usize)
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glyphs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(StarRating::from_confidence(100.0).count(), 5);
        assert_eq!(StarRating::from_confidence(90.0).count(), 5);
        assert_eq!(StarRating::from_confidence(89.0).count(), 4);
        assert_eq!(StarRating::from_confidence(75.0).count(), 4);
        assert_eq!(StarRating::from_confidence(74.0).count(), 3);
        assert_eq!(StarRating::from_confidence(60.0).count(), 3);
        assert_eq!(StarRating::from_confidence(59.0).count(), 2);
        assert_eq!(StarRating::from_confidence(40.0).count(), 2);
        assert_eq!(StarRating::from_confidence(39.0).count(), 1);
        assert_eq!(StarRating::from_confidence(1.0).count(), 1);
    }

    #[test]
    fn glyph_count_matches() {
        let rating = StarRating::from_confidence(80.0);
        assert_eq!(rating.glyphs().chars().count(), 4);
        assert_eq!(rating.to_string(), "⭐⭐⭐⭐");
    }
}
