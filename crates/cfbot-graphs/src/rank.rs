//! Codeforces rank tiers shaded behind rating charts.

use crate::utils::parse_color;
use plotters::style::RGBColor;

/// A horizontal rating band for one rank tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankBand {
    /// Tier name.
    pub name: &'static str,
    /// Fill color as `#rrggbb`.
    pub color: &'static str,
    /// Inclusive lower rating.
    pub lower: i32,
    /// Exclusive upper rating.
    pub upper: i32,
}

impl RankBand {
    /// Fill color.
    pub fn rgb(&self) -> RGBColor {
        parse_color(self.color)
    }

    /// This band restricted to `[y_min, y_max]`, or `None` if it falls outside.
    pub fn clip(&self, y_min: i32, y_max: i32) -> Option<Self> {
        let lower = self.lower.max(y_min);
        let upper = self.upper.min(y_max);
        (lower < upper).then_some(Self { lower, upper, ..*self })
    }
}

/// Rank tiers from highest to lowest.
pub const RANK_BANDS: [RankBand; 10] = [
    RankBand { name: "Legendary Grandmaster", color: "#AA0000", lower: 3000, upper: 4000 },
    RankBand { name: "International Grandmaster", color: "#FF3333", lower: 2600, upper: 3000 },
    RankBand { name: "Grandmaster", color: "#FF7777", lower: 2400, upper: 2600 },
    RankBand { name: "International Master", color: "#FFBB55", lower: 2300, upper: 2400 },
    RankBand { name: "Master", color: "#FFCC88", lower: 2100, upper: 2300 },
    RankBand { name: "Candidate Master", color: "#FF88FF", lower: 1900, upper: 2100 },
    RankBand { name: "Expert", color: "#AAAAFF", lower: 1600, upper: 1900 },
    RankBand { name: "Specialist", color: "#77DDBB", lower: 1400, upper: 1600 },
    RankBand { name: "Pupil", color: "#77FF77", lower: 1200, upper: 1400 },
    RankBand { name: "Newbie", color: "#CCCCCC", lower: 0, upper: 1200 },
];

/// Bands overlapping the y range, clipped to it.
pub fn visible_bands(y_min: i32, y_max: i32) -> Vec<RankBand> {
    RANK_BANDS
        .iter()
        .filter_map(|band| band.clip(y_min, y_max))
        .collect()
}

/// Tier a user with `rating` belongs to. The top tier has no upper bound.
pub fn rank_for(rating: i32) -> Option<&'static RankBand> {
    RANK_BANDS.iter().find(|band| rating >= band.lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_contiguous() {
        for pair in RANK_BANDS.windows(2) {
            assert_eq!(pair[0].lower, pair[1].upper);
        }
    }

    #[test]
    fn test_visible_bands_clip() {
        let bands = visible_bands(1350, 1650);
        let ranges: Vec<_> = bands.iter().map(|b| (b.name, b.lower, b.upper)).collect();
        assert_eq!(
            ranges,
            vec![
                ("Expert", 1600, 1650),
                ("Specialist", 1400, 1600),
                ("Pupil", 1350, 1400),
            ]
        );
    }

    #[test]
    fn test_visible_bands_outside_table() {
        assert!(visible_bands(4100, 4200).is_empty());
    }

    #[test]
    fn test_rank_for() {
        assert_eq!(rank_for(1899).map(|b| b.name), Some("Expert"));
        assert_eq!(rank_for(1900).map(|b| b.name), Some("Candidate Master"));
        assert_eq!(rank_for(0).map(|b| b.name), Some("Newbie"));
        assert_eq!(rank_for(4100).map(|b| b.name), Some("Legendary Grandmaster"));
        assert_eq!(rank_for(-10), None);
    }
}
