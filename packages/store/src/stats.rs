//! Statistic cards shown under the hero call-to-action buttons.

/// Glyph shown on a statistic card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Cube,
    Bolt,
    Camera,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub id: u32,
    pub label: &'static str,
    pub value: &'static str,
    pub icon: StatIcon,
}

impl Stat {
    /// Entrance delay of the card at `index`, in seconds.
    pub fn entrance_delay(index: usize) -> f32 {
        0.4 + index as f32 * 0.1
    }
}

/// Rendered in this order regardless of theme.
pub const HERO_STATS: [Stat; 3] = [
    Stat {
        id: 1,
        label: "Objects Detected",
        value: "1M+",
        icon: StatIcon::Cube,
    },
    Stat {
        id: 2,
        label: "Processing Speed",
        value: "30ms",
        icon: StatIcon::Bolt,
    },
    Stat {
        id: 3,
        label: "Accuracy Rate",
        value: "98.5%",
        icon: StatIcon::Camera,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_order_and_values() {
        let labels: Vec<_> = HERO_STATS.iter().map(|s| s.label).collect();
        let values: Vec<_> = HERO_STATS.iter().map(|s| s.value).collect();
        assert_eq!(labels, ["Objects Detected", "Processing Speed", "Accuracy Rate"]);
        assert_eq!(values, ["1M+", "30ms", "98.5%"]);
    }

    #[test]
    fn test_entrance_delay_staggers() {
        assert!((Stat::entrance_delay(0) - 0.4).abs() < f32::EPSILON);
        assert!((Stat::entrance_delay(2) - 0.6).abs() < 1e-6);
    }
}
