use serde::{Deserialize, Serialize};

use super::condition::LeafCondition;

pub const NUM_CONDITIONS: usize = LeafCondition::ALL.len();

/// One classification outcome. Lives for a single request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub condition: LeafCondition,
    /// Arg-max probability scaled to 0–100, rounded to two decimals.
    pub confidence: f32,
    /// Raw per-class probabilities in `LeafCondition::ALL` order.
    pub distribution: [f32; NUM_CONDITIONS],
}

impl Prediction {
    /// Build from the model's probability vector by arg-max.
    pub fn from_distribution(distribution: [f32; NUM_CONDITIONS]) -> Self {
        let (idx, &top) = distribution
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        Self {
            condition: LeafCondition::ALL[idx],
            confidence: percent(top),
            distribution,
        }
    }
}

/// Probability → percentage with two-decimal rounding.
pub fn percent(p: f32) -> f32 {
    (p * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_max_picks_healthy() {
        let pred = Prediction::from_distribution([0.01, 0.02, 0.035, 0.9321]);
        assert_eq!(pred.condition, LeafCondition::Healthy);
        assert_eq!(pred.confidence, 93.21);
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(percent(0.9321), 93.21);
        assert_eq!(percent(0.035), 3.5);
        assert_eq!(percent(1.0), 100.0);
        assert_eq!(percent(0.0), 0.0);
    }

    #[test]
    fn distribution_is_kept_in_model_order() {
        let dist = [0.7, 0.1, 0.1, 0.1];
        let pred = Prediction::from_distribution(dist);
        assert_eq!(pred.condition, LeafCondition::AppleScab);
        assert_eq!(pred.distribution, dist);
    }
}
