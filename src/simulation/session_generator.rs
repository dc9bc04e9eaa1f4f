//! Random settlement sessions for benchmarks and manual testing.
//!
//! Every generated session is closed: the end quantities sum to exactly the
//! same total as the start quantities.

use rand::Rng;
use rust_decimal::Decimal;

/// Configuration for generating a random session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Number of participants.
    pub participants: usize,
    /// Smallest starting quantity.
    pub min_quantity: Decimal,
    /// Largest starting quantity.
    pub max_quantity: Decimal,
    /// Largest quantity moved between two participants in one hand.
    pub max_swing: Decimal,
    /// Number of random hands played between start and end.
    pub hands: usize,
    /// Decimal places kept on every quantity.
    pub decimal_places: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            participants: 6,
            min_quantity: Decimal::from(50),
            max_quantity: Decimal::from(200),
            max_swing: Decimal::from(40),
            hands: 30,
            decimal_places: 0,
        }
    }
}

fn random_quantity<R: Rng>(rng: &mut R, min: Decimal, max: Decimal, dp: u32) -> Decimal {
    let min_f64: f64 = min.to_string().parse().unwrap_or(0.0);
    let max_f64: f64 = max.to_string().parse().unwrap_or(min_f64);
    if max_f64 <= min_f64 {
        return min.round_dp(dp);
    }
    let value = rng.gen_range(min_f64..max_f64);
    Decimal::from_f64_retain(value)
        .unwrap_or(min)
        .round_dp(dp)
}

/// Generate `(start, end)` quantities for a random session.
///
/// The end quantities come from replaying random pairwise moves on the start
/// quantities, so the totals always match.
pub fn generate_session(config: &SessionConfig) -> (Vec<Decimal>, Vec<Decimal>) {
    let mut rng = rand::thread_rng();
    let dp = config.decimal_places;

    let start: Vec<Decimal> = (0..config.participants)
        .map(|_| random_quantity(&mut rng, config.min_quantity, config.max_quantity, dp))
        .collect();
    let mut end = start.clone();

    if config.participants >= 2 {
        for _ in 0..config.hands {
            let loser = rng.gen_range(0..config.participants);
            let mut winner = rng.gen_range(0..config.participants);
            while winner == loser {
                winner = rng.gen_range(0..config.participants);
            }
            let swing = random_quantity(&mut rng, Decimal::ZERO, config.max_swing, dp);
            end[loser] -= swing;
            end[winner] += swing;
        }
    }

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::settlement::SettlementEngine;

    #[test]
    fn test_generated_session_is_closed() {
        let config = SessionConfig {
            participants: 8,
            decimal_places: 2,
            ..Default::default()
        };
        let (start, end) = generate_session(&config);

        assert_eq!(start.len(), 8);
        assert_eq!(end.len(), 8);
        assert_eq!(start.iter().sum::<Decimal>(), end.iter().sum::<Decimal>());
    }

    #[test]
    fn test_generated_session_settles() {
        let config = SessionConfig {
            participants: 20,
            hands: 100,
            ..Default::default()
        };
        let (start, end) = generate_session(&config);

        let plan = SettlementEngine::settle(&start, &end).unwrap();
        assert!(plan.len() < config.participants);
    }

    #[test]
    fn test_single_participant_stays_flat() {
        let config = SessionConfig {
            participants: 1,
            ..Default::default()
        };
        let (start, end) = generate_session(&config);
        assert_eq!(start, end);
    }
}
