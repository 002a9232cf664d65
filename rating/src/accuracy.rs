use game::Agent;

use super::Rating;

/// Fraction of ordered agent pairs whose rating-mean ordering agrees with
/// the hidden strength ordering. Includes i == j, so the score of a
/// perfectly recovered ranking is 1.0. Diagnostic only.
pub fn estimate_accuracy(agents: &[Agent], ratings: &[Rating]) -> f64 {
    assert_eq!(agents.len(), ratings.len());

    let mut agreements = 0;
    for i in 0..agents.len() {
        for j in 0..agents.len() {
            let strength_gap = (agents[i].strength() - agents[j].strength()) as f64;
            if strength_gap * (ratings[i].mu - ratings[j].mu) >= 0.0 {
                agreements += 1;
            }
        }
    }

    agreements as f64 / agents.len() as f64 / agents.len() as f64
}
