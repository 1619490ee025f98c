//! Adaptive card scheduling.

pub mod sm2;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::{CardId, CardReviewState, Quality};

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate the next review state. `None` means the card has never been
    /// reviewed.
    fn schedule(
        &self,
        state: Option<&CardReviewState>,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> CardReviewState;
}

/// Cards due at `now`: every card without a stored state, plus every card whose
/// next review is not in the future. Input order is preserved.
pub fn due_cards(
    card_ids: &[CardId],
    states: &HashMap<CardId, CardReviewState>,
    now: DateTime<Utc>,
) -> Vec<CardId> {
    card_ids
        .iter()
        .filter(|id| match states.get(*id) {
            Some(state) => state.next_review <= now,
            None => true,
        })
        .cloned()
        .collect()
}

/// Shuffle a due set into presentation order.
///
/// Production callers pass `rand::thread_rng()`; tests pass a seeded rng.
pub fn shuffle_for_study<T, R>(cards: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    cards.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn state_due_at(next_review: DateTime<Utc>) -> CardReviewState {
        CardReviewState {
            interval_days: 3,
            ease_factor: 2.5,
            repetitions: 2,
            next_review,
        }
    }

    #[test]
    fn new_cards_are_always_due() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let states = HashMap::new();
        assert_eq!(due_cards(&ids, &states, now()), ids);
        let long_ago = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(due_cards(&ids, &states, long_ago), ids);
    }

    #[test]
    fn scheduled_cards_due_only_once_reached() {
        let ids = vec!["past".to_string(), "exact".to_string(), "future".to_string()];
        let mut states = HashMap::new();
        states.insert("past".to_string(), state_due_at(now() - Duration::days(2)));
        states.insert("exact".to_string(), state_due_at(now()));
        states.insert("future".to_string(), state_due_at(now() + Duration::hours(1)));
        assert_eq!(
            due_cards(&ids, &states, now()),
            vec!["past".to_string(), "exact".to_string()]
        );
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let base: Vec<u32> = (0..20).collect();
        let mut first = base.clone();
        let mut second = base.clone();
        shuffle_for_study(&mut first, &mut StdRng::seed_from_u64(7));
        shuffle_for_study(&mut second, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(sorted, base);
    }
}
