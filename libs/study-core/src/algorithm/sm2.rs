//! Simplified SM-2 spaced repetition algorithm.
//!
//! Four quality buckets instead of SuperMemo's six grades, fixed first and
//! second intervals, and no same-day re-presentation: a forgotten card comes
//! back the next day.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::SpacedRepetitionAlgorithm;
use crate::types::{CardReviewState, Quality};

/// Simplified SM-2 with configurable parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    pub hard_penalty: f64,
    pub easy_bonus: f64,
    pub first_interval: u32,
    pub second_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: 2.5,
            minimum_ease: 1.3,
            hard_penalty: 0.2,
            easy_bonus: 0.1,
            first_interval: 1,
            second_interval: 3,
        }
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn schedule(
        &self,
        state: Option<&CardReviewState>,
        quality: Quality,
        now: DateTime<Utc>,
    ) -> CardReviewState {
        let (mut interval, mut repetitions, mut ease) = match state {
            Some(s) => (s.interval_days, s.repetitions, s.ease_factor),
            None => (0, 0, self.initial_ease),
        };

        if quality == Quality::Forgot {
            // Full reset; ease is kept.
            repetitions = 0;
            interval = 0;
        } else {
            repetitions += 1;
            interval = match repetitions {
                1 => self.first_interval,
                2 => self.second_interval,
                _ => (interval as f64 * ease).ceil() as u32,
            };
            match quality {
                Quality::Hard => ease = (ease - self.hard_penalty).max(self.minimum_ease),
                Quality::Easy => ease += self.easy_bonus,
                _ => {}
            }
        }

        let days_until_next = if interval == 0 { 1 } else { interval };

        CardReviewState {
            interval_days: interval,
            ease_factor: ease,
            repetitions,
            next_review: now + Duration::days(days_until_next as i64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 15, 0, 0).unwrap()
    }

    fn review_chain(sm2: &Sm2, qualities: &[Quality]) -> Vec<CardReviewState> {
        let mut state: Option<CardReviewState> = None;
        let mut history = Vec::new();
        for &quality in qualities {
            let next = sm2.schedule(state.as_ref(), quality, now());
            history.push(next.clone());
            state = Some(next);
        }
        history
    }

    #[test]
    fn good_reviews_follow_the_interval_progression() {
        let sm2 = Sm2::default();
        let history = review_chain(&sm2, &[Quality::Good; 5]);
        let intervals: Vec<u32> = history.iter().map(|s| s.interval_days).collect();
        assert_eq!(intervals, vec![1, 3, 8, 20, 50]);
        assert!(history.iter().all(|s| s.ease_factor == 2.5));
        assert_eq!(history[4].repetitions, 5);
    }

    #[test]
    fn forgot_resets_progress_but_keeps_ease() {
        let sm2 = Sm2::default();
        let prior = CardReviewState {
            interval_days: 20,
            ease_factor: 1.9,
            repetitions: 4,
            next_review: now(),
        };
        let result = sm2.schedule(Some(&prior), Quality::Forgot, now());
        assert_eq!(result.repetitions, 0);
        assert_eq!(result.interval_days, 0);
        assert_eq!(result.ease_factor, 1.9);
        assert_eq!(result.next_review, now() + Duration::days(1));
    }

    #[test]
    fn forgot_on_new_card_is_due_tomorrow() {
        let sm2 = Sm2::default();
        let result = sm2.schedule(None, Quality::Forgot, now());
        assert_eq!(result.interval_days, 0);
        assert_eq!(result.ease_factor, 2.5);
        assert_eq!(result.next_review, now() + Duration::days(1));
    }

    #[test]
    fn hard_reviews_never_push_ease_below_floor() {
        let sm2 = Sm2::default();
        let history = review_chain(&sm2, &[Quality::Hard; 12]);
        assert!(history.iter().all(|s| s.ease_factor >= sm2.minimum_ease));
        assert_eq!(history.last().unwrap().ease_factor, sm2.minimum_ease);
    }

    #[test]
    fn easy_review_raises_ease_after_computing_interval() {
        let sm2 = Sm2::default();
        let prior = CardReviewState {
            interval_days: 3,
            ease_factor: 2.5,
            repetitions: 2,
            next_review: now(),
        };
        let result = sm2.schedule(Some(&prior), Quality::Easy, now());
        assert_eq!(result.interval_days, 8);
        assert!((result.ease_factor - 2.6).abs() < 1e-9);
        assert_eq!(result.next_review, now() + Duration::days(8));
    }

    #[test]
    fn relearning_after_reset_restarts_at_first_interval() {
        let sm2 = Sm2::default();
        let history = review_chain(
            &sm2,
            &[Quality::Good, Quality::Good, Quality::Forgot, Quality::Good],
        );
        assert_eq!(history[3].interval_days, 1);
        assert_eq!(history[3].repetitions, 1);
    }
}
