//! Flashcard study commands.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rand::Rng;
use study_core::algorithm::{due_cards, shuffle_for_study, SpacedRepetitionAlgorithm};
use study_core::calendar::{iso_date, local_date_of};
use study_core::{CardId, CardReviewState, Quality};

use super::settings::load_settings;
use super::Result;
use crate::db::{keys, RecordStore};

type CardStates = HashMap<CardId, CardReviewState>;

#[derive(Debug, serde::Deserialize)]
pub struct ReviewRequest {
    pub card_id: CardId,
    /// 0 forgot, 1 hard, 2 good, 3 easy.
    pub quality: u8,
}

#[derive(Debug, serde::Serialize)]
pub struct ReviewResponse {
    pub new_state: CardReviewState,
    /// Local calendar day of the next review.
    pub next_due: String,
}

/// Due cards of a deck in presentation order.
///
/// `card_ids` is the deck's full card list; cards never reviewed are always
/// due.
pub fn study_queue<S, R>(
    store: &S,
    owner_id: &str,
    card_ids: &[CardId],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<Vec<CardId>>
where
    S: RecordStore,
    R: Rng + ?Sized,
{
    let settings = load_settings(store, owner_id)?;
    let states: CardStates = store.get_or_default(owner_id, keys::CARD_STATES)?;

    let mut due = due_cards(card_ids, &states, now);
    if settings.shuffle_due_cards {
        shuffle_for_study(&mut due, rng);
    }
    tracing::debug!(owner_id, deck_size = card_ids.len(), due = due.len(), "study queue built");
    Ok(due)
}

/// Record a review and schedule the card's next one.
pub fn submit_review<S: RecordStore>(
    store: &S,
    owner_id: &str,
    request: ReviewRequest,
    now: DateTime<Utc>,
) -> Result<ReviewResponse> {
    let quality = Quality::try_from(request.quality)?;
    let settings = load_settings(store, owner_id)?;
    let algorithm = settings.sm2;

    let mut states: CardStates = store.get_or_default(owner_id, keys::CARD_STATES)?;
    let new_state = algorithm.schedule(states.get(&request.card_id), quality, now);
    states.insert(request.card_id.clone(), new_state.clone());
    store.set(owner_id, keys::CARD_STATES, &states)?;

    tracing::info!(
        owner_id,
        card_id = %request.card_id,
        algorithm = algorithm.name(),
        quality = quality.to_value(),
        interval = new_state.interval_days,
        "review recorded"
    );

    Ok(ReviewResponse {
        next_due: iso_date(local_date_of(new_state.next_review)),
        new_state,
    })
}

/// Review state of a card; `None` for a card never reviewed.
pub fn get_card_state<S: RecordStore>(
    store: &S,
    owner_id: &str,
    card_id: &str,
) -> Result<Option<CardReviewState>> {
    let mut states: CardStates = store.get_or_default(owner_id, keys::CARD_STATES)?;
    Ok(states.remove(card_id))
}
