//! Merges player-card snapshots as they arrive from the score store.
//!
//! Updates can be partial and can arrive out of order. The reducer keeps the
//! last known good value of every field so the scoring functions always see a
//! complete card and never need to know where the data came from.

use crate::model::Strokes;
use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlayerCard {
    pub player_id: String,
    pub name: String,
    pub handicap: f64,
    pub strokes: Vec<Strokes>,
    pub revision: u64,
}

/// A snapshot of one player's card. Absent fields were not part of the update.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CardUpdate {
    pub player_id: String,
    pub revision: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub handicap: Option<f64>,
    /// Per hole: `None` keeps what we had, `Some(0)` clears the hole.
    #[serde(default)]
    pub strokes: Option<Vec<Strokes>>,
}

#[derive(Clone, Debug, Default)]
pub struct CardState {
    cards: HashMap<String, PlayerCard, RandomState>,
}

impl CardState {
    #[must_use]
    pub fn get(&self, player_id: &str) -> Option<&PlayerCard> {
        self.cards.get(player_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards sorted by player id.
    #[must_use]
    pub fn cards(&self) -> Vec<&PlayerCard> {
        let mut cards: Vec<&PlayerCard> = self.cards.values().collect();
        cards.sort_by(|a, b| a.player_id.cmp(&b.player_id));
        cards
    }
}

fn merge_strokes(current: &[Strokes], incoming: &[Strokes]) -> Vec<Strokes> {
    let len = current.len().max(incoming.len());
    (0..len)
        .map(|i| match incoming.get(i).copied().flatten() {
            Some(0) => None,
            Some(strokes) => Some(strokes),
            None => current.get(i).copied().flatten(),
        })
        .collect()
}

fn merge_card(current: Option<&PlayerCard>, update: &CardUpdate) -> PlayerCard {
    let base = current.cloned().unwrap_or_else(|| PlayerCard {
        player_id: update.player_id.clone(),
        name: update.player_id.clone(),
        handicap: 0.0,
        strokes: Vec::new(),
        revision: 0,
    });
    PlayerCard {
        player_id: base.player_id,
        name: update.name.clone().unwrap_or(base.name),
        handicap: update.handicap.unwrap_or(base.handicap),
        strokes: match &update.strokes {
            Some(incoming) => merge_strokes(&base.strokes, incoming),
            None => base.strokes,
        },
        revision: update.revision,
    }
}

/// Applies one update and returns the new state; `state` is left untouched.
///
/// An update older than the card already held is ignored.
#[must_use]
pub fn apply(state: &CardState, update: &CardUpdate) -> CardState {
    let current = state.cards.get(&update.player_id);
    if let Some(card) = current {
        if update.revision < card.revision {
            log::debug!(
                "dropping stale update for {} (revision {} < {})",
                update.player_id,
                update.revision,
                card.revision
            );
            return state.clone();
        }
    }
    let merged = merge_card(current, update);
    let mut next = state.clone();
    next.cards.insert(update.player_id.clone(), merged);
    next
}

/// Folds a batch of updates in arrival order.
#[must_use]
pub fn apply_all<'a>(
    state: &CardState,
    updates: impl IntoIterator<Item = &'a CardUpdate>,
) -> CardState {
    updates
        .into_iter()
        .fold(state.clone(), |acc, update| apply(&acc, update))
}
