//! Ship deck - Draw pile, discard pile and the face-up market

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Ship cards by card id. The top of each pile is the end of its `Vec`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipDeck {
    draw_pile: Vec<String>,
    discard_pile: Vec<String>,
    played: Vec<String>,
    max_played: usize,
}

impl ShipDeck {
    pub fn new(cards: Vec<String>, max_played: usize) -> Self {
        ShipDeck {
            draw_pile: cards,
            discard_pile: Vec::new(),
            played: Vec::new(),
            max_played,
        }
    }

    /// Face-up ships in the market, in the order they were dealt
    pub fn played(&self) -> &[String] {
        &self.played
    }

    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// One ship per opponent, at least one, never more than the market holds
    pub fn ships_needed(&self, seated_players: usize) -> usize {
        seated_players.saturating_sub(1).max(1).min(self.max_played)
    }

    /// Put a newly found ship card on top of the draw pile
    pub fn push_card(&mut self, card_id: impl Into<String>) {
        self.draw_pile.push(card_id.into());
    }

    pub fn contains(&self, card_id: &str) -> bool {
        self.draw_pile
            .iter()
            .chain(&self.discard_pile)
            .chain(&self.played)
            .any(|c| c == card_id)
    }

    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.draw_pile.shuffle(rng);
    }

    /// Move every face-up ship to the discard pile
    pub fn discard_played(&mut self) {
        self.discard_pile.append(&mut self.played);
    }

    /// Discard a single market ship, e.g. one that was scrapped.
    /// False when the card is not in the market.
    pub fn discard_ship(&mut self, card_id: &str) -> bool {
        match self.played.iter().position(|c| c == card_id) {
            Some(idx) => {
                let card = self.played.remove(idx);
                self.discard_pile.push(card);
                true
            }
            None => false,
        }
    }

    /// Take a card out of every pile, e.g. a ship a player now owns.
    /// False when the card was in none of them.
    pub fn remove(&mut self, card_id: &str) -> bool {
        let before = self.draw_pile.len() + self.discard_pile.len() + self.played.len();
        self.draw_pile.retain(|c| c != card_id);
        self.discard_pile.retain(|c| c != card_id);
        self.played.retain(|c| c != card_id);
        before != self.draw_pile.len() + self.discard_pile.len() + self.played.len()
    }

    /// Put a card that is back in circulation on the discard pile
    pub fn discard_card(&mut self, card_id: impl Into<String>) {
        let card_id = card_id.into();
        if !self.contains(&card_id) {
            self.discard_pile.push(card_id);
        }
    }

    /// Deal ships into empty market positions until `ships_needed` are showing.
    ///
    /// When the draw pile cannot cover the shortfall the discard pile is
    /// merged into it and the whole pile reshuffled. Returns the newly dealt ids.
    pub fn draw(&mut self, seated_players: usize, rng: &mut impl Rng) -> Vec<String> {
        let needed = self.ships_needed(seated_players);
        let shortfall = needed.saturating_sub(self.played.len());

        if self.draw_pile.len() < shortfall && !self.discard_pile.is_empty() {
            debug!(
                draw = self.draw_pile.len(),
                discard = self.discard_pile.len(),
                "reshuffling discard into draw pile"
            );
            self.draw_pile.append(&mut self.discard_pile);
            self.draw_pile.shuffle(rng);
        }

        let mut dealt = Vec::with_capacity(shortfall);
        for _ in 0..shortfall {
            match self.draw_pile.pop() {
                Some(card) => {
                    self.played.push(card.clone());
                    dealt.push(card);
                }
                None => break,
            }
        }
        info!(dealt = dealt.len(), needed, "ships dealt to market");
        dealt
    }

    pub fn discard_and_redraw(&mut self, seated_players: usize, rng: &mut impl Rng) -> Vec<String> {
        self.discard_played();
        self.draw(seated_players, rng)
    }
}
