use crate::cards::{Card, Rank, Suit};

/// The 52-card deck, built once per call in fixed canonical order
/// (suit-major, rank ascending) and immediately filtered down to what the
/// board enumerator actually needs: whatever is left once hole cards are
/// dealt. Pokle deals all hole cards up front and never shuffles or draws
/// one card at a time, so this module exposes exactly one operation.
pub struct Deck;

impl Deck {
    fn standard() -> Vec<Card> {
        Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect()
    }

    /// The 52-card deck minus `dead`, preserving canonical order. Feeds the
    /// board enumerator's `ChooseThree` flop search with the pool of cards
    /// still in play once all six hole cards are removed.
    ///
    /// ```
    /// use pokle_solver::cards::{Card, Rank, Suit};
    /// use pokle_solver::deck::Deck;
    ///
    /// let dead = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::King, Suit::Hearts)];
    /// let rest = Deck::remaining(&dead);
    /// assert_eq!(rest.len(), 50);
    /// assert!(!rest.contains(&dead[0]));
    /// ```
    pub fn remaining(dead: &[Card]) -> Vec<Card> {
        Self::standard().into_iter().filter(|c| !dead.contains(c)).collect()
    }
}
