//! pokle-solver: solver engine for the three-player Pokle board-guessing puzzle
//!
//! Goals:
//! - Deterministic, reproducible candidate-board search and guess selection
//! - Small, well-documented public API centered on `solver::Solver`
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: evaluate a hand at a phase
//! ```
//! use pokle_solver::cards::{Card, Rank, Suit};
//! use pokle_solver::evaluator::{evaluate_best, Category};
//! use pokle_solver::hole::HoleCards;
//!
//! let hole = HoleCards::try_new(
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Hearts),
//! ).unwrap();
//! let board = [
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Queen, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Hearts),
//! ];
//!
//! let mut cards = hole.as_array().to_vec();
//! cards.extend_from_slice(&board);
//! let eval = evaluate_best(&cards);
//! assert_eq!(eval.category, Category::Pair);
//! ```
//!
//! ## CLI
//! Run the interactive driver with:
//! ```sh
//! cargo run --bin pokle
//! ```

pub mod board;
pub mod cards;
pub mod cardset;
pub mod combinatorics;
pub mod comparator;
pub mod deck;
pub mod enumerator;
pub mod evaluator;
pub mod hole;
pub mod phase;
pub mod pruner;
pub mod selector;
pub mod solver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
