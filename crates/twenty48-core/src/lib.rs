//! twenty48-core: a 2048 board engine
//!
//! This crate provides:
//! - A `Board` type over plain 4x4 cell values with ergonomic methods
//!   (`slide`, `with_random_tile`, `is_game_over`, ...)
//! - A `Game` state machine coupling the grid with its score accumulator
//!   (`apply_move`, `reset`, `has_won`, ...)
//!
//! Quick start:
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use twenty48_core::engine::{Game, Move};
//!
//! // Deterministic game initialization with a seeded RNG
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(&mut rng);
//! assert_eq!(game.board().count_empty(), 14);
//! assert_eq!(game.score(), 0);
//!
//! // Drive a few moves; a move that changes nothing reports false
//! let mut moves = 0u32;
//! while !game.is_game_over() && moves < 8 {
//!     for dir in Move::ALL {
//!         if game.apply_move(dir, &mut rng) {
//!             moves += 1;
//!             break;
//!         }
//!     }
//! }
//! assert!(moves > 0);
//! ```
//!
//! Note: For convenience, there are also free functions mirroring the `Board`
//! methods (e.g., `engine::slide`, `engine::with_random_tile`) and `_thread`
//! variants that use the thread-local RNG. Prefer the `&mut impl Rng`
//! methods when you need determinism.

pub mod engine;

pub use engine::{Board, Game, Move};
