//! Bingo card generation and play for a show's phrase pool.

pub mod card;

pub use card::{
    BingoCard, CardError, CardLayout, Cell, FREE_SPACE, Line, generate_card,
    generate_card_with_rng, phrase_pool, required_phrases,
};
