//! Word lists for Warmle
//!
//! Provides the five embedded dictionaries (one per word length 1-5) and the builder
//! that merges them into one padded, sorted working dictionary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{
    ALL_LISTS, WORDS_1, WORDS_1_COUNT, WORDS_2, WORDS_2_COUNT, WORDS_3, WORDS_3_COUNT, WORDS_4,
    WORDS_4_COUNT, WORDS_5, WORDS_5_COUNT,
};
