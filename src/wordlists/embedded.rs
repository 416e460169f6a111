//! Embedded word lists
//!
//! One list per natural word length, compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/wordlists.rs"));

/// All embedded lists, shortest words first
pub const ALL_LISTS: [&[&str]; 5] = [WORDS_1, WORDS_2, WORDS_3, WORDS_4, WORDS_5];
