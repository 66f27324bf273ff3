//! Fuzzing library for book-finder.
//!
//! This crate provides fuzzing targets for catalog response parsing
//! and the volume-to-book mapping.
//!
//! # Usage
//!
//! ```bash
//! cd crates/book-finder-fuzz
//! cargo +nightly fuzz run fuzz_volumes_parse -- -max_total_time=60
//! ```

pub use book_finder::models;
