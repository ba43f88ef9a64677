//! Benchmarks for `url-canon`.
//!
//! This crate has no library items. See `benches/`.
