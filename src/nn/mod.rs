//! Neural network feature encoding.
//!
//! Converts a `Board` into the 198-unit input vector used by TD-Gammon style
//! value networks, and encodes every turn of an action tree for evaluation.

pub mod encoding;

pub use encoding::{encode, encode_actions, encode_moves, reverse_features, Features, NUM_FEATURES};
