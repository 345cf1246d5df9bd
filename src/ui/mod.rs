// src/ui/mod.rs
// Presentation contracts only: the card's clickable affordances, display
// formatting, and the copy-to-clipboard action. Layout and styling live in
// the front-end, not here.

pub mod card;
pub mod clipboard;
pub mod colors;

pub use card::{card_elements, CardElement};
