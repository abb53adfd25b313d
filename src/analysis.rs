//! Text analysis module for text-ripper.
//!
//! This module turns one cell of text into classified tokens: a
//! morphological engine segments the text, and the word tokenizer splits the
//! resulting tokens into words and non-words.

pub mod morphology;
pub mod token;
pub mod tokenizer;
