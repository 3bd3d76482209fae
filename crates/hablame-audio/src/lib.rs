//! Read sentences aloud from pre-recorded word clips.
//!
//! Each word maps to one audio file. A sentence is played clip by clip,
//! words without a recording are skipped, and a new sentence cuts off the
//! one still playing.

pub mod catalog;
pub mod error;
pub mod narrator;
pub mod player;

pub use catalog::{AudioCatalog, RECORDED_WORDS};
pub use error::AudioError;
pub use narrator::{Narrator, PlaybackReport};
pub use player::{ClipPlayer, CommandPlayer};
