pub mod config;
pub mod core;
pub mod phonology;

pub use crate::core::converter::{trace, transcribe, Trace, Transcription};
pub use crate::core::{apply_rules, to_ipa, tokenize};
pub use phonology::{Phoneme, PhonemeClass, Phonology, SoundChangeRule};
