//! Review text synthesis: phrase bank and composer.

mod composer;
mod phrase_bank;

pub use composer::{
    compose, CyclingPicker, FixedPicker, IndexPicker, ThreadRngPicker, HIGHLIGHT_PLACEHOLDER,
    SERVICE_PLACEHOLDER,
};
pub use phrase_bank::{
    Bucket, PhraseBank, CITY_MARKER, EMPHASIS_MARKER, SERVICE_MARKER,
};
