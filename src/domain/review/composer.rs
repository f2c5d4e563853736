//! Review composition - turns selections plus branding into the final
//! review string.
//!
//! Composition is pure given the injected index picker, which keeps the
//! random fragment choice reproducible in tests. The composed string is
//! always plain text: substitution markers are resolved and emphasis
//! markers stripped before returning.

use rand::Rng;

use super::phrase_bank::{Bucket, PhraseBank, CITY_MARKER, EMPHASIS_MARKER, SERVICE_MARKER};
use crate::domain::branding::BrandingContext;
use crate::domain::wizard::FieldValues;

/// Placeholder rendered when no service is selected yet (live preview
/// before the gating step completed).
pub const SERVICE_PLACEHOLDER: &str = "[Service]";
/// Placeholder rendered when no highlight is selected yet.
pub const HIGHLIGHT_PLACEHOLDER: &str = "[Highlight]";

/// Sentence used when a recommendation level has no registered fragments.
/// Unreachable with a validated bank; the output must never lose a slot.
const RECOMMENDATION_FALLBACK: &str = "I would recommend them.";
/// Sentence used when every applicable detail list is missing.
const DETAIL_FALLBACK: &str = "The work was completed to a high standard.";

/// Injected source of random indices.
///
/// `pick` receives the candidate count (always >= 1) and must return an
/// index strictly below it.
pub trait IndexPicker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Test picker that always returns the same index (clamped to range).
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl IndexPicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Test picker that walks a predefined sequence, wrapping around.
#[derive(Debug, Clone)]
pub struct CyclingPicker {
    sequence: Vec<usize>,
    cursor: usize,
}

impl CyclingPicker {
    pub fn new(sequence: Vec<usize>) -> Self {
        Self { sequence, cursor: 0 }
    }
}

impl IndexPicker for CyclingPicker {
    fn pick(&mut self, len: usize) -> usize {
        let raw = self.sequence.get(self.cursor).copied().unwrap_or(0);
        self.cursor = (self.cursor + 1) % self.sequence.len().max(1);
        raw % len
    }
}

fn pick_from<'a>(fragments: &[&'a str], picker: &mut dyn IndexPicker) -> Option<&'a str> {
    if fragments.is_empty() {
        None
    } else {
        Some(fragments[picker.pick(fragments.len())])
    }
}

/// Composes the review in fixed slot order: intro, detail, highlight,
/// recommendation, optional free text, closing.
///
/// Missing required selections degrade to visible placeholders rather than
/// failing, so partial live previews stay renderable. The result is never
/// empty and contains no emphasis markers.
pub fn compose(
    values: &FieldValues,
    branding: &BrandingContext,
    bank: &PhraseBank,
    picker: &mut dyn IndexPicker,
) -> String {
    let city = branding.service_area.as_str();
    let service_text = values
        .service()
        .map(|s| s.display_name())
        .unwrap_or(SERVICE_PLACEHOLDER);

    let intro = pick_from(bank.fragments(Bucket::Intro), picker)
        .unwrap_or("Thanks for the recent {service} in {city}.")
        .replace(SERVICE_MARKER, service_text)
        .replace(CITY_MARKER, city);

    // Binary branch: a repair with a named problem draws from the
    // problem-keyed bucket, everything else from the generic buckets.
    let detail = match (values.is_repair_selected(), values.problem()) {
        (true, Some(problem)) => bank
            .problem_fragments(problem)
            .and_then(|fragments| pick_from(fragments, picker))
            .or_else(|| {
                tracing::debug!(problem = %problem, "no problem-keyed detail, using generic");
                pick_from(bank.fragments(Bucket::GenericRepairDetail), picker)
            }),
        (true, None) => pick_from(bank.fragments(Bucket::GenericRepairDetail), picker),
        (false, _) => pick_from(bank.fragments(Bucket::NonRepairDetail), picker),
    }
    .unwrap_or(DETAIL_FALLBACK)
    .to_string();

    let highlight = match values.highlight() {
        Some(highlight) => bank
            .highlight_fragments(highlight)
            .and_then(|fragments| pick_from(fragments, picker))
            .unwrap_or(HIGHLIGHT_PLACEHOLDER),
        None => HIGHLIGHT_PLACEHOLDER,
    };

    let recommendation = bank
        .recommendation_fragments(values.recommendation())
        .and_then(|fragments| pick_from(fragments, picker))
        .unwrap_or(RECOMMENDATION_FALLBACK);

    let closing = pick_from(bank.fragments(Bucket::Closing), picker)
        .unwrap_or("Thank you again!")
        .replace(CITY_MARKER, city);

    let free_text = values.additional_comments().trim();

    let mut slots: Vec<&str> = vec![&intro, &detail, highlight, recommendation];
    if !free_text.is_empty() {
        slots.push(free_text);
    }
    slots.push(&closing);

    slots
        .join(" ")
        .replace(EMPHASIS_MARKER, "")
}
