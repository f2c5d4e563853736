//! Phrase bank - the per-field fragment lookup table.
//!
//! A fragment is one candidate sentence template. Fragments are grouped
//! either by a constant bucket (intro, detail, closing) or keyed by a
//! selected field value. The table is built once and never mutated.
//!
//! Templates may carry `{service}` and `{city}` substitution markers and
//! `*emphasis*` markers around keywords; the composer substitutes the
//! former and strips the latter before returning plain text.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::wizard::{Highlight, RecommendationLevel, RepairProblem};

/// Marker substituted with the selected service's display name.
pub const SERVICE_MARKER: &str = "{service}";
/// Marker substituted with the branding service area.
pub const CITY_MARKER: &str = "{city}";
/// Character wrapping emphasized keywords inside fragment templates.
pub const EMPHASIS_MARKER: char = '*';

/// A fragment group independent of any user selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Intro,
    /// Repair detail used when the repair service is selected but no
    /// problem-keyed list applies.
    GenericRepairDetail,
    /// Detail for every non-repair service.
    NonRepairDetail,
    Closing,
}

/// Immutable fragment lookup table for one deployment.
#[derive(Debug, Clone)]
pub struct PhraseBank {
    intros: Vec<&'static str>,
    repair_details: HashMap<RepairProblem, Vec<&'static str>>,
    generic_repair_details: Vec<&'static str>,
    non_repair_details: Vec<&'static str>,
    highlights: HashMap<Highlight, Vec<&'static str>>,
    recommendations: HashMap<RecommendationLevel, Vec<&'static str>>,
    closings: Vec<&'static str>,
}

impl PhraseBank {
    /// Returns the fragments of a constant bucket.
    pub fn fragments(&self, bucket: Bucket) -> &[&'static str] {
        match bucket {
            Bucket::Intro => &self.intros,
            Bucket::GenericRepairDetail => &self.generic_repair_details,
            Bucket::NonRepairDetail => &self.non_repair_details,
            Bucket::Closing => &self.closings,
        }
    }

    /// Returns the detail fragments for a specific repair problem, or
    /// `None` when the problem has no registered list.
    pub fn problem_fragments(&self, problem: RepairProblem) -> Option<&[&'static str]> {
        self.repair_details.get(&problem).map(Vec::as_slice)
    }

    /// Returns the fragments for a highlighted strength.
    pub fn highlight_fragments(&self, highlight: Highlight) -> Option<&[&'static str]> {
        self.highlights.get(&highlight).map(Vec::as_slice)
    }

    /// Returns the fragments for a recommendation level.
    pub fn recommendation_fragments(
        &self,
        level: RecommendationLevel,
    ) -> Option<&[&'static str]> {
        self.recommendations.get(&level).map(Vec::as_slice)
    }

    /// Checks that every bucket and every registered key has at least one
    /// fragment.
    ///
    /// Missing lists must not be reachable through the UI's own domain;
    /// this catches a malformed dataset at startup rather than mid-session.
    pub fn validate(&self) -> Result<(), DomainError> {
        let check = |name: &str, fragments: &[&'static str]| {
            if fragments.is_empty() {
                Err(DomainError::new(
                    ErrorCode::MissingTemplate,
                    "Phrase bank list is empty",
                )
                .with_detail("list", name))
            } else {
                Ok(())
            }
        };

        check("intros", &self.intros)?;
        check("generic_repair_details", &self.generic_repair_details)?;
        check("non_repair_details", &self.non_repair_details)?;
        check("closings", &self.closings)?;

        for problem in RepairProblem::all() {
            let fragments = self
                .problem_fragments(*problem)
                .unwrap_or(&self.generic_repair_details);
            check("repair_details", fragments)?;
        }
        for highlight in Highlight::all() {
            check(
                "highlights",
                self.highlight_fragments(*highlight).unwrap_or(&[]),
            )?;
        }
        for level in RecommendationLevel::all() {
            check(
                "recommendations",
                self.recommendation_fragments(*level).unwrap_or(&[]),
            )?;
        }
        Ok(())
    }

    /// The built-in dataset shared by every session.
    pub fn builtin() -> &'static PhraseBank {
        &BUILTIN
    }
}

static BUILTIN: Lazy<PhraseBank> = Lazy::new(|| {
    let mut repair_details = HashMap::new();
    repair_details.insert(
        RepairProblem::WarmAir,
        vec![
            "Our system was blowing warm air and they had cold air flowing again the same visit.",
            "The unit had been pushing out warm air for days, and they tracked the fault down fast.",
            "They diagnosed why it was blowing warm and explained exactly what had failed.",
        ],
    );
    repair_details.insert(
        RepairProblem::StrangeNoise,
        vec![
            "The unit was making an awful rattling noise and they pinpointed the cause in minutes.",
            "That grinding sound we'd been ignoring turned out to be a worn part they swapped on the spot.",
            "They took the strange noise seriously and didn't leave until it ran quietly.",
        ],
    );
    repair_details.insert(
        RepairProblem::WaterLeak,
        vec![
            "Water had been pooling under the indoor unit and they cleared the blockage cleanly.",
            "They found the source of the leak quickly and dried everything out before sealing it.",
            "The drain line leak that ruined our weekend was fixed properly, not just patched.",
        ],
    );
    repair_details.insert(
        RepairProblem::WontTurnOn,
        vec![
            "The system wouldn't turn on at all, and they had it running within the hour.",
            "A dead unit in the middle of summer is no joke; they brought it back to life the same day.",
            "They traced why it refused to start and walked me through the fix.",
        ],
    );

    let mut highlights = HashMap::new();
    highlights.insert(
        Highlight::FastResponse,
        vec![
            "What stood out most was the *fast response* - they were at our door within hours.",
            "Their *fast response* time honestly surprised us, same-day service in peak season.",
            "I called in the morning and they arrived before noon; that kind of *fast response* is rare.",
        ],
    );
    highlights.insert(
        Highlight::FairPricing,
        vec![
            "The quote was upfront and the *fair pricing* matched it to the dollar.",
            "No surprise charges, just honest work at a *fair price*.",
            "They charged exactly what was quoted, and the *fair pricing* made it an easy decision.",
        ],
    );
    highlights.insert(
        Highlight::CleanWork,
        vec![
            "They left the work area spotless - genuinely *clean work* from start to finish.",
            "Drop cloths, shoe covers, and a tidy sweep at the end; the *clean work* was appreciated.",
            "You wouldn't know anyone had been here except for the working AC; impressively *clean work*.",
        ],
    );
    highlights.insert(
        Highlight::ClearCommunication,
        vec![
            "The *clear communication* meant we always knew what was happening and why.",
            "They explained every option in plain language - *clear communication* the whole way.",
            "Updates before, during, and after the job; their *clear communication* set them apart.",
        ],
    );

    let mut recommendations = HashMap::new();
    recommendations.insert(
        RecommendationLevel::Likely,
        vec![
            "I'd likely call them again next time we need AC work.",
            "Solid experience overall; I'd consider them again.",
            "A dependable crew I'd probably use again.",
        ],
    );
    recommendations.insert(
        RecommendationLevel::VeryLikely,
        vec![
            "I'd very likely recommend them to friends and neighbors.",
            "We'll definitely keep their number for future HVAC needs.",
            "Very likely to use them again - the whole experience was smooth.",
        ],
    );
    recommendations.insert(
        RecommendationLevel::HighlyRecommended,
        vec![
            "Highly recommended - five stars without hesitation.",
            "This team comes *highly recommended* from our whole household.",
            "If you're on the fence, don't be: highly recommended.",
        ],
    );

    PhraseBank {
        intros: vec![
            "Huge thanks to the team for the recent {service} in {city}.",
            "Just had my {service} completed in {city} and our home is comfortable again.",
            "If you're looking for a reliable {service} in {city}, I highly recommend this crew.",
            "We were in need of an urgent {service} in {city} and they exceeded expectations.",
            "I am beyond impressed with the {service} work done at our {city} property.",
            "Professional and efficient {service} right here in {city}!",
            "{city} residents, if you need a professional {service}, these are your guys.",
        ],
        repair_details,
        generic_repair_details: vec![
            "The repair itself was handled quickly and the system has run perfectly since.",
            "They diagnosed the fault on the first visit and fixed it without cutting corners.",
            "From diagnosis to fix, the repair was thorough and clearly explained.",
        ],
        non_repair_details: vec![
            "The whole job was handled carefully and the system has been running great since.",
            "Everything was done on schedule and they walked us through the finished work.",
            "The crew clearly knew their trade and treated our home with respect.",
        ],
        highlights,
        recommendations,
        closings: vec![
            "I'd absolutely recommend them to anyone in {city} needing AC help!",
            "High-quality service and a great team all around.",
            "We will definitely be using them for all our future HVAC needs!",
            "Best experience we've had with an AC service company. Five stars!",
            "Don't hesitate to give them a call if you want the job done right.",
            "A true local gem in {city}. Highly recommended for any AC work!",
            "Very satisfied with the results. Thank you again!",
        ],
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bank_passes_validation() {
        PhraseBank::builtin().validate().unwrap();
    }

    #[test]
    fn every_constant_bucket_is_non_empty() {
        let bank = PhraseBank::builtin();
        for bucket in [
            Bucket::Intro,
            Bucket::GenericRepairDetail,
            Bucket::NonRepairDetail,
            Bucket::Closing,
        ] {
            assert!(!bank.fragments(bucket).is_empty(), "{:?} is empty", bucket);
        }
    }

    #[test]
    fn every_repair_problem_has_fragments() {
        let bank = PhraseBank::builtin();
        for problem in RepairProblem::all() {
            let fragments = bank.problem_fragments(*problem).unwrap();
            assert!(!fragments.is_empty(), "{:?} has no fragments", problem);
        }
    }

    #[test]
    fn every_highlight_has_multiple_candidates() {
        let bank = PhraseBank::builtin();
        for highlight in Highlight::all() {
            let fragments = bank.highlight_fragments(*highlight).unwrap();
            assert!(
                fragments.len() >= 2,
                "{:?} should offer a random choice",
                highlight
            );
        }
    }

    #[test]
    fn every_recommendation_level_has_fragments() {
        let bank = PhraseBank::builtin();
        for level in RecommendationLevel::all() {
            assert!(!bank.recommendation_fragments(*level).unwrap().is_empty());
        }
    }

    #[test]
    fn intros_and_closings_reference_the_city() {
        let bank = PhraseBank::builtin();
        assert!(bank
            .fragments(Bucket::Intro)
            .iter()
            .all(|f| f.contains(CITY_MARKER)));
        assert!(bank
            .fragments(Bucket::Closing)
            .iter()
            .any(|f| f.contains(CITY_MARKER)));
    }

    #[test]
    fn intros_reference_the_service() {
        let bank = PhraseBank::builtin();
        assert!(bank
            .fragments(Bucket::Intro)
            .iter()
            .all(|f| f.contains(SERVICE_MARKER)));
    }

    #[test]
    fn validate_flags_an_empty_list() {
        let mut bank = PhraseBank::builtin().clone();
        bank.intros.clear();
        let err = bank.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingTemplate);
        assert_eq!(err.details.get("list"), Some(&"intros".to_string()));
    }
}
