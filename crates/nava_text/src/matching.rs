//! Compatibility matching between two people.
//!
//! Scored out of 36 points after the traditional ashtakoota convention.
//! The score is a deterministic function of both names and moon signs,
//! so re-running a match never changes the verdict.

use serde::{Deserialize, Serialize};

use crate::seed::Picker;

/// Minimum score; matches below the traditional 18-point acceptance
/// threshold are not produced.
const MIN_SCORE: u32 = 18;
const MAX_SCORE: u32 = 36;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Compatibility points out of 36.
    pub score: u32,
    pub verdict: String,
    pub analysis: String,
}

const HARMONY_NOTES: [&str; 5] = [
    "Your temperaments balance each other: where one rushes, the other steadies.",
    "Shared values form the spine of this pairing; disagreements stay on the surface.",
    "Both charts favor patience, which this bond repays with unusual durability.",
    "The emotional currents here run in the same direction more often than not.",
    "Each of you strengthens exactly the area the other leaves unguarded.",
];

const FRICTION_NOTES: [&str; 5] = [
    "Watch the early months for stubbornness on both sides; name it and it softens.",
    "Money habits differ; agree on the big rules before small ones cause friction.",
    "One of you retreats under stress while the other pursues. Learn the pattern.",
    "Ambition pulls in two directions at times; calendars need honest negotiation.",
    "Family expectations press on this match; a united front settles them.",
];

fn verdict_for(score: u32) -> &'static str {
    match score {
        33..=36 => "Excellent Match",
        28..=32 => "Very Good Match",
        23..=27 => "Good Match",
        _ => "Average Match",
    }
}

/// Score a pairing from names and moon signs.
///
/// Arguments are order-normalized, so `a, b` and `b, a` give the same
/// result.
pub fn match_couple(name_a: &str, sign_a: &str, name_b: &str, sign_b: &str) -> MatchResult {
    let first = format!("{name_a}:{sign_a}");
    let second = format!("{name_b}:{sign_b}");
    let (lo, hi) = if first <= second {
        (&first, &second)
    } else {
        (&second, &first)
    };
    let mut picker = Picker::from_identity(&format!("{lo}|{hi}"));

    let score = picker.in_range(MIN_SCORE, MAX_SCORE);
    let harmony = picker.choose(&HARMONY_NOTES);
    let friction = picker.choose(&FRICTION_NOTES);
    let analysis = format!(
        "{name_a} ({sign_a}) and {name_b} ({sign_b}) score {score} of 36 points.\n\n{harmony}\n\n{friction}"
    );

    MatchResult {
        score,
        verdict: verdict_for(score).to_owned(),
        analysis,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = match_couple("Asha", "Scorpio", "Ravi", "Taurus");
        let b = match_couple("Asha", "Scorpio", "Ravi", "Taurus");
        assert_eq!(a, b);
    }

    #[test]
    fn symmetric_in_score_and_verdict() {
        let ab = match_couple("Asha", "Scorpio", "Ravi", "Taurus");
        let ba = match_couple("Ravi", "Taurus", "Asha", "Scorpio");
        assert_eq!(ab.score, ba.score);
        assert_eq!(ab.verdict, ba.verdict);
    }

    #[test]
    fn score_in_bounds() {
        for i in 0..50 {
            let r = match_couple(&format!("A{i}"), "Leo", &format!("B{i}"), "Virgo");
            assert!((MIN_SCORE..=MAX_SCORE).contains(&r.score));
            assert_eq!(r.verdict, verdict_for(r.score));
        }
    }

    #[test]
    fn verdict_thresholds() {
        assert_eq!(verdict_for(36), "Excellent Match");
        assert_eq!(verdict_for(33), "Excellent Match");
        assert_eq!(verdict_for(32), "Very Good Match");
        assert_eq!(verdict_for(28), "Very Good Match");
        assert_eq!(verdict_for(27), "Good Match");
        assert_eq!(verdict_for(23), "Good Match");
        assert_eq!(verdict_for(22), "Average Match");
        assert_eq!(verdict_for(18), "Average Match");
    }

    #[test]
    fn result_serializes_with_contract_field_names() {
        let r = match_couple("Asha", "Scorpio", "Ravi", "Taurus");
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["score"].is_u64());
        assert!(json["verdict"].is_string());
        assert!(json["analysis"].is_string());
    }

    #[test]
    fn analysis_names_both_people() {
        let r = match_couple("Asha", "Scorpio", "Ravi", "Taurus");
        assert!(r.analysis.contains("Asha"));
        assert!(r.analysis.contains("Ravi"));
        assert!(r.analysis.contains(&r.score.to_string()));
    }
}
