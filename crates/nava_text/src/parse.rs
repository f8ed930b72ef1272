//! Parsing of delimiter-separated readings from an upstream generator.
//!
//! Upstream text generators are asked for `PREDICTION|GUIDANCE|FOCUS`.
//! They frequently wrap the answer in markdown fences or ignore the
//! format entirely, so parsing never fails: a malformed reply collapses
//! into a whole-text prediction with neutral guidance.

use crate::horoscope::DailyHoroscope;

const FALLBACK_GUIDANCE: &str = "Trust the universal flow.";
const FALLBACK_FOCUS: &str = "Balance";

/// Parse a `PREDICTION|GUIDANCE|FOCUS` reply.
///
/// Extra `|` parts are folded into nothing; fewer than three parts
/// falls back to the whole text as the prediction.
pub fn parse_reading(raw: &str) -> DailyHoroscope {
    let text = strip_fences(raw).trim();
    let parts: Vec<&str> = text.split('|').collect();
    if parts.len() >= 3 {
        DailyHoroscope {
            rasi_prediction: parts[0].trim().to_owned(),
            nakshatra_guidance: parts[1].trim().to_owned(),
            daily_focus: parts[2].trim().to_owned(),
        }
    } else {
        DailyHoroscope {
            rasi_prediction: text.to_owned(),
            nakshatra_guidance: FALLBACK_GUIDANCE.to_owned(),
            daily_focus: FALLBACK_FOCUS.to_owned(),
        }
    }
}

/// Remove a surrounding markdown code fence, if present.
fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence line.
    match body.split_once('\n') {
        Some((first, tail)) if !first.contains('|') => tail,
        _ => body,
    }
}
