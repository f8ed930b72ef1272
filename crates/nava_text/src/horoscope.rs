//! Daily horoscope generation.
//!
//! Output is fully deterministic: the sign and date form the seed, so a
//! reader asking twice on the same day sees the same text.

use serde::{Deserialize, Serialize};

use crate::seed::Picker;

/// One day's reading for a sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHoroscope {
    pub rasi_prediction: String,
    pub nakshatra_guidance: String,
    pub daily_focus: String,
}

const PREDICTIONS: [&str; 8] = [
    "The stars suggest a day of reflection for {rasi}. {date} brings clarity to your inner thoughts.",
    "Energy levels are high for {rasi} today. Use this momentum to tackle pending tasks.",
    "A surprising encounter might shift your perspective. Stay open to new ideas, {rasi}.",
    "Financial caution is advised on {date}. Focus on long-term stability rather than quick gains.",
    "Relationships take center stage. Communication is your strongest asset today, {rasi}.",
    "The cosmos aligns to support your creative endeavors. unexpected inspiration strikes.",
    "Patience will be tested, but perseverance yields results. Trust the process.",
    "A good day for health and wellness. Listen to your body's needs.",
];

const GUIDANCE: [&str; 5] = [
    "Trust your intuition.",
    "Avoid making hasty decisions.",
    "Seek counsel from a friend.",
    "Take a moment to breathe.",
    "Focus on the present moment.",
];

const FOCUS: [&str; 6] = ["Health", "Career", "Family", "Creativity", "Finance", "Love"];

/// Generate the reading for `rasi` on `date` (any stable date string).
pub fn daily_horoscope(rasi: &str, date: &str) -> DailyHoroscope {
    let mut picker = Picker::from_identity(&format!("{rasi}-{date}"));
    let template = picker.choose(&PREDICTIONS);
    DailyHoroscope {
        rasi_prediction: template.replace("{rasi}", rasi).replace("{date}", date),
        nakshatra_guidance: (*picker.choose(&GUIDANCE)).to_owned(),
        daily_focus: (*picker.choose(&FOCUS)).to_owned(),
    }
}
