//! Narrative birth-chart analysis.
//!
//! Turns a computed chart into the reading shape the frontend renders:
//! ascendant and moon-sign paragraphs, per-planet significance lines,
//! strength/challenge lists, and life-area predictions. All prose is
//! drawn deterministically from fixed pools, seeded by the chart
//! itself, so the same birth data always reads the same.
//!
//! When no chart is available the analysis degrades to a sun-sign
//! reading derived from the calendar date alone; the output shape stays
//! complete either way.

use serde::{Deserialize, Serialize};

use nava_chart::Chart;

use crate::seed::Picker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetDetail {
    pub planet: String,
    pub sign: String,
    /// Ordinal house label, e.g. "7th".
    pub house: String,
    pub significance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePredictions {
    pub career: String,
    pub relationships: String,
    pub health: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartAnalysis {
    pub ascendant: String,
    pub moon_sign: String,
    pub planetary_details: Vec<PlanetDetail>,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub life_predictions: LifePredictions,
}

/// What each body speaks to in a reading.
const PLANET_THEMES: [(&str, &str); 12] = [
    ("Sun", "vitality and sense of self"),
    ("Moon", "emotions and instinct"),
    ("Mercury", "intellect and communication"),
    ("Venus", "affection and aesthetics"),
    ("Mars", "drive and courage"),
    ("Jupiter", "wisdom and expansion"),
    ("Saturn", "discipline and endurance"),
    ("Uranus", "originality and upheaval"),
    ("Neptune", "imagination and dissolution"),
    ("Pluto", "transformation and depth"),
    ("Rahu", "worldly ambition and obsession"),
    ("Ketu", "detachment and past mastery"),
];

/// Traditional house significations, houses 1 through 12.
const HOUSE_THEMES: [&str; 12] = [
    "personality and outlook",
    "wealth and speech",
    "effort and siblings",
    "home and inner peace",
    "creativity and learning",
    "service and health",
    "partnership and marriage",
    "longevity and change",
    "fortune and belief",
    "career and standing",
    "gains and friendships",
    "loss and liberation",
];

const STRENGTHS: [&str; 8] = [
    "A natural resilience that carries you through setbacks.",
    "Clear intuition about people and their motives.",
    "The discipline to finish what others abandon.",
    "An easy warmth that draws allies to your side.",
    "Sharp practical judgment in financial matters.",
    "Creative vision that finds unusual solutions.",
    "The courage to speak plainly when it matters.",
    "Deep patience with long, slow undertakings.",
];

const CHALLENGES: [&str; 8] = [
    "A tendency to carry burdens alone rather than ask for help.",
    "Restlessness when routines stay unchanged too long.",
    "Difficulty letting go of past grievances.",
    "Impatience with slower minds around you.",
    "Overcommitment that scatters your energy.",
    "Doubting your own achievements despite evidence.",
    "Guarding feelings so closely that others misread you.",
    "Putting ambition ahead of rest until the body objects.",
];

const CAREER_LINES: [&str; 5] = [
    "Professional recognition builds steadily; the groundwork laid now pays off within the year.",
    "A leadership opening appears through someone senior who has been watching your work.",
    "Your career favors depth over breadth; mastery of one craft outshines many dabblings.",
    "An unconventional path proves more rewarding than the obvious promotion.",
    "Collaboration is the engine of advancement; solo effort plateaus where partnership climbs.",
];

const RELATIONSHIP_LINES: [&str; 5] = [
    "Bonds deepen through honest conversation; say the difficult thing kindly.",
    "An old connection resurfaces with new significance.",
    "Loyalty given is returned manyfold; invest in the relationships that steady you.",
    "Family matters ask for patience this season, and reward it.",
    "A partnership thrives when both sides keep their independence intact.",
];

const HEALTH_LINES: [&str; 5] = [
    "Energy follows rhythm; regular sleep does more than any remedy.",
    "Attend to small signals early and larger troubles never arrive.",
    "Movement is your medicine; stillness breeds the aches you feel.",
    "The mind and stomach are linked; ease one and the other settles.",
    "Vitality runs strong, but it is a reservoir, not a spring. Budget it.",
];

fn ordinal(house: u8) -> String {
    let suffix = match house {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{house}{suffix}")
}

fn theme_for(planet: &str) -> &'static str {
    PLANET_THEMES
        .iter()
        .find(|(name, _)| *name == planet)
        .map(|(_, theme)| *theme)
        .unwrap_or("influence")
}

/// Pick `count` distinct entries from a pool.
fn pick_distinct(picker: &mut Picker, pool: &[&str], count: usize) -> Vec<String> {
    let mut indices: Vec<usize> = (0..pool.len()).collect();
    let mut out = Vec::with_capacity(count);
    for _ in 0..count.min(pool.len()) {
        let i = picker.below(indices.len());
        out.push(pool[indices.swap_remove(i)].to_owned());
    }
    out
}

/// Build the full reading from a computed chart.
pub fn analyze_chart(chart: &Chart) -> ChartAnalysis {
    let moon_sign = chart.moon_sign().unwrap_or("Unknown").to_owned();
    let mut picker = Picker::from_identity(&format!(
        "{}-{}-{}",
        chart.ascendant_sign, moon_sign, chart.meta.julian_day
    ));

    let planetary_details = chart
        .planets
        .iter()
        .map(|p| PlanetDetail {
            planet: p.name.clone(),
            sign: p.sign.clone(),
            house: ordinal(p.house),
            significance: format!(
                "{} shapes {} here, colouring your {}.",
                p.name,
                theme_for(&p.name),
                HOUSE_THEMES[(p.house - 1) as usize]
            ),
        })
        .collect();

    ChartAnalysis {
        ascendant: format!(
            "{} rises in your chart, setting a tone of {} for how the world first meets you.",
            chart.ascendant_sign, HOUSE_THEMES[0]
        ),
        moon_sign: format!(
            "Your Moon rests in {}, anchoring {} to that sign's temperament.",
            moon_sign,
            theme_for("Moon")
        ),
        planetary_details,
        strengths: pick_distinct(&mut picker, &STRENGTHS, 3),
        challenges: pick_distinct(&mut picker, &CHALLENGES, 3),
        life_predictions: LifePredictions {
            career: (*picker.choose(&CAREER_LINES)).to_owned(),
            relationships: (*picker.choose(&RELATIONSHIP_LINES)).to_owned(),
            health: (*picker.choose(&HEALTH_LINES)).to_owned(),
        },
    }
}

/// Western sun sign from a calendar date, for the degraded path.
pub fn sun_sign_for_date(month: u32, day: u32) -> &'static str {
    match (month, day) {
        (3, 21..) | (4, ..=19) => "Aries",
        (4, _) | (5, ..=20) => "Taurus",
        (5, _) | (6, ..=20) => "Gemini",
        (6, _) | (7, ..=22) => "Cancer",
        (7, _) | (8, ..=22) => "Leo",
        (8, _) | (9, ..=22) => "Virgo",
        (9, _) | (10, ..=22) => "Libra",
        (10, _) | (11, ..=21) => "Scorpio",
        (11, _) | (12, ..=21) => "Sagittarius",
        (12, _) | (1, ..=19) => "Capricorn",
        (1, _) | (2, ..=18) => "Aquarius",
        _ => "Pisces",
    }
}

/// Degraded reading when no chart could be computed: sun sign from the
/// birth date stands in for the whole chart.
pub fn analyze_without_chart(date: &str, month: u32, day: u32) -> ChartAnalysis {
    let sign = sun_sign_for_date(month, day);
    let mut picker = Picker::from_identity(&format!("{sign}-{date}"));

    ChartAnalysis {
        ascendant: format!(
            "Exact rising sign needs a computed chart; your {sign} Sun carries the reading today."
        ),
        moon_sign: format!("The Moon's sign is unavailable; {sign} themes lead instead."),
        planetary_details: vec![PlanetDetail {
            planet: "Sun".to_owned(),
            sign: sign.to_owned(),
            house: ordinal(1),
            significance: format!("Sun shapes {} here.", theme_for("Sun")),
        }],
        strengths: pick_distinct(&mut picker, &STRENGTHS, 3),
        challenges: pick_distinct(&mut picker, &CHALLENGES, 3),
        life_predictions: LifePredictions {
            career: (*picker.choose(&CAREER_LINES)).to_owned(),
            relationships: (*picker.choose(&RELATIONSHIP_LINES)).to_owned(),
            health: (*picker.choose(&HEALTH_LINES)).to_owned(),
        },
    }
}
