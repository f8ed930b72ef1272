//! Deterministic narrative generation for readings, analyses, and
//! matches.
//!
//! Every generator here is a pure function of its inputs. Seeds come
//! from [`seed::fnv1a_64`] over an identity string, streams from
//! SplitMix64, so output is stable across runs, platforms, and
//! releases. There is no network dependency and there are no partial
//! outputs: when upstream data (a chart) is missing, each generator
//! degrades to a date-based reading of the same shape.

pub mod analysis;
pub mod horoscope;
pub mod matching;
pub mod parse;
pub mod seed;

pub use analysis::{ChartAnalysis, LifePredictions, PlanetDetail, analyze_chart, analyze_without_chart, sun_sign_for_date};
pub use horoscope::{DailyHoroscope, daily_horoscope};
pub use matching::{MatchResult, match_couple};
pub use parse::parse_reading;
pub use seed::Picker;
