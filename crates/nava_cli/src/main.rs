use clap::{Parser, Subcommand};
use nava_chart::{ChartConfig, GeoLocation, compute_chart};
use nava_ephem::AnalyticEphemeris;
use nava_time::{CivilMoment, UtcOffset};
use nava_vedic::{Ayanamsha, HouseSystem, rashi_from_longitude};
use nava_text::{analyze_chart, analyze_without_chart, daily_horoscope, match_couple, parse_reading};

#[derive(Parser)]
#[command(name = "nava", about = "Sidereal chart and reading CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a natal chart as JSON
    Chart {
        /// Birth date (YYYY-MM-DD, local civil)
        #[arg(long)]
        dob: String,
        /// Birth time (HH:MM, local civil)
        #[arg(long)]
        time: String,
        /// Civil-to-UTC offset, e.g. +5:30
        #[arg(long)]
        offset: String,
        /// Latitude in degrees (north positive)
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees (east positive)
        #[arg(long)]
        lon: f64,
        /// Ayanamsha system (lahiri, kp, raman, fagan-bradley, yukteshwar)
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
        /// House system (placidus, whole-sign, equal)
        #[arg(long, default_value = "placidus")]
        houses: String,
    },
    /// Daily reading for a sign, as JSON
    Predict {
        /// Sign name, e.g. Scorpio
        #[arg(long)]
        rasi: String,
        /// Date the reading is for (any stable string, e.g. 2024-01-15)
        #[arg(long)]
        date: String,
    },
    /// Narrative birth-chart analysis as JSON
    Analyze {
        #[arg(long)]
        dob: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        offset: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lon: f64,
    },
    /// Compatibility match between two people, as JSON
    Match {
        #[arg(long)]
        name1: String,
        /// First person's moon sign
        #[arg(long)]
        rasi1: String,
        #[arg(long)]
        name2: String,
        /// Second person's moon sign
        #[arg(long)]
        rasi2: String,
    },
    /// Rashi from a sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Julian Day (UTC) for a civil moment
    Jd {
        #[arg(long)]
        dob: String,
        #[arg(long)]
        time: String,
        #[arg(long)]
        offset: String,
    },
    /// Parse an upstream PREDICTION|GUIDANCE|FOCUS reply
    ParseReading {
        /// Raw reply text
        text: String,
    },
}

fn require_offset(s: &str) -> UtcOffset {
    match s.parse() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid offset: {e}");
            std::process::exit(1);
        }
    }
}

fn require_moment(dob: &str, time: &str, offset: &str) -> CivilMoment {
    match CivilMoment::parse(dob, time, require_offset(offset)) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Invalid birth moment: {e}");
            std::process::exit(1);
        }
    }
}

fn require_location(lat: f64, lon: f64) -> GeoLocation {
    match GeoLocation::new(lat, lon) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn require_ayanamsha(s: &str) -> Ayanamsha {
    match s.to_ascii_lowercase().as_str() {
        "lahiri" => Ayanamsha::Lahiri,
        "kp" => Ayanamsha::KP,
        "raman" => Ayanamsha::Raman,
        "fagan-bradley" => Ayanamsha::FaganBradley,
        "yukteshwar" => Ayanamsha::Yukteshwar,
        _ => {
            eprintln!("Invalid ayanamsha: {s}");
            eprintln!("Valid: lahiri, kp, raman, fagan-bradley, yukteshwar");
            std::process::exit(1);
        }
    }
}

fn require_house_system(s: &str) -> HouseSystem {
    match s.to_ascii_lowercase().as_str() {
        "placidus" => HouseSystem::Placidus,
        "whole-sign" => HouseSystem::WholeSign,
        "equal" => HouseSystem::Equal,
        _ => {
            eprintln!("Invalid house system: {s}");
            eprintln!("Valid: placidus, whole-sign, equal");
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            dob,
            time,
            offset,
            lat,
            lon,
            ayanamsha,
            houses,
        } => {
            let moment = require_moment(&dob, &time, &offset);
            let location = require_location(lat, lon);
            let config = ChartConfig {
                ayanamsha: require_ayanamsha(&ayanamsha),
                house_system: require_house_system(&houses),
            };
            match compute_chart(&AnalyticEphemeris::new(), &moment, location, config) {
                Ok(chart) => print_json(&chart),
                Err(e) => {
                    eprintln!("Chart computation failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Predict { rasi, date } => {
            print_json(&daily_horoscope(&rasi, &date));
        }

        Commands::Analyze {
            dob,
            time,
            offset,
            lat,
            lon,
        } => {
            let moment = require_moment(&dob, &time, &offset);
            let location = require_location(lat, lon);
            // An unavailable backend degrades to a date-based reading;
            // bad input still fails loudly above.
            let analysis =
                match compute_chart(&AnalyticEphemeris::new(), &moment, location, ChartConfig::default())
                {
                    Ok(chart) => analyze_chart(&chart),
                    Err(e) if e.is_invalid_input() => {
                        eprintln!("Analysis failed: {e}");
                        std::process::exit(1);
                    }
                    Err(_) => analyze_without_chart(&dob, moment.month, moment.day),
                };
            print_json(&analysis);
        }

        Commands::Match {
            name1,
            rasi1,
            name2,
            rasi2,
        } => {
            print_json(&match_couple(&name1, &rasi1, &name2, &rasi2));
        }

        Commands::Rashi { lon } => {
            let pos = rashi_from_longitude(lon);
            let dms = pos.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                pos.rashi.name(),
                pos.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                pos.degrees_in_rashi
            );
        }

        Commands::Jd { dob, time, offset } => {
            let moment = require_moment(&dob, &time, &offset);
            println!("JD (UTC): {:.7}", moment.julian_day_utc());
            println!("UTC: {}", moment.to_utc());
        }

        Commands::ParseReading { text } => {
            print_json(&parse_reading(&text));
        }
    }
}
