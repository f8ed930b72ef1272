//! Rashi (zodiac sign) identification from sidereal longitude.
//!
//! Twelve equal signs of 30° starting at Mesha (Aries) 0°. Sign
//! boundaries use floor semantics: exactly 30.0° is already the second
//! sign.

/// The 12 rashis in zodiacal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name, used on the wire.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index, Mesha = 0 through Meena = 11.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-arcminutes-arcseconds breakdown of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor() as u16;
    let rem = (d - degrees as f64) * 60.0;
    let minutes = rem.floor() as u8;
    Dms {
        degrees,
        minutes,
        seconds: (rem - minutes as f64) * 60.0,
    }
}

/// A longitude resolved to its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiPosition {
    pub rashi: Rashi,
    /// Decimal degrees into the sign, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Resolve a sidereal longitude to its rashi.
///
/// Input is normalized first, so negative and ≥360° longitudes are fine.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiPosition {
    let lon = crate::util::normalize_360(sidereal_lon_deg);
    // min(11) guards the floating point edge where lon rounds to 360.0.
    let idx = ((lon / 30.0).floor() as usize).min(11);
    let degrees_in_rashi = lon - idx as f64 * 30.0;
    RashiPosition {
        rashi: ALL_RASHIS[idx],
        degrees_in_rashi,
        dms: deg_to_dms(degrees_in_rashi),
    }
}
