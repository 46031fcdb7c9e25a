use std::fmt;

use serde::Serialize;

use crate::date::BirthDate;

/// Western tropical zodiac.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// First (month, day) of each sign, in calendar order. Capricorn starts in
/// December and also covers Jan 1–19.
const SIGN_STARTS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Aquarius),
    (2, 19, ZodiacSign::Pisces),
    (3, 21, ZodiacSign::Aries),
    (4, 20, ZodiacSign::Taurus),
    (5, 21, ZodiacSign::Gemini),
    (6, 21, ZodiacSign::Cancer),
    (7, 23, ZodiacSign::Leo),
    (8, 23, ZodiacSign::Virgo),
    (9, 23, ZodiacSign::Libra),
    (10, 23, ZodiacSign::Scorpio),
    (11, 22, ZodiacSign::Sagittarius),
    (12, 22, ZodiacSign::Capricorn),
];

pub fn zodiac_sign(birth: &BirthDate) -> ZodiacSign {
    let month_day = (birth.month(), birth.day());
    SIGN_STARTS
        .iter()
        .rev()
        .find(|(month, day, _)| month_day >= (*month, *day))
        .map(|(_, _, sign)| *sign)
        .unwrap_or(ZodiacSign::Capricorn)
}

impl ZodiacSign {
    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
