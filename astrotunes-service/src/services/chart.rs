//! Chart-driven music mapping used by `POST /api/astro`.
//!
//! Five placements drive the piece: the Sun picks key and mode, the
//! Ascendant's element picks the tempo, the Moon the melody mood, Venus the
//! lead instrument and Mars the rhythm. Unrecognised sign names fall back to
//! neutral defaults instead of failing.

use crate::dtos::ChartPlanet;
use crate::models::{ChartMusic, Element, Mode, Note, Sign};
use thiserror::Error;

pub const REQUIRED_PLANETS: [&str; 5] = ["Sun", "Moon", "Ascendant", "Venus", "Mars"];

const DURATION_SECONDS: u32 = 180;
const TIME_SIGNATURE: &str = "4/4";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    #[error("Missing required planets: {}", .0.join(", "))]
    MissingPlanets(Vec<String>),
}

/// Sign held by the first record for `name`, `None` if the planet is absent.
/// The inner `Option` is `None` when the sign name is not recognised.
fn placement(planets: &[ChartPlanet], name: &str) -> Option<Option<Sign>> {
    planets
        .iter()
        .find(|p| p.planet.en == name)
        .map(|p| p.zodiac_sign.name.en.parse::<Sign>().ok())
}

pub fn compose_from_chart(planets: &[ChartPlanet]) -> Result<ChartMusic, ChartError> {
    let missing: Vec<String> = REQUIRED_PLANETS
        .iter()
        .filter(|name| placement(planets, name).is_none())
        .map(|name| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ChartError::MissingPlanets(missing));
    }

    let sign_of = |name: &str| placement(planets, name).flatten();
    let sun = sign_of("Sun");
    let moon = sign_of("Moon");
    let ascendant = sign_of("Ascendant");
    let venus = sign_of("Venus");
    let mars = sign_of("Mars");

    let key = sun.map(|s| s.key()).unwrap_or(Note::C);
    let mode = sun.map(|s| s.mode()).unwrap_or(Mode::Major);
    let tempo = ascendant.map(|s| s.element()).unwrap_or(Element::Air).tempo();

    Ok(ChartMusic {
        key,
        mode,
        tempo,
        melody_mood: moon.map(|s| s.melody_mood()).unwrap_or("balanced").to_string(),
        instrument: venus.map(|s| s.instrument()).unwrap_or("piano").to_string(),
        rhythm_intensity: mars
            .map(|s| s.rhythm_intensity())
            .unwrap_or("moderate")
            .to_string(),
        duration: DURATION_SECONDS,
        time_signature: TIME_SIGNATURE.to_string(),
        scale: key.scale(mode),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::{LocalizedName, ZodiacPlacement};

    fn planet(name: &str, sign: &str) -> ChartPlanet {
        ChartPlanet {
            planet: LocalizedName { en: name.to_string() },
            full_degree: None,
            norm_degree: None,
            is_retro: None,
            zodiac_sign: ZodiacPlacement {
                number: None,
                name: LocalizedName { en: sign.to_string() },
            },
        }
    }

    fn chart(sun: &str, moon: &str, asc: &str, venus: &str, mars: &str) -> Vec<ChartPlanet> {
        vec![
            planet("Sun", sun),
            planet("Moon", moon),
            planet("Ascendant", asc),
            planet("Venus", venus),
            planet("Mars", mars),
        ]
    }

    #[test]
    fn test_maps_each_placement() {
        let music = compose_from_chart(&chart("Leo", "Cancer", "Aries", "Libra", "Scorpio")).unwrap();

        assert_eq!(music.key, Note::G);
        assert_eq!(music.mode, Mode::Major);
        assert_eq!(music.tempo, 120);
        assert_eq!(music.melody_mood, "emotional");
        assert_eq!(music.instrument, "piano");
        assert_eq!(music.rhythm_intensity, "intense");
        assert_eq!(music.duration, 180);
        assert_eq!(music.time_signature, "4/4");
        assert_eq!(
            music.scale,
            [Note::G, Note::A, Note::B, Note::C, Note::D, Note::E, Note::FSharp]
        );
    }

    #[test]
    fn test_minor_sun_and_water_ascendant() {
        let music =
            compose_from_chart(&chart("Scorpio", "Pisces", "Cancer", "Aquarius", "Gemini")).unwrap();

        assert_eq!(music.key, Note::CSharp);
        assert_eq!(music.mode, Mode::Minor);
        assert_eq!(music.tempo, 80);
        assert_eq!(music.melody_mood, "dreamy");
        assert_eq!(music.instrument, "electric guitar");
        assert_eq!(music.rhythm_intensity, "fast");
    }

    #[test]
    fn test_unknown_signs_fall_back_to_defaults() {
        let music = compose_from_chart(&chart("?", "?", "?", "?", "?")).unwrap();

        assert_eq!(music.key, Note::C);
        assert_eq!(music.mode, Mode::Major);
        assert_eq!(music.tempo, 100);
        assert_eq!(music.melody_mood, "balanced");
        assert_eq!(music.instrument, "piano");
        assert_eq!(music.rhythm_intensity, "moderate");
    }

    #[test]
    fn test_first_record_for_a_planet_wins() {
        let mut planets = chart("Leo", "Cancer", "Aries", "Libra", "Scorpio");
        planets.push(planet("Sun", "Pisces"));

        let music = compose_from_chart(&planets).unwrap();
        assert_eq!(music.key, Note::G);
    }

    #[test]
    fn test_missing_planets_are_reported_in_order() {
        let planets = vec![planet("Sun", "Leo"), planet("Ascendant", "Aries")];

        let err = compose_from_chart(&planets).unwrap_err();
        assert_eq!(
            err,
            ChartError::MissingPlanets(vec![
                "Moon".to_string(),
                "Venus".to_string(),
                "Mars".to_string()
            ])
        );
        assert_eq!(err.to_string(), "Missing required planets: Moon, Venus, Mars");
    }
}
