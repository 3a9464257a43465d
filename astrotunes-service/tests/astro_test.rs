mod common;

use axum::http::StatusCode;
use common::{post_json, router};
use serde_json::{json, Value};

fn planet(name: &str, sign: &str) -> Value {
    json!({
        "planet": { "en": name },
        "fullDegree": 123.45,
        "normDegree": 3.45,
        "isRetro": "false",
        "zodiac_sign": { "number": 1, "name": { "en": sign } }
    })
}

fn chart(planets: Vec<Value>) -> String {
    json!({ "output": planets }).to_string()
}

#[tokio::test]
async fn astro_maps_chart_to_music() {
    let body = chart(vec![
        planet("Sun", "Leo"),
        planet("Moon", "Cancer"),
        planet("Ascendant", "Aries"),
        planet("Venus", "Libra"),
        planet("Mars", "Scorpio"),
        planet("Jupiter", "Pisces"),
    ]);

    let (status, response) = post_json(router(), "/api/astro", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        response,
        json!({
            "success": true,
            "music": {
                "key": "G",
                "mode": "major",
                "tempo": 120,
                "melodyMood": "emotional",
                "instrument": "piano",
                "rhythmIntensity": "intense",
                "duration": 180,
                "timeSignature": "4/4",
                "scale": ["G", "A", "B", "C", "D", "E", "F#"]
            }
        })
    );
}

#[tokio::test]
async fn astro_minor_key_uses_minor_scale() {
    let body = chart(vec![
        planet("Sun", "Capricorn"),
        planet("Moon", "Virgo"),
        planet("Ascendant", "Taurus"),
        planet("Venus", "Sagittarius"),
        planet("Mars", "Pisces"),
    ]);

    let (status, response) = post_json(router(), "/api/astro", &body).await;

    assert_eq!(status, StatusCode::OK);
    let music = &response["music"];
    assert_eq!(music["key"], "F#");
    assert_eq!(music["mode"], "minor");
    assert_eq!(music["tempo"], 90);
    assert_eq!(music["melodyMood"], "precise");
    assert_eq!(music["instrument"], "saxophone");
    assert_eq!(music["rhythmIntensity"], "floating");
    assert_eq!(
        music["scale"],
        json!(["F#", "G#", "A", "B", "C#", "D", "E"])
    );
}

#[tokio::test]
async fn astro_missing_planet_is_a_server_error() {
    let body = chart(vec![
        planet("Sun", "Leo"),
        planet("Ascendant", "Aries"),
        planet("Venus", "Libra"),
        planet("Mars", "Scorpio"),
    ]);

    let (status, response) = post_json(router(), "/api/astro", &body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response,
        json!({
            "detail": "Failed to process astrological data: Missing required planets: Moon"
        })
    );
}

#[tokio::test]
async fn astro_rejects_empty_chart() {
    let (status, response) = post_json(router(), "/api/astro", r#"{"output": []}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response["error"], "Validation error");
}

#[tokio::test]
async fn astro_rejects_missing_output() {
    let (status, _) = post_json(router(), "/api/astro", r#"{"planets": []}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn astro_rejects_records_without_sign() {
    let body = json!({ "output": [{ "planet": { "en": "Sun" } }] }).to_string();

    let (status, _) = post_json(router(), "/api/astro", &body).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}
