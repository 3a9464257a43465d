use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
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

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            Sign::Aries | Sign::Leo | Sign::Sagittarius => Element::Fire,
            Sign::Taurus | Sign::Virgo | Sign::Capricorn => Element::Earth,
            Sign::Gemini | Sign::Libra | Sign::Aquarius => Element::Air,
            Sign::Cancer | Sign::Scorpio | Sign::Pisces => Element::Water,
        }
    }

    /// Tonic of the piece when this sign holds the Sun.
    pub fn key(&self) -> Note {
        match self {
            Sign::Aries => Note::C,
            Sign::Taurus => Note::D,
            Sign::Gemini => Note::E,
            Sign::Cancer => Note::F,
            Sign::Leo => Note::G,
            Sign::Virgo => Note::A,
            Sign::Libra => Note::B,
            Sign::Scorpio => Note::CSharp,
            Sign::Sagittarius => Note::DSharp,
            Sign::Capricorn => Note::FSharp,
            Sign::Aquarius => Note::GSharp,
            Sign::Pisces => Note::ASharp,
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Sign::Cancer | Sign::Virgo | Sign::Scorpio | Sign::Capricorn | Sign::Pisces => {
                Mode::Minor
            }
            _ => Mode::Major,
        }
    }

    /// Melody mood when this sign holds the Moon.
    pub fn melody_mood(&self) -> &'static str {
        match self {
            Sign::Cancer => "emotional",
            Sign::Scorpio => "intense",
            Sign::Pisces => "dreamy",
            Sign::Leo => "bold",
            Sign::Aries => "energetic",
            Sign::Gemini => "playful",
            Sign::Libra => "harmonious",
            Sign::Aquarius => "ethereal",
            Sign::Sagittarius => "adventurous",
            Sign::Taurus => "grounded",
            Sign::Virgo => "precise",
            Sign::Capricorn => "structured",
        }
    }

    /// Lead instrument when this sign holds Venus.
    pub fn instrument(&self) -> &'static str {
        match self {
            Sign::Taurus => "strings",
            Sign::Libra => "piano",
            Sign::Pisces => "synth",
            Sign::Gemini => "guitar",
            Sign::Cancer => "flute",
            Sign::Virgo => "harp",
            Sign::Capricorn => "cello",
            Sign::Aquarius => "electric guitar",
            Sign::Aries => "drums",
            Sign::Leo => "trumpet",
            Sign::Sagittarius => "saxophone",
            Sign::Scorpio => "bass",
        }
    }

    /// Rhythm intensity when this sign holds Mars.
    pub fn rhythm_intensity(&self) -> &'static str {
        match self {
            Sign::Aries => "aggressive",
            Sign::Taurus => "steady",
            Sign::Gemini => "fast",
            Sign::Cancer => "flowing",
            Sign::Leo => "powerful",
            Sign::Virgo => "precise",
            Sign::Libra => "smooth",
            Sign::Scorpio => "intense",
            Sign::Sagittarius => "energetic",
            Sign::Capricorn => "controlled",
            Sign::Aquarius => "unpredictable",
            Sign::Pisces => "floating",
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSign(pub String);

impl std::fmt::Display for UnknownSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown zodiac sign: {}", self.0)
    }
}

impl std::error::Error for UnknownSign {}

impl FromStr for Sign {
    type Err = UnknownSign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::ALL
            .iter()
            .copied()
            .find(|sign| sign.as_str() == s)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Beats per minute for a piece whose Ascendant falls in this element.
    pub fn tempo(&self) -> u32 {
        match self {
            Element::Fire => 120,
            Element::Water => 80,
            Element::Air => 100,
            Element::Earth => 90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// Semitone offsets from the tonic for the seven scale degrees.
    pub fn intervals(&self) -> [u8; 7] {
        match self {
            Mode::Major => [0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Major => write!(f, "major"),
            Mode::Minor => write!(f, "minor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Note {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C#")]
    CSharp,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D#")]
    DSharp,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "F#")]
    FSharp,
    #[serde(rename = "G")]
    G,
    #[serde(rename = "G#")]
    GSharp,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A#")]
    ASharp,
    #[serde(rename = "B")]
    B,
}

impl Note {
    /// The twelve pitch classes in ascending order from C.
    pub const CHROMATIC: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    fn index(&self) -> usize {
        *self as usize
    }

    pub fn transpose(&self, semitones: u8) -> Note {
        Note::CHROMATIC[(self.index() + semitones as usize) % 12]
    }

    pub fn scale(&self, mode: Mode) -> Vec<Note> {
        mode.intervals()
            .iter()
            .map(|interval| self.transpose(*interval))
            .collect()
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        };
        f.write_str(name)
    }
}
