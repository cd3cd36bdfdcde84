use std::fmt;

use serde::{Deserialize, Serialize};

/// Swimming technique code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stroke {
    #[default]
    Crawl,
    Dos,
    Brasse,
    Pap,
    /// Individual medley.
    #[serde(rename = "4n")]
    FourN,
    /// Speciality stroke, the swimmer's own choice.
    Spe,
}

impl Stroke {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stroke::Crawl => "crawl",
            Stroke::Dos => "dos",
            Stroke::Brasse => "brasse",
            Stroke::Pap => "pap",
            Stroke::FourN => "4n",
            Stroke::Spe => "spe",
        }
    }
}

/// Sub-variant of a stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeType {
    /// Full stroke ("nage complète").
    #[default]
    Nc,
    /// Technique drill.
    Educ,
    /// Kick only.
    Jambes,
}

impl StrokeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrokeType::Nc => "nc",
            StrokeType::Educ => "educ",
            StrokeType::Jambes => "jambes",
        }
    }
}

/// Effort level. Unrecognised levels keep their raw text in [`Intensity::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intensity {
    V0,
    #[default]
    V1,
    V2,
    V3,
    Max,
    /// Progressive effort across the repetition.
    Prog,
    Other(String),
}

impl Intensity {
    /// Maps a stored intensity label back onto the scale.
    ///
    /// Blank input yields the default level so the label is never empty.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "" => Intensity::default(),
            "V0" => Intensity::V0,
            "V1" => Intensity::V1,
            "V2" => Intensity::V2,
            "V3" => Intensity::V3,
            "Max" => Intensity::Max,
            "Prog" => Intensity::Prog,
            other => Intensity::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Intensity::V0 => "V0",
            Intensity::V1 => "V1",
            Intensity::V2 => "V2",
            Intensity::V3 => "V3",
            Intensity::Max => "Max",
            Intensity::Prog => "Prog",
            Intensity::Other(raw) => raw,
        }
    }
}

impl From<String> for Intensity {
    fn from(raw: String) -> Self {
        Intensity::parse(&raw)
    }
}

impl From<Intensity> for String {
    fn from(intensity: Intensity) -> Self {
        intensity.as_str().to_string()
    }
}

/// How the `rest` duration of an exercise is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RestType {
    /// Fixed interval between the starts of consecutive repetitions.
    Departure,
    /// Fixed recovery after each repetition.
    #[default]
    Rest,
}

impl RestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestType::Departure => "departure",
            RestType::Rest => "rest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equipment {
    Plaquettes,
    Palmes,
    Tuba,
    Pull,
    Elastique,
}

impl Equipment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Plaquettes => "plaquettes",
            Equipment::Palmes => "palmes",
            Equipment::Tuba => "tuba",
            Equipment::Pull => "pull",
            Equipment::Elastique => "elastique",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Stroke, StrokeType, Intensity, RestType, Equipment);

/// One repeated unit of a block, e.g. `4x50 Cr V2 r:20''`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwimExercise {
    pub repetitions: u32,
    /// Metres per repetition. `None` means the plan left it out, not zero.
    pub distance: Option<u32>,
    pub stroke: Stroke,
    pub stroke_type: StrokeType,
    pub intensity: Intensity,
    /// Seconds. `None` means unspecified.
    pub rest: Option<u32>,
    pub rest_type: RestType,
    pub equipment: Vec<Equipment>,
    pub modalities: String,
}

impl Default for SwimExercise {
    fn default() -> Self {
        Self {
            repetitions: 1,
            distance: None,
            stroke: Stroke::default(),
            stroke_type: StrokeType::default(),
            intensity: Intensity::default(),
            rest: None,
            rest_type: RestType::default(),
            equipment: Vec::new(),
            modalities: String::new(),
        }
    }
}

impl SwimExercise {
    /// Total metres covered by this exercise, when the distance is known.
    pub fn total_distance(&self) -> Option<u32> {
        self.distance
            .map(|distance| distance.saturating_mul(self.repetitions))
    }
}

/// A group of exercises performed together, optionally repeated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwimBlock {
    pub title: String,
    pub repetitions: Option<u32>,
    pub description: String,
    pub modalities: String,
    /// Union of the exercises' equipment, no duplicates.
    pub equipment: Vec<Equipment>,
    pub exercises: Vec<SwimExercise>,
}

impl SwimBlock {
    /// Total metres for the block including its own repetition count.
    ///
    /// Exercises without a distance contribute nothing.
    pub fn total_distance(&self) -> u32 {
        let once: u32 = self
            .exercises
            .iter()
            .filter_map(SwimExercise::total_distance)
            .fold(0, u32::saturating_add);
        once.saturating_mul(self.repetitions.unwrap_or(1))
    }
}
