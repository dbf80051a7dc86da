use serde::de;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Paper size of the rendered document. Reports default to US Letter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PaperSize {
    A4,
    #[default]
    Letter,
    Legal,
    /// Explicit dimensions in points.
    Custom { width: f32, height: f32 },
}

impl PaperSize {
    /// Portrait dimensions in points, as `(width, height)`.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Dimensions in points once `orientation` is applied.
    pub fn oriented_dimensions_pt(&self, orientation: Orientation) -> (f32, f32) {
        let (width, height) = self.dimensions_pt();
        match orientation {
            Orientation::Portrait => (width, height),
            Orientation::Landscape => (height, width),
        }
    }
}

impl FromStr for PaperSize {
    type Err = String;

    /// Parse a paper size name (e.g., "a4", "Letter", "LEGAL").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PaperSize::A4),
            "letter" => Ok(PaperSize::Letter),
            "legal" => Ok(PaperSize::Legal),
            _ => Err(format!("Unknown paper size: {}", s)),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaperSize::A4 => f.write_str("a4"),
            PaperSize::Letter => f.write_str("letter"),
            PaperSize::Legal => f.write_str("legal"),
            PaperSize::Custom { width, height } => write!(f, "{}x{}pt", width, height),
        }
    }
}

impl Serialize for PaperSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PaperSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
            named => serializer.serialize_str(&named.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for PaperSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PaperSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PaperSizeDef::deserialize(deserializer)? {
            PaperSizeDef::Str(s) => s.parse().map_err(de::Error::custom),
            PaperSizeDef::Map { width, height } => Ok(PaperSize::Custom { width, height }),
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => f.write_str("portrait"),
            Orientation::Landscape => f.write_str("landscape"),
        }
    }
}
