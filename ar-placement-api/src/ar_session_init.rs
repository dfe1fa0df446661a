use std::fmt;
use std::str::FromStr;

/// Session capabilities an application can ask the platform for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde-serialization", serde(rename_all = "kebab-case"))]
pub enum ArFeature {
    // Ray casts against detected real-world surfaces.
    HitTest,

    // A reference space with its origin on the detected floor.
    LocalFloor,

    // HTML/UI overlay composited over the camera feed.
    DomOverlay,
}

impl ArFeature {
    pub fn as_str(&self) -> &'static str {
        match *self {
            ArFeature::HitTest => "hit-test",
            ArFeature::LocalFloor => "local-floor",
            ArFeature::DomOverlay => "dom-overlay",
        }
    }
}

impl fmt::Display for ArFeature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArFeature {
    type Err = String;

    fn from_str(s: &str) -> Result<ArFeature, String> {
        match s {
            "hit-test" => Ok(ArFeature::HitTest),
            "local-floor" => Ok(ArFeature::LocalFloor),
            "dom-overlay" => Ok(ArFeature::DomOverlay),
            other => Err(format!("unknown AR feature `{}`", other)),
        }
    }
}

/// Parameters of an immersive AR session request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ArSessionInit {
    // The request fails if any of these is unavailable.
    pub required_features: Vec<ArFeature>,

    // Enabled when the platform has them, ignored otherwise.
    pub optional_features: Vec<ArFeature>,
}

impl Default for ArSessionInit {
    fn default() -> ArSessionInit {
        ArSessionInit {
            required_features: vec![ArFeature::HitTest, ArFeature::LocalFloor],
            optional_features: vec![ArFeature::DomOverlay],
        }
    }
}

impl ArSessionInit {
    pub fn requires(&self, feature: ArFeature) -> bool {
        self.required_features.contains(&feature)
    }
}

/// A running session, as handed back by the platform.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ArSessionHandle {
    pub session_id: u32,
    pub enabled_features: Vec<ArFeature>,
}

impl ArSessionHandle {
    pub fn has_feature(&self, feature: ArFeature) -> bool {
        self.enabled_features.contains(&feature)
    }
}
