use serde::{Deserialize, Serialize};

/// Marker color tag.
///
/// Serialized as the plain string (`"red"`, `"blue"`, `"yellow"`). Anything
/// else round-trips through `Other` unchanged — foreign tags are preserved
/// in the data and only approximated at render time (they draw with the red
/// fill), never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorTag {
    Red,
    Blue,
    Yellow,
    Other(String),
}

impl ColorTag {
    pub fn as_str(&self) -> &str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Blue => "blue",
            ColorTag::Yellow => "yellow",
            ColorTag::Other(s) => s,
        }
    }
}

impl From<String> for ColorTag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "red" => ColorTag::Red,
            "blue" => ColorTag::Blue,
            "yellow" => ColorTag::Yellow,
            _ => ColorTag::Other(s),
        }
    }
}

impl From<ColorTag> for String {
    fn from(tag: ColorTag) -> Self {
        match tag {
            ColorTag::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}
