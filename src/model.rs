//! Decoded eix collection records.
//!
//! The shapes mirror the eix protobuf schema. Field names are accepted both in
//! snake_case and in the protobuf JSON mapping's lowerCamelCase so exports from
//! either convention load without translation. Fields and enum values this
//! crate does not interpret are carried through untouched so a dump reproduces
//! the whole record.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Root of a decoded database: every category in eix order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Collection {
    #[serde(default)]
    pub category: Vec<Category>,
    /// Schema fields not interpreted here, kept for dumps.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Category {
    /// Category name, e.g. `dev-lang`.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub package: Vec<Package>,
    /// Schema fields not interpreted here, kept for dumps.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Package {
    #[serde(default)]
    pub name: String,
    /// Versions in ascending order as emitted by eix.
    #[serde(default)]
    pub version: Vec<Version>,
    /// Schema fields not interpreted here, kept for dumps.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Version {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "requiredUse")]
    pub required_use: String,
    #[serde(
        default,
        alias = "systemKeyFlags",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_key_flags: Option<KeyFlags>,
    #[serde(
        default,
        alias = "localKeyFlags",
        skip_serializing_if = "Option::is_none"
    )]
    pub local_key_flags: Option<KeyFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,
    /// Installation record; eix only emits it for installed versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed: Option<Value>,
    /// Schema fields not interpreted here, kept for dumps.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Version {
    /// Name of the overlay this version comes from, if it is not the main tree.
    pub fn overlay(&self) -> Option<&str> {
        self.repository
            .as_ref()
            .map(|repo| repo.repository.as_str())
            .filter(|name| !name.is_empty())
    }

    pub fn is_installed(&self) -> bool {
        match &self.installed {
            None => false,
            Some(value) => !matches!(value, Value::Bool(false)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Repository {
    #[serde(default)]
    pub repository: String,
    /// Schema fields not interpreted here, kept for dumps.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyFlags {
    #[serde(default, alias = "keyFlag")]
    pub key_flag: Vec<KeyFlag>,
    /// Schema fields not interpreted here, kept for dumps.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KeyFlags {
    pub fn contains(&self, flag: &KeyFlag) -> bool {
        self.key_flag.contains(flag)
    }
}

impl fmt::Display for KeyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.key_flag.iter().map(|flag| flag.label()).collect();
        f.write_str(&labels.join(", "))
    }
}

/// Keyword classification eix attaches to a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFlag {
    Unknown,
    Stable,
    ArchStable,
    ArchUnstable,
    AlienStable,
    AlienUnstable,
    MinusKeyword,
    MinusUnstable,
    MinusAsterisk,
    /// A wire number this build does not know about.
    Other(i64),
    /// An enum name this build does not know about.
    OtherName(String),
}

impl KeyFlag {
    pub fn from_number(raw: i64) -> Self {
        match raw {
            0 => Self::Unknown,
            1 => Self::Stable,
            2 => Self::ArchStable,
            3 => Self::ArchUnstable,
            4 => Self::AlienStable,
            5 => Self::AlienUnstable,
            6 => Self::MinusKeyword,
            7 => Self::MinusUnstable,
            8 => Self::MinusAsterisk,
            other => Self::Other(other),
        }
    }

    pub fn from_name(raw: &str) -> Self {
        match raw {
            "UNKNOWN" => Self::Unknown,
            "STABLE" => Self::Stable,
            "ARCHSTABLE" => Self::ArchStable,
            "ARCHUNSTABLE" => Self::ArchUnstable,
            "ALIENSTABLE" => Self::AlienStable,
            "ALIENUNSTABLE" => Self::AlienUnstable,
            "MINUSKEYWORD" => Self::MinusKeyword,
            "MINUSUNSTABLE" => Self::MinusUnstable,
            "MINUSASTERISK" => Self::MinusAsterisk,
            other => Self::OtherName(other.to_string()),
        }
    }

    /// Schema enum name, as used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Stable => "STABLE",
            Self::ArchStable => "ARCHSTABLE",
            Self::ArchUnstable => "ARCHUNSTABLE",
            Self::AlienStable => "ALIENSTABLE",
            Self::AlienUnstable => "ALIENUNSTABLE",
            Self::MinusKeyword => "MINUSKEYWORD",
            Self::MinusUnstable => "MINUSUNSTABLE",
            Self::MinusAsterisk => "MINUSASTERISK",
            Self::Other(_) => "OTHER",
            Self::OtherName(name) => name.as_str(),
        }
    }

    /// Human label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Stable => "STABLE",
            Self::ArchStable => "ARCH-STABLE",
            Self::ArchUnstable => "ARCH-UNSTABLE",
            Self::AlienStable => "ALIEN-STABLE",
            Self::AlienUnstable => "ALIEN-UNSTABLE",
            Self::MinusKeyword => "MINUS-KEYWORD",
            Self::MinusUnstable => "MINUS-UNSTABLE",
            Self::MinusAsterisk => "MINUS-ASTERISK",
            Self::Other(_) | Self::OtherName(_) => "(Undefined Key Flag)",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnum {
    Number(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for KeyFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawEnum::deserialize(deserializer)? {
            RawEnum::Number(raw) => Self::from_number(raw),
            RawEnum::Name(raw) => Self::from_name(&raw),
        })
    }
}

impl Serialize for KeyFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Other(raw) => serializer.serialize_i64(*raw),
            known => serializer.serialize_str(known.as_str()),
        }
    }
}
