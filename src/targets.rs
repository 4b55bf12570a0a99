//! Python target extraction from `REQUIRED_USE` strings.
//!
//! Ebuilds declare the interpreters they support through USE_EXPAND flags:
//! `python_targets_pythonM_N` for packages that build against several
//! interpreters at once, `python_single_target_pythonM_N` for packages that
//! pick exactly one. A package is flagged when the applicable family leaves
//! out the baseline interpreter.
use anyhow::{anyhow, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Which family of target flags a `REQUIRED_USE` string is judged by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Multi,
    Single,
}

impl TargetKind {
    /// Families in precedence order; the first whose marker appears wins.
    const PRECEDENCE: [TargetKind; 2] = [TargetKind::Multi, TargetKind::Single];

    /// Substring whose presence selects this family.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Multi => "python_targets_",
            Self::Single => "python_single_target_",
        }
    }

    fn flag_prefix(self) -> &'static str {
        match self {
            Self::Multi => "python_targets_python",
            Self::Single => "python_single_target_python",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::Multi => "TGT",
            Self::Single => "SGL",
        }
    }

    /// Picks the family to evaluate. Only one is ever consulted, so a string
    /// mentioning both is judged by its multi-target flags alone.
    pub fn detect(required_use: &str) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|kind| required_use.contains(kind.marker()))
    }
}

/// Oldest interpreter release a package must still support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Baseline {
    pub major: u32,
    pub minor: u32,
}

impl Baseline {
    pub const DEFAULT: Baseline = Baseline { major: 3, minor: 8 };

    /// Parse `3.8` or the flag spelling `3_8`.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let (major, minor) = trimmed
            .split_once(['.', '_'])
            .ok_or_else(|| anyhow!("baseline must look like MAJOR.MINOR (got {trimmed:?})"))?;
        let major = parse_component(major)
            .ok_or_else(|| anyhow!("invalid baseline major version {major:?}"))?;
        let minor = parse_component(minor)
            .ok_or_else(|| anyhow!("invalid baseline minor version {minor:?}"))?;
        Ok(Self { major, minor })
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Outcome of checking one `REQUIRED_USE` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    NoTargetDeclared,
    SatisfiesBaseline,
    MissingBaseline(TargetKind),
}

/// Report tag for a string whose `kind` targets omit `baseline`, e.g. ` - TGT x3.8`.
pub fn missing_tag(kind: TargetKind, baseline: Baseline) -> String {
    format!(" - {} x{}", kind.code(), baseline)
}

pub fn classify(required_use: &str) -> Classification {
    classify_against(required_use, Baseline::DEFAULT)
}

pub fn classify_against(required_use: &str, baseline: Baseline) -> Classification {
    let Some(kind) = TargetKind::detect(required_use) else {
        return Classification::NoTargetDeclared;
    };
    let targets = extract_targets(required_use, kind);
    if targets.contains(&(baseline.major, baseline.minor)) {
        Classification::SatisfiesBaseline
    } else {
        Classification::MissingBaseline(kind)
    }
}

/// Distinct `(major, minor)` pairs named by `kind` flags in `required_use`.
pub fn extract_targets(required_use: &str, kind: TargetKind) -> BTreeSet<(u32, u32)> {
    tokens(required_use)
        .filter_map(|token| parse_target(token, kind))
        .collect()
}

/// Splits a `REQUIRED_USE` expression into flag words, dropping group and
/// negation punctuation (`||`, `^^`, `??`, `(`, `)`, `!`, trailing `?`).
fn tokens(required_use: &str) -> impl Iterator<Item = &str> {
    required_use
        .split(|ch: char| ch.is_whitespace() || matches!(ch, '(' | ')'))
        .map(|word| word.trim_start_matches('!').trim_end_matches('?'))
        .filter(|word| !word.is_empty())
}

fn parse_target(token: &str, kind: TargetKind) -> Option<(u32, u32)> {
    let version = token.strip_prefix(kind.flag_prefix())?;
    let (major, minor) = version.split_once('_')?;
    Some((parse_component(major)?, parse_component(minor)?))
}

fn parse_component(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
