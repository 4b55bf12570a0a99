//! Category/package name filter for narrowing a report.
//!
//! A pattern is a run of name characters with an optional leading `^` and
//! trailing `$` anchor, matched case-insensitively against `category/package`.
//! Name characters are letters, digits, `_`, `-`, `+`, `.` and `/`. Patterns
//! never contain `--`. A blank pattern matches every package.
use anyhow::{anyhow, Context, Result};
use regex::Regex;

#[derive(Clone, Debug)]
pub struct SearchFilter {
    pattern: String,
    matcher: Regex,
}

impl SearchFilter {
    pub fn parse(raw: &str) -> Result<Self> {
        let pattern = raw.trim();
        let shape = Regex::new(r"^(\^?[\w\-+/.]+\$?)?$").expect("regex for search shape");
        if pattern.contains("--") || !shape.is_match(pattern) {
            return Err(anyhow!(
                "search pattern may only contain letters, digits, '_', '-', '+', '.', '/' \
                 with optional '^' and '$' anchors (got {pattern:?})"
            ));
        }
        let anchored_start = pattern.starts_with('^');
        let anchored_end = pattern.ends_with('$');
        let body = pattern.trim_start_matches('^').trim_end_matches('$');
        let mut source = String::from("(?i)");
        if anchored_start {
            source.push('^');
        }
        source.push_str(&regex::escape(body));
        if anchored_end {
            source.push('$');
        }
        let matcher =
            Regex::new(&source).with_context(|| format!("compile search pattern {pattern:?}"))?;
        Ok(Self {
            pattern: pattern.to_string(),
            matcher,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, category: &str, package: &str) -> bool {
        self.matcher.is_match(&format!("{category}/{package}"))
    }
}
