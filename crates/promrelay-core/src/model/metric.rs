//! A single named/tagged/typed metric reading.

use std::collections::BTreeMap;
use std::fmt::Write;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Character class shared by names, types, and tag keys/values: ASCII word
/// characters, hyphen, slash. No spaces, quotes, or braces, so rendered
/// exposition lines cannot be injected into. Spelled out as an explicit
/// ASCII class: the deployed service's `\w` is ASCII-only, while the regex
/// crate's `\w` is Unicode.
static TEXT_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9A-Za-z_\-/]+$"));

/// Value pattern with the deployed service's exact match semantics: ASCII
/// digits, optionally followed by any single character and a literal `+`.
/// Note this rejects ordinary decimals such as "1.5"; widening it is a
/// product decision, not a cleanup.
static VALUE_PATTERN: Lazy<Regex> = Lazy::new(|| compile(r"^[0-9]+(.\+)?$"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    // Fixed literals, checked by the pattern tests; cannot fail at runtime.
    Regex::new(pattern).expect("invalid pattern literal")
}

/// One metric reading. Tags are held in a sorted map so rendering and
/// canonical encoding are deterministic (a deliberate change from the
/// unordered-map source behavior).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metric {
    /// Metric name as it appears on the sample line.
    #[serde(default)]
    pub name: String,
    /// Free-form type string ("counter", "gauge", ...). Forwarded into the
    /// `# TYPE` comment, never interpreted.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Tag key/value pairs; may be empty.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Sample value, kept as text.
    #[serde(default)]
    pub value: String,
}

impl Metric {
    /// Pure validity check. False on any field mismatch; does not report
    /// which field failed.
    pub fn validate(&self) -> bool {
        if !TEXT_PATTERN.is_match(&self.name) {
            return false;
        }
        if !TEXT_PATTERN.is_match(&self.kind) {
            return false;
        }
        if !VALUE_PATTERN.is_match(&self.value) {
            return false;
        }
        for (k, v) in &self.tags {
            if !TEXT_PATTERN.is_match(k) || !TEXT_PATTERN.is_match(v) {
                return false;
            }
        }
        true
    }

    /// Tag block for the sample line: empty when there are no tags, otherwise
    /// `{k1="v1",k2="v2"}` with keys in sorted order.
    pub fn tag_block(&self) -> String {
        if self.tags.is_empty() {
            return String::new();
        }
        let entries = self
            .tags
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(",");
        format!("{{{entries}}}")
    }

    /// Append this metric's exposition stanza: a `# TYPE` comment, a sample
    /// line, then a blank line.
    pub fn render_into(&self, out: &mut String) {
        let _ = write!(
            out,
            "# TYPE {} {}\n{}{} {}\n\n",
            self.name,
            self.kind,
            self.name,
            self.tag_block(),
            self.value,
        );
    }

    /// Render to an owned string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }
}
