//! Section Segmenter
//!
//! A line-oriented state machine shared by the extractors. A [`Segmenter`]
//! holds an ordered table of [`HeaderRule`]s; each rule maps a header pattern
//! to a section key and the [`SectionShape`] its content takes. Scanning keeps
//! one "current section" pointer:
//!
//! - a header line (first matching rule wins) switches the pointer, and any
//!   inline text after the label becomes the scalar value right away;
//! - a non-empty content line is routed into the current section according
//!   to its shape;
//! - everything else (blank lines, lines before the first header, bold
//!   header-like lines that no rule recognizes) is dropped.
//!
//! [`SegmentState`] is the scan state on its own, so extractors with extra
//! structure (numbered lesson sections) can drive the transitions directly.

use super::line_classification::{is_unrecognized_header, strip_bullet, trimmed_lines};
use regex::Regex;

/// What happens to a bullet-marked line inside a scalar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletPolicy {
    /// Append the line as written, marker included.
    Keep,
    /// Append the text after the marker.
    Strip,
    /// A bullet ends the section; the line itself is dropped.
    EndSection,
}

/// What happens to an un-bulleted line inside a list section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPolicy {
    /// Append it as a new entry.
    Tolerant,
    /// Drop it.
    BulletsOnly,
}

/// How a section's content lines are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    Scalar {
        separator: &'static str,
        bullets: BulletPolicy,
    },
    List(ListPolicy),
    /// The header is consumed and opens nothing.
    HeaderOnly,
}

impl SectionShape {
    /// Space-joined continuation, bullets kept as written.
    pub const SCALAR: SectionShape = SectionShape::Scalar {
        separator: " ",
        bullets: BulletPolicy::Keep,
    };
}

/// One header pattern and the section it opens.
///
/// The pattern's first capture group, when present and non-empty, is the
/// inline value that follows the label.
#[derive(Debug, Clone)]
pub struct HeaderRule<K> {
    pub pattern: Regex,
    pub key: K,
    pub shape: SectionShape,
}

/// A classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent<'a, K> {
    Blank,
    Header {
        key: K,
        shape: SectionShape,
        inline: Option<&'a str>,
    },
    Content(&'a str),
}

/// A scanned value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// Values collected per section key, in first-opened order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTable<K> {
    fields: Vec<(K, FieldValue)>,
}

impl<K: Copy + Eq> SectionTable<K> {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn get(&self, key: K) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, value)| value)
    }

    fn entry(&mut self, key: K, shape: SectionShape) -> &mut FieldValue {
        let index = match self.fields.iter().position(|(candidate, _)| *candidate == key) {
            Some(index) => index,
            None => {
                let value = match shape {
                    SectionShape::List(_) => FieldValue::List(Vec::new()),
                    _ => FieldValue::Scalar(String::new()),
                };
                self.fields.push((key, value));
                self.fields.len() - 1
            }
        };
        &mut self.fields[index].1
    }

    /// The scalar value for `key`, or "" when the section never appeared.
    pub fn take_scalar(&mut self, key: K) -> String {
        match self.remove(key) {
            Some(FieldValue::Scalar(value)) => value,
            _ => String::new(),
        }
    }

    /// The list for `key`, or an empty list when the section never appeared.
    pub fn take_list(&mut self, key: K) -> Vec<String> {
        match self.remove(key) {
            Some(FieldValue::List(values)) => values,
            _ => Vec::new(),
        }
    }

    fn remove(&mut self, key: K) -> Option<FieldValue> {
        let index = self.fields.iter().position(|(candidate, _)| *candidate == key)?;
        Some(self.fields.remove(index).1)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Copy + Eq> Default for SectionTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// The scan state: current section plus everything collected so far.
#[derive(Debug, Clone)]
pub struct SegmentState<K> {
    current: Option<(K, SectionShape)>,
    table: SectionTable<K>,
}

impl<K: Copy + Eq> SegmentState<K> {
    pub fn new() -> Self {
        Self {
            current: None,
            table: SectionTable::new(),
        }
    }

    pub fn current(&self) -> Option<K> {
        self.current.map(|(key, _)| key)
    }

    /// Make `key` the current section.
    ///
    /// For scalar sections a non-empty `inline` value replaces whatever was
    /// collected before. Header-only shapes leave no section open.
    pub fn open(&mut self, key: K, shape: SectionShape, inline: Option<&str>) {
        match shape {
            SectionShape::HeaderOnly => {
                self.current = None;
            }
            SectionShape::Scalar { .. } => {
                let value = self.table.entry(key, shape);
                if let (FieldValue::Scalar(existing), Some(text)) = (value, inline) {
                    let text = text.trim();
                    if !text.is_empty() {
                        *existing = text.to_string();
                    }
                }
                self.current = Some((key, shape));
            }
            SectionShape::List(_) => {
                self.table.entry(key, shape);
                self.current = Some((key, shape));
            }
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Route a trimmed, non-header line into the current section.
    pub fn push_content(&mut self, line: &str) {
        let Some((key, shape)) = self.current else {
            return;
        };
        if line.is_empty() {
            return;
        }

        match shape {
            SectionShape::HeaderOnly => {}
            SectionShape::List(policy) => {
                let entry = match strip_bullet(line) {
                    Some(text) => text,
                    None if is_unrecognized_header(line) => return,
                    None if policy == ListPolicy::Tolerant => line,
                    None => return,
                };
                if entry.is_empty() {
                    return;
                }
                if let FieldValue::List(values) = self.table.entry(key, shape) {
                    values.push(entry.to_string());
                }
            }
            SectionShape::Scalar { separator, bullets } => {
                let text = match (strip_bullet(line), bullets) {
                    (Some(_), BulletPolicy::EndSection) => {
                        self.close();
                        return;
                    }
                    (Some(stripped), BulletPolicy::Strip) => stripped,
                    (Some(_), BulletPolicy::Keep) => line,
                    (None, _) if is_unrecognized_header(line) => return,
                    (None, _) => line,
                };
                if text.is_empty() {
                    return;
                }
                if let FieldValue::Scalar(value) = self.table.entry(key, shape) {
                    append_joined(value, text, separator);
                }
            }
        }
    }

    pub fn into_table(self) -> SectionTable<K> {
        self.table
    }
}

impl<K: Copy + Eq> Default for SegmentState<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Append `text` to `value`, with `separator` only between non-empty parts.
pub fn append_joined(value: &mut String, text: &str, separator: &str) {
    if !value.is_empty() {
        value.push_str(separator);
    }
    value.push_str(text);
}

/// An ordered header table.
#[derive(Debug, Clone)]
pub struct Segmenter<K> {
    rules: Vec<HeaderRule<K>>,
}

impl<K: Copy + Eq> Segmenter<K> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule. Rules are tried in the order they were added.
    pub fn rule(mut self, pattern: Regex, key: K, shape: SectionShape) -> Self {
        self.rules.push(HeaderRule {
            pattern,
            key,
            shape,
        });
        self
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineEvent<'a, K> {
        if line.is_empty() {
            return LineEvent::Blank;
        }
        for rule in &self.rules {
            if let Some(captures) = rule.pattern.captures(line) {
                let inline = captures
                    .get(1)
                    .map(|m| m.as_str().trim())
                    .filter(|text| !text.is_empty());
                return LineEvent::Header {
                    key: rule.key,
                    shape: rule.shape,
                    inline,
                };
            }
        }
        LineEvent::Content(line)
    }

    /// Scan `text` in one pass.
    pub fn segment(&self, text: &str) -> SectionTable<K> {
        let mut state = SegmentState::new();
        for line in trimmed_lines(text) {
            match self.classify(line) {
                LineEvent::Blank => {}
                LineEvent::Header { key, shape, inline } => state.open(key, shape, inline),
                LineEvent::Content(content) => state.push_content(content),
            }
        }
        state.into_table()
    }
}

impl<K: Copy + Eq> Default for Segmenter<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        Name,
        Steps,
        Notes,
        Codes,
        Divider,
    }

    fn segmenter() -> Segmenter<Key> {
        Segmenter::new()
            .rule(
                Regex::new(r"(?i)^\*\*Name:\*\*(.*)$").unwrap(),
                Key::Name,
                SectionShape::SCALAR,
            )
            .rule(
                Regex::new(r"(?i)^\*\*Steps:\*\*").unwrap(),
                Key::Steps,
                SectionShape::List(ListPolicy::Tolerant),
            )
            .rule(
                Regex::new(r"(?i)^\*\*Notes:\*\*").unwrap(),
                Key::Notes,
                SectionShape::List(ListPolicy::BulletsOnly),
            )
            .rule(
                Regex::new(r"(?i)^\*\*Codes:\*\*(.*)$").unwrap(),
                Key::Codes,
                SectionShape::Scalar {
                    separator: " ",
                    bullets: BulletPolicy::EndSection,
                },
            )
            .rule(
                Regex::new(r"(?i)^\*\*Divider:\*\*").unwrap(),
                Key::Divider,
                SectionShape::HeaderOnly,
            )
    }

    #[test]
    fn test_lines_before_first_header_are_skipped() {
        let mut table = segmenter().segment("intro\n- bullet\n**Name:** Ada");
        assert_eq!(table.take_scalar(Key::Name), "Ada");
        assert!(table.is_empty());
    }

    #[test]
    fn test_inline_value_and_continuation() {
        let mut table = segmenter().segment("**name:** Ada\nLovelace\n\n- first programmer");
        assert_eq!(table.take_scalar(Key::Name), "Ada Lovelace - first programmer");
    }

    #[test]
    fn test_tolerant_list_keeps_plain_lines() {
        let mut table = segmenter().segment("**Steps:**\n- one\n* two\nthree\n-\n");
        assert_eq!(table.take_list(Key::Steps), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_bullets_only_list_drops_plain_lines() {
        let mut table = segmenter().segment("**Notes:**\n- kept\ndropped\n");
        assert_eq!(table.take_list(Key::Notes), vec!["kept"]);
    }

    #[test]
    fn test_unrecognized_header_is_noise() {
        let mut table = segmenter().segment("**Steps:**\n- one\n**Extras:**\n- two\n");
        assert_eq!(table.take_list(Key::Steps), vec!["one", "two"]);
    }

    #[test]
    fn test_bulleted_bold_label_is_content() {
        let raw = "**Steps:**\n- **Round 1:**\n**Extras:**\n**Notes:**\n* **Be patient:**\n";
        let mut table = segmenter().segment(raw);
        assert_eq!(table.take_list(Key::Steps), vec!["**Round 1:**"]);
        assert_eq!(table.take_list(Key::Notes), vec!["**Be patient:**"]);
    }

    #[test]
    fn test_bullet_ends_section() {
        let mut table = segmenter().segment("**Codes:** 5.1a\n5.1b\n- not a code\nstray\n");
        assert_eq!(table.take_scalar(Key::Codes), "5.1a 5.1b");
    }

    #[test]
    fn test_header_only_opens_nothing() {
        let mut table = segmenter().segment("**Name:** Ada\n**Divider:**\ndropped line\n");
        assert_eq!(table.take_scalar(Key::Name), "Ada");
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let mut table = segmenter().segment("");
        assert_eq!(table.take_scalar(Key::Name), "");
        assert!(table.take_list(Key::Steps).is_empty());
    }

    #[test]
    fn test_reopened_list_keeps_entries() {
        let mut table = segmenter().segment("**Steps:**\n- a\n**Name:** x\n**Steps:**\n- b\n");
        assert_eq!(table.take_list(Key::Steps), vec!["a", "b"]);
    }

    #[test]
    fn test_state_transitions() {
        let mut state = SegmentState::new();
        assert_eq!(state.current(), None);
        state.push_content("ignored");
        state.open(Key::Name, SectionShape::SCALAR, Some("  Grace "));
        assert_eq!(state.current(), Some(Key::Name));
        state.push_content("Hopper");
        state.close();
        state.push_content("ignored");
        let mut table = state.into_table();
        assert_eq!(table.take_scalar(Key::Name), "Grace Hopper");
    }

    #[test]
    fn test_classify() {
        let segmenter = segmenter();
        assert_eq!(segmenter.classify(""), LineEvent::Blank);
        assert_eq!(segmenter.classify("plain"), LineEvent::Content("plain"));
        assert_eq!(
            segmenter.classify("**Name:** Ada"),
            LineEvent::Header {
                key: Key::Name,
                shape: SectionShape::SCALAR,
                inline: Some("Ada"),
            }
        );
        assert_eq!(
            segmenter.classify("**Name:**"),
            LineEvent::Header {
                key: Key::Name,
                shape: SectionShape::SCALAR,
                inline: None,
            }
        );
    }
}
