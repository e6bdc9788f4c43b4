//! Render context: root variables plus named row collections
//!
//! A [`Context`] is built by the calling application right before a render
//! pass and dropped afterwards. Row collections are ordered; nested blocks
//! live inside the records of their outer block.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::Path;

use eyre::{Result, WrapErr, eyre};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::value::Value;

/// One record: scalar fields plus nested row collections
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "BTreeMap<String, Entry>")]
pub struct Record {
    vars: HashMap<String, Value>,
    blocks: HashMap<String, Vec<Record>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field assignment
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style nested row append
    pub fn with_row(mut self, block: impl Into<String>, row: Record) -> Self {
        self.push_row(block, row);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Truthiness of a field; absent fields are false
    pub fn flag(&self, key: &str) -> bool {
        self.vars.get(key).is_some_and(Value::is_truthy)
    }

    /// Rows of a block, empty when the block was never assigned
    pub fn rows(&self, block: &str) -> &[Record] {
        self.blocks.get(block).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_row(&mut self, block: impl Into<String>, row: Record) {
        self.blocks.entry(block.into()).or_default().push(row);
    }

    /// Remove a block and all rows nested under it
    pub fn remove_block(&mut self, block: &str) -> Option<Vec<Record>> {
        self.blocks.remove(block)
    }

    pub fn var_count(&self) -> usize {
        self.vars.len()
    }

    /// Append `row` to the block at a dotted path
    ///
    /// Every segment but the last descends into the most recent row of that
    /// block. Returns false (and drops the row) when an outer level is empty.
    fn push_at_path(&mut self, path: &str, row: Record) -> bool {
        let mut segments: Vec<&str> = path.split('.').collect();
        let Some(leaf) = segments.pop() else {
            return false;
        };

        let mut target = self;
        for segment in segments {
            match target.blocks.get_mut(segment).and_then(|rows| rows.last_mut()) {
                Some(last) => target = last,
                None => {
                    warn!(%path, %segment, "assign_block_vars: outer block has no rows, dropping row");
                    return false;
                }
            }
        }
        target.push_row(leaf, row);
        true
    }
}

/// Context file entry: a scalar field or a row collection
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Rows(Vec<Record>),
    Scalar(Value),
}

impl From<BTreeMap<String, Entry>> for Record {
    fn from(entries: BTreeMap<String, Entry>) -> Self {
        let mut record = Record::new();
        for (key, entry) in entries {
            match entry {
                Entry::Rows(rows) => {
                    record.blocks.insert(key, rows);
                }
                Entry::Scalar(value) => {
                    record.vars.insert(key, value);
                }
            }
        }
        record
    }
}

/// Everything one render pass can see
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Context {
    root: Record,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root-level record
    pub fn root(&self) -> &Record {
        &self.root
    }

    pub fn assign_var(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.root.set(key, value);
    }

    pub fn assign_vars<K, V>(&mut self, vars: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in vars {
            self.root.set(key, value);
        }
    }

    /// Append a row to a (possibly nested) block, e.g. `faq_block.faq_row`
    pub fn assign_block_vars(&mut self, path: &str, row: Record) -> bool {
        debug!(%path, fields = row.var_count(), "Context::assign_block_vars: called");
        self.root.push_at_path(path, row)
    }

    /// Drop a top-level block
    pub fn destroy_block_vars(&mut self, block: &str) -> bool {
        debug!(%block, "Context::destroy_block_vars: called");
        self.root.remove_block(block).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn flag(&self, key: &str) -> bool {
        self.root.flag(key)
    }

    pub fn rows(&self, block: &str) -> &[Record] {
        self.root.rows(block)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).wrap_err("Failed to parse YAML context")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).wrap_err("Failed to parse JSON context")
    }

    /// Load a context file, picking the format from its extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "Context::load: called");
        let content =
            std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read context {}", path.display()))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let parsed = match ext {
            "json" => Self::from_json_str(&content),
            "yml" | "yaml" => Self::from_yaml_str(&content),
            other => Err(eyre!("Unsupported context file extension '{}': {}", other, path.display())),
        };
        parsed.wrap_err_with(|| format!("Invalid context file {}", path.display()))
    }
}

impl From<Record> for Context {
    fn from(root: Record) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_block_is_empty() {
        let ctx = Context::new();
        assert!(ctx.rows("nothing").is_empty());
    }

    #[test]
    fn test_assign_block_vars_preserves_order() {
        let mut ctx = Context::new();
        for name in ["a", "b", "c"] {
            assert!(ctx.assign_block_vars("forumrow", Record::new().with("NAME", name)));
        }
        let names: Vec<_> = ctx
            .rows("forumrow")
            .iter()
            .map(|r| r.get("NAME").unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_nested_assign_targets_last_outer_row() {
        let mut ctx = Context::new();
        ctx.assign_block_vars("faq_block", Record::new().with("BLOCK_TITLE", "first"));
        ctx.assign_block_vars("faq_block.faq_row", Record::new().with("Q", "1"));
        ctx.assign_block_vars("faq_block", Record::new().with("BLOCK_TITLE", "second"));
        ctx.assign_block_vars("faq_block.faq_row", Record::new().with("Q", "2"));
        ctx.assign_block_vars("faq_block.faq_row", Record::new().with("Q", "3"));

        let blocks = ctx.rows("faq_block");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].rows("faq_row").len(), 1);
        assert_eq!(blocks[1].rows("faq_row").len(), 2);
    }

    #[test]
    fn test_nested_assign_without_outer_row_is_dropped() {
        let mut ctx = Context::new();
        assert!(!ctx.assign_block_vars("outer.inner", Record::new()));
        assert!(ctx.rows("outer").is_empty());
    }

    #[test]
    fn test_destroy_block_vars() {
        let mut ctx = Context::new();
        ctx.assign_block_vars("postrow", Record::new());
        assert!(ctx.destroy_block_vars("postrow"));
        assert!(!ctx.destroy_block_vars("postrow"));
        assert!(ctx.rows("postrow").is_empty());
    }

    #[test]
    fn test_flag_of_absent_key_is_false() {
        let mut ctx = Context::new();
        ctx.assign_var("S_ON", true);
        assert!(ctx.flag("S_ON"));
        assert!(!ctx.flag("S_OFF"));
    }

    #[test]
    fn test_from_yaml_nested() {
        let yaml = r#"
SITENAME: Example Board
S_USER_LOGGED_IN: true
TOTAL_POSTS: 12
faq_block:
  - BLOCK_TITLE: General
    faq_row:
      - FAQ_QUESTION: Why?
      - FAQ_QUESTION: How?
"#;
        let ctx = Context::from_yaml_str(yaml).unwrap();
        assert_eq!(ctx.get("SITENAME"), Some(&Value::from("Example Board")));
        assert!(ctx.flag("S_USER_LOGGED_IN"));
        assert_eq!(ctx.get("TOTAL_POSTS"), Some(&Value::from("12")));
        assert_eq!(ctx.rows("faq_block")[0].rows("faq_row").len(), 2);
    }

    #[test]
    fn test_from_json() {
        let ctx = Context::from_json_str(r#"{"PAGE_TITLE": "Index", "postrow": [{"MESSAGE": "hi"}]}"#).unwrap();
        assert_eq!(ctx.get("PAGE_TITLE"), Some(&Value::from("Index")));
        assert_eq!(ctx.rows("postrow").len(), 1);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctx.toml");
        std::fs::write(&path, "A = 1").unwrap();
        assert!(Context::load(&path).is_err());
    }
}
