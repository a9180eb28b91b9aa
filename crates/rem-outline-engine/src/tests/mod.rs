use serde_json::{Map, Value, json};
use tempfile::TempDir;

/// Create a temporary output directory for written pages
pub fn create_test_output_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Wrap records into a full export document
pub fn export(records: Vec<Value>) -> Value {
    json!({ "docs": records })
}

/// Start a plain root record with a single text key cell
pub fn rem(id: &str, key: &str) -> RemBuilder {
    let mut fields = Map::new();
    fields.insert("_id".into(), json!(id));
    fields.insert("key".into(), json!([key]));
    fields.insert("parent".into(), Value::Null);
    fields.insert("subBlocks".into(), json!([]));
    RemBuilder { fields }
}

pub struct RemBuilder {
    fields: Map<String, Value>,
}

impl RemBuilder {
    pub fn key(self, cells: Value) -> Self {
        self.field("key", cells)
    }

    pub fn value(self, cells: Value) -> Self {
        self.field("value", cells)
    }

    pub fn parent(self, id: &str) -> Self {
        self.field("parent", json!(id))
    }

    /// Children in authoring order; stored reversed, the way exports list them.
    pub fn children(self, ids: &[&str]) -> Self {
        let raw: Vec<&str> = ids.iter().rev().copied().collect();
        self.field("subBlocks", json!(raw))
    }

    pub fn document(self) -> Self {
        self.field("docUpdated", json!(1_700_000_000_000u64))
    }

    /// Mark the block as the target of at least one inbound reference.
    pub fn referenced(self) -> Self {
        self.field("references", json!([{ "q": "elsewhere" }]))
    }

    pub fn field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
