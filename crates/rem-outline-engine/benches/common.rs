use serde_json::{Value, json};

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_export(roots: usize, fan_out: usize, depth: usize) -> Value {
    let mut records = Vec::new();
    for root in 0..roots {
        let id = format!("root-{root}");
        push_subtree(&mut records, &id, None, fan_out, depth, true);
    }
    json!({ "docs": records })
}

#[allow(dead_code)]
fn push_subtree(
    records: &mut Vec<Value>,
    id: &str,
    parent: Option<&str>,
    fan_out: usize,
    remaining_depth: usize,
    document: bool,
) {
    let children: Vec<String> = if remaining_depth == 0 {
        Vec::new()
    } else {
        (0..fan_out).map(|i| format!("{id}.{i}")).collect()
    };

    let mut record = json!({
        "_id": id,
        "key": [format!("Block {id}")],
        "value": [
            "see ",
            { "i": "q", "_id": parent.unwrap_or(id) },
            " and ",
            { "i": "m", "text": "this", "b": true }
        ],
        "parent": parent,
        "subBlocks": children.iter().rev().collect::<Vec<_>>(),
        "references": [],
    });
    if document {
        record["docUpdated"] = json!(1);
    }
    records.push(record);

    for (i, child) in children.iter().enumerate() {
        // Every third child starts its own page.
        push_subtree(records, child, Some(id), fan_out, remaining_depth - 1, i % 3 == 2);
    }
}

#[allow(dead_code)]
pub fn generate_large_export() -> Value {
    generate_export(20, 4, 4)
}
