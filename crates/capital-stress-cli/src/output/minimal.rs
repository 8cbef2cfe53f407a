use serde_json::Value;

/// Print just the key answer from the output.
///
/// For a stress-test run that is one line per (scenario, bank) giving the
/// trough ratio and shortfall; anything else falls back to a priority list
/// of well-known fields, then to the first field.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Trough summary rows, whether nested in a full result or standalone.
    let summary: Option<&[Value]> = match result_obj {
        Value::Object(map) => map
            .get("summary")
            .and_then(Value::as_array)
            .map(Vec::as_slice),
        Value::Array(arr) if is_summary(arr) => Some(arr.as_slice()),
        _ => None,
    };

    if let Some(rows) = summary {
        for row in rows {
            if let Value::Object(map) = row {
                println!(
                    "{} [{}]: trough_ratio={} shortfall={}",
                    map.get("bank").map(format_minimal).unwrap_or_default(),
                    map.get("scenario").map(format_minimal).unwrap_or_default(),
                    map.get("trough_ratio")
                        .map(format_minimal)
                        .unwrap_or_default(),
                    map.get("shortfall").map(format_minimal).unwrap_or_default(),
                );
            }
        }
        return;
    }

    let priority_keys = ["trough_ratio", "cet1_ratio", "shortfall", "cet1"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn is_summary(arr: &[Value]) -> bool {
    matches!(arr.first(), Some(Value::Object(map)) if map.contains_key("trough_ratio"))
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
