use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::Value;

// Excel only detects UTF-8 when the file starts with a BOM.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Appends `reviews` to the CSV at `path`, creating it with a BOM and a
/// header row when it does not exist yet. Returns the number of records
/// written.
///
/// Columns are derived from the fields observed in `reviews`, in first-seen
/// order. Appending never rewrites the header, so repeated runs accumulate
/// rows against the header of the first run.
pub fn append_reviews(path: &Path, reviews: &[Value]) -> Result<usize> {
    let is_new = !path.exists();

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if is_new {
        file.write_all(UTF8_BOM)?;
    }

    let columns = column_order(reviews);
    let mut csv_writer = csv::Writer::from_writer(file);

    if is_new {
        csv_writer.write_record(&columns)?;
    }
    for review in reviews {
        let fields = review.as_object();
        let row = columns
            .iter()
            .map(|column| cell_text(fields.and_then(|fields| fields.get(column))));
        csv_writer.write_record(row)?;
    }
    csv_writer.flush()?;

    Ok(reviews.len())
}

/// Union of field names across all records, in first-seen order.
fn column_order(reviews: &[Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for review in reviews {
        if let Some(fields) = review.as_object() {
            for key in fields.keys() {
                if seen.insert(key.clone()) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        // Nested values keep their JSON form in the cell.
        Some(other) => other.to_string(),
    }
}
