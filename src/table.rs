use crate::error::{CfResult, CorpusForgeError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Exact occurrence counts keyed by surface form. Built incrementally
/// during emission, serialized once in lexicographic key order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, form: &str) {
        *self.counts.entry(form.to_string()).or_default() += 1;
    }

    /// Distinct surface form cardinality.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the number of items emitted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn get(&self, form: &str) -> Option<u64> {
        self.counts.get(form).copied()
    }

    /// Entries in lexicographic key order (the canonical listing order).
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect();
        entries.sort();
        entries
    }

    /// Serializes as one `"<form> <count>\n"` record per line.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> CfResult<()> {
        for (form, count) in self.sorted_entries() {
            writeln!(sink, "{} {}", form, count)?;
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> CfResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Strict load of a frequency-table file into sorted `(form, count)` pairs.
/// A line with other than exactly two whitespace-separated fields, or a
/// non-numeric count, is a format error surfaced with the offending line.
pub fn load_table<P: AsRef<Path>>(path: P) -> CfResult<Vec<(String, u64)>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(CorpusForgeError::Format {
                line_no: idx + 1,
                reason: format!("expected 2 fields, found {}", fields.len()),
                line,
            });
        }

        let count: u64 = fields[1].parse().map_err(|_| CorpusForgeError::Format {
            line_no: idx + 1,
            reason: format!("count '{}' is not a non-negative integer", fields[1]),
            line: line.clone(),
        })?;

        entries.push((fields[0].to_string(), count));
    }

    entries.sort();
    Ok(entries)
}
