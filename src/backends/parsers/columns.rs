use crate::core::types::PackageRecord;
use regex::Regex;
use std::sync::LazyLock;

/// `<name><2+ whitespace><id>[<whitespace><anything>]`
///
/// The name is lazy, so the column boundary is the first run of two or more
/// whitespace characters; single spaces stay inside the name.
static COLUMN_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>.+?)\s{2,}(?P<id>\S+)(?:\s.*)?$").expect("Invalid regex pattern")
});

/// Parse column-aligned package-manager output (`Name  Id  ...`) into records.
///
/// Best effort: blank lines, separator rules and banners without a two-space
/// column gap are skipped. Never fails; unparseable input yields fewer records.
/// Every record is tagged with the live-query category.
pub fn parse_columns(output: &str) -> Vec<PackageRecord> {
    let mut records = Vec::new();

    for raw in output.lines() {
        // Spinner frames are drawn with bare carriage returns; keep the last frame.
        let Some(line) = raw.split('\r').filter(|s| !s.trim().is_empty()).last() else {
            continue;
        };
        let line = line.trim();

        if let Some(record) = parse_line(line) {
            records.push(record);
        }
    }

    records
}

/// Parse a single trimmed line, `None` when it does not have the two-column shape.
pub fn parse_line(line: &str) -> Option<PackageRecord> {
    let caps = COLUMN_LINE.captures(line)?;
    let name = caps.name("name")?.as_str().trim();
    let id = caps.name("id")?.as_str().trim();

    if name.is_empty() || id.is_empty() {
        return None;
    }

    Some(PackageRecord::from_query(name, id))
}
