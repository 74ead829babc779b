/// One record as it appears in the legacy master file.
///
/// `description` defaults to empty when the `d:` line is absent; the
/// image URL and thumbnail key stay absent instead of defaulting, which
/// matters downstream (a missing thumbnail key is fatal there).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRecord {
    pub name: String,
    pub description: String,
    pub image_url: Option<String>,
    pub thumb_key: Option<String>,
}

/// Split the legacy master text into records.
///
/// Blocks are separated by blank lines. A record starts at the block's
/// `n:` line; anything before it is dropped. From there, `key:value`
/// lines with a single-character key populate the record, and a
/// duplicate key within one block overwrites the earlier value. Blocks
/// without an `n:` line are skipped without comment. Output order is
/// input order.
pub fn parse_legacy(text: &str) -> Vec<LegacyRecord> {
    let mut records = Vec::new();

    for block in text.split("\n\n") {
        if block.trim().is_empty() {
            continue;
        }

        let mut name = None;
        let mut description = None;
        let mut image_url = None;
        let mut thumb_key = None;

        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            if key.chars().count() != 1 {
                continue;
            }
            if name.is_none() && key != "n" {
                continue;
            }
            let value = value.trim().to_string();
            match key {
                "n" => name = Some(value),
                "d" => description = Some(value),
                "i" => image_url = Some(value),
                "h" => thumb_key = Some(value),
                _ => {}
            }
        }

        let Some(name) = name else {
            continue;
        };

        records.push(LegacyRecord {
            name,
            description: description.unwrap_or_default(),
            image_url,
            thumb_key,
        });
    }

    records
}
