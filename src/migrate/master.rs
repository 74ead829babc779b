use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::migrate::convert::MigratedRecord;

/// Render the new master format: one `id/n/d/i/t` block per record,
/// blocks separated by a blank line, trailing whitespace trimmed. An
/// absent image URL renders as an empty `i:` value.
pub fn render_master(records: &[MigratedRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("id:{}\n", record.id));
        out.push_str(&format!("n:{}\n", record.name));
        out.push_str(&format!("d:{}\n", record.description));
        out.push_str(&format!(
            "i:{}\n",
            record.image_url.as_deref().unwrap_or_default()
        ));
        out.push_str(&format!("t:{}\n\n", record.thumb_filename));
    }
    out.trim_end().to_string()
}

/// Single full-file overwrite of the destination. Not atomic; a crash
/// mid-write can leave a partial file.
pub fn write_master(path: &Path, records: &[MigratedRecord]) -> Result<()> {
    fs::write(path, render_master(records))
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::render_master;
    use crate::migrate::convert::MigratedRecord;

    fn record(id: usize, name: &str, description: &str, image_url: Option<&str>) -> MigratedRecord {
        MigratedRecord {
            id,
            name: name.to_string(),
            description: description.to_string(),
            image_url: image_url.map(str::to_string),
            thumb_filename: format!("{id}.jpg"),
        }
    }

    #[test]
    fn renders_full_record() {
        let got = render_master(&[record(
            1,
            "Jane Doe",
            "Abstract painter",
            Some("http://x/img.png"),
        )]);
        assert_eq!(
            got,
            "id:1\nn:Jane Doe\nd:Abstract painter\ni:http://x/img.png\nt:1.jpg"
        );
    }

    #[test]
    fn absent_fields_render_as_empty_values_not_missing_lines() {
        let got = render_master(&[record(1, "Solo Artist", "", None)]);
        assert_eq!(got, "id:1\nn:Solo Artist\nd:\ni:\nt:1.jpg");
    }

    #[test]
    fn records_are_blank_line_separated_with_no_trailing_blank() {
        let got = render_master(&[record(1, "A", "x", None), record(2, "B", "y", None)]);
        assert_eq!(
            got,
            "id:1\nn:A\nd:x\ni:\nt:1.jpg\n\nid:2\nn:B\nd:y\ni:\nt:2.jpg"
        );
        assert!(!got.ends_with('\n'));
    }

    #[test]
    fn empty_input_renders_empty_output() {
        assert_eq!(render_master(&[]), "");
    }
}
