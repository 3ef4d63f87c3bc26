//! Record types produced by the fetcher.
//!
//! Records are immutable once fetched and live for one response. The
//! free-text fields (`comment`, `description`) are normalized so that
//! no `\r\n` ever reaches the CSV stage, regardless of how the text
//! was entered in Part-DB.

/// One row of the parts export, location name already resolved.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PartRecord {
    pub id: i64,
    pub name: String,
    pub comment: String,
    pub description: String,
    #[sqlx(rename = "instock")]
    pub in_stock: i64,
    /// Human-readable storage location name (Part-DB calls this
    /// "Lagerplatz" in its own exports).
    #[sqlx(rename = "Lagerplatz")]
    pub storage_location: String,
}

/// One row of the locations export, parent name already resolved.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct LocationRecord {
    pub id: i64,
    pub name: String,
    pub comment: String,
    /// Human-readable parent location name ("Lagerort").
    #[sqlx(rename = "Lagerort")]
    pub parent_location: String,
}

impl PartRecord {
    pub(crate) fn normalize(mut self) -> Self {
        normalize_newlines(&mut self.comment);
        normalize_newlines(&mut self.description);
        self
    }
}

impl LocationRecord {
    pub(crate) fn normalize(mut self) -> Self {
        normalize_newlines(&mut self.comment);
        self
    }
}

/// Collapse literal `\r\n` sequences to `\n` in place.
pub fn normalize_newlines(text: &mut String) {
    if text.contains("\r\n") {
        *text = text.replace("\r\n", "\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_collapsed_to_lf() {
        let mut text = "line one\r\nline two\r\nline three".to_string();
        normalize_newlines(&mut text);
        assert_eq!(text, "line one\nline two\nline three");
    }

    #[test]
    fn test_bare_lf_untouched() {
        let mut text = "line one\nline two".to_string();
        normalize_newlines(&mut text);
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn test_record_normalization_covers_all_free_text() {
        let record = PartRecord {
            id: 1,
            name: "Resistor".to_string(),
            comment: "a\r\nb".to_string(),
            description: "c\r\nd".to_string(),
            in_stock: 10,
            storage_location: "Bin A1".to_string(),
        }
        .normalize();

        assert_eq!(record.comment, "a\nb");
        assert_eq!(record.description, "c\nd");
        assert!(!record.comment.contains("\r\n"));
    }
}
