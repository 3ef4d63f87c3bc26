//! Column specifications for the two export tables.
//!
//! The header names are fixed and match what Part-DB users already
//! import elsewhere, German column names included. The `Link` column
//! is synthesized from the configured public base URL and the row id;
//! it is not stored in the database.

use partdb_query::{LocationRecord, PartRecord};

/// A record type that knows its CSV shape.
pub trait ExportRecord {
    /// Fixed header row, emitted exactly once per export.
    const HEADER: &'static [&'static str];

    /// Download filename for the `Content-Disposition` header.
    const FILENAME: &'static str;

    /// Field values for one data row, in header order, link included.
    fn fields(&self, base_url: &str) -> Vec<String>;
}

impl ExportRecord for PartRecord {
    const HEADER: &'static [&'static str] = &[
        "id",
        "name",
        "comment",
        "description",
        "instock",
        "Lagerplatz",
        "Link",
    ];

    const FILENAME: &'static str = "parts.csv";

    fn fields(&self, base_url: &str) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.comment.clone(),
            self.description.clone(),
            self.in_stock.to_string(),
            self.storage_location.clone(),
            format!("{base_url}/show_part_info.php?pid={}", self.id),
        ]
    }
}

impl ExportRecord for LocationRecord {
    const HEADER: &'static [&'static str] = &["id", "name", "comment", "Lagerort", "Link"];

    const FILENAME: &'static str = "locations.csv";

    fn fields(&self, base_url: &str) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.comment.clone(),
            self.parent_location.clone(),
            format!("{base_url}/show_location_parts.php?lid={}", self.id),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_link_synthesis() {
        let part = PartRecord {
            id: 5,
            name: "Resistor 10k".to_string(),
            comment: "low,noise".to_string(),
            description: String::new(),
            in_stock: 120,
            storage_location: "Bin A1".to_string(),
        };

        let fields = part.fields("https://partdb.example.com");
        assert_eq!(fields.len(), PartRecord::HEADER.len());
        assert_eq!(
            fields.last().unwrap(),
            "https://partdb.example.com/show_part_info.php?pid=5"
        );
    }

    #[test]
    fn test_location_link_synthesis() {
        let location = LocationRecord {
            id: 7,
            name: "Shelf B".to_string(),
            comment: String::new(),
            parent_location: "Warehouse".to_string(),
        };

        let fields = location.fields("https://partdb.example.com");
        assert_eq!(fields.len(), LocationRecord::HEADER.len());
        assert_eq!(
            fields.last().unwrap(),
            "https://partdb.example.com/show_location_parts.php?lid=7"
        );
    }
}
