pub mod classifier;
pub mod element_type;
pub mod locator;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use scraper::Html;
use tracing::{info, warn};

use self::element_type::ElementType;

/// One searchable symbol: display name, kind, and href into the copied docs.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub name: String,
    pub element_type: ElementType,
    pub path: String,
}

/// Locate and classify every entry in one parsed index page. Candidates no
/// rule chain recognizes are logged and dropped; that is expected for the odd
/// anchor, not a failure.
pub fn parse_index(doc: &Html) -> Vec<IndexEntry> {
    let mut entries = Vec::new();

    for candidate in locator::candidates(doc) {
        match classifier::classify(&candidate.text, &candidate.class_attr) {
            Some(element_type) => entries.push(IndexEntry {
                name: candidate.name,
                element_type,
                path: candidate.path,
            }),
            None => warn!(
                text = %candidate.text,
                class = %candidate.class_attr,
                "could not determine entry type"
            ),
        }
    }

    entries
}

/// Read and parse one index file. Javadoc pages are not always UTF-8, so the
/// bytes go through a lossy conversion; the html5ever parser itself never
/// fails, it produces a best-effort tree.
pub fn parse_index_file(path: &Path) -> Result<Vec<IndexEntry>> {
    info!("Indexing {}", path.display());

    let bytes = fs::read(path).with_context(|| format!("Unable to open {}", path.display()))?;
    let html = String::from_utf8_lossy(&bytes);
    let doc = Html::parse_document(&html);

    let entries = parse_index(&doc);
    info!("Indexed {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_fixture(name: &str) -> Vec<IndexEntry> {
        let html = std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap();
        parse_index(&Html::parse_document(&html))
    }

    #[test]
    fn index_all_fixture() {
        let entries = parse_fixture("index-all");

        let kinds: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.element_type.label()))
            .collect();

        assert_eq!(
            kinds,
            [
                ("com.example.util", "Package"),
                ("Counter", "Class"),
                ("Counter()", "Constructor"),
                ("count()", "Method"),
                ("DEFAULT_LIMIT", "Field"),
                ("Level", "Enum"),
                ("Reducer", "Interface"),
                ("reset()", "Method"),
                ("StaleDataException", "Exception"),
                ("total", "Field"),
            ]
        );
    }

    #[test]
    fn fixture_paths_are_hrefs() {
        let entries = parse_fixture("index-all");
        let counter = entries.iter().find(|e| e.name == "Counter").unwrap();
        assert_eq!(counter.path, "com/example/util/Counter.html");
    }

    #[test]
    fn navigation_and_unknown_anchors_dropped() {
        // The fixture carries a navbar, see-also links inside <dd>, and one
        // dt whose text matches no rule; none of them may produce entries.
        let entries = parse_fixture("index-all");
        assert!(entries.iter().all(|e| e.name != "Overview"));
        assert!(entries.iter().all(|e| e.name != "mystery"));
        assert_eq!(entries.len(), 10);
    }
}
