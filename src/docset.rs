use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use walkdir::WalkDir;

pub const OVERVIEW_SUMMARY: &str = "overview-summary.html";

/// Stop searching for the docs root after this many directory entries, so a
/// wrong argument pointing at a huge tree fails fast instead of crawling it.
const WALK_LIMIT: usize = 10_000;

/// The `<name>.docset` directory layout.
pub struct Bundle {
    pub root: PathBuf,
    pub contents: PathBuf,
    pub resources: PathBuf,
    pub documents: PathBuf,
}

impl Bundle {
    /// Create a fresh bundle skeleton under `parent`, replacing any existing
    /// one.
    pub fn create(parent: &Path, docset_name: &str) -> Result<Bundle> {
        let root = parent.join(format!("{}.docset", docset_name));

        if root.exists() {
            info!("Removing existing docset at {}", root.display());
            fs::remove_dir_all(&root)
                .with_context(|| format!("Unable to remove {}", root.display()))?;
        }

        let contents = root.join("Contents");
        let resources = contents.join("Resources");
        let documents = resources.join("Documents");
        fs::create_dir_all(&documents)
            .with_context(|| format!("Unable to create {}", documents.display()))?;

        Ok(Bundle {
            root,
            contents,
            resources,
            documents,
        })
    }

    pub fn db_path(&self) -> PathBuf {
        self.resources.join("docSet.dsidx")
    }

    /// Write the bundle manifest. `index_page` is the page a docset browser
    /// opens first, relative to Documents/; empty when none was found.
    pub fn write_plist(&self, docset_name: &str, index_page: &str) -> Result<()> {
        let identifier = docset_identifier(docset_name);
        let content = format!(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<plist version="1.0"><dict>"#,
                r#"<key>CFBundleIdentifier</key><string>{id}</string>"#,
                r#"<key>CFBundleName</key><string>{name}</string>"#,
                r#"<key>DocSetPlatformFamily</key><string>{id}</string>"#,
                r#"<key>dashIndexFilePath</key><string>{index}</string>"#,
                r#"<key>DashDocSetFamily</key><string>java</string>"#,
                r#"<key>isDashDocset</key><true/>"#,
                r#"</dict></plist>"#
            ),
            id = identifier,
            name = docset_name,
            index = index_page,
        );

        let plist_path = self.contents.join("Info.plist");
        fs::write(&plist_path, content)
            .with_context(|| format!("Unable to write {}", plist_path.display()))
    }
}

/// Bundle identifier: first whitespace-separated word of the name, lowercased.
pub fn docset_identifier(docset_name: &str) -> String {
    docset_name
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Find the directory holding the actual API pages. Usually the given folder
/// itself; some distributions nest the docs one or more levels down, so fall
/// back to searching for overview-summary.html (bounded by WALK_LIMIT).
/// Returns the root plus whether a summary page was found at all.
pub fn find_docs_root(javadoc_dir: &Path) -> Result<(PathBuf, bool)> {
    if javadoc_dir.join(OVERVIEW_SUMMARY).is_file() {
        return Ok((javadoc_dir.to_path_buf(), true));
    }

    let mut walked = 0;
    for entry in WalkDir::new(javadoc_dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", javadoc_dir.display()))?;

        walked += 1;
        if walked >= WALK_LIMIT {
            warn!("Hit file enumeration limit while looking for {}", OVERVIEW_SUMMARY);
            break;
        }

        if entry.file_type().is_file() && entry.file_name() == OVERVIEW_SUMMARY {
            let root = entry
                .path()
                .parent()
                .unwrap_or(javadoc_dir)
                .to_path_buf();
            return Ok((root, true));
        }
    }

    Ok((javadoc_dir.to_path_buf(), false))
}

/// Recursively copy the docs tree into the bundle's Documents directory.
/// Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize> {
    info!("Copying files from {} to {}", src.display(), dst.display());

    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            continue;
        }

        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Unable to create {}", target.display()))?;
        } else {
            fs::copy(entry.path(), &target).with_context(|| {
                format!("Unable to copy {} to {}", entry.path().display(), target.display())
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Collect the index files to parse from the copied Documents tree. A single
/// index-all.html wins unless the docs ship a split index-files/ directory,
/// in which case every index-files/index-*.html is taken.
pub fn collect_index_files(documents: &Path, has_split_index: bool) -> Result<Vec<PathBuf>> {
    let index_all = documents.join("index-all.html");
    if !has_split_index && index_all.is_file() {
        return Ok(vec![index_all]);
    }

    let index_dir = documents.join("index-files");
    if !index_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&index_dir) {
        let entry = entry.with_context(|| format!("Failed to walk {}", index_dir.display()))?;
        let name = entry.file_name().to_string_lossy();
        if entry.file_type().is_file()
            && name.starts_with("index-")
            && name.ends_with(".html")
        {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Page a docset browser should open first, relative to Documents/.
pub fn index_page(summary_found: bool, has_split_index: bool, has_index_all: bool) -> &'static str {
    if summary_found {
        OVERVIEW_SUMMARY
    } else if has_split_index {
        "index-files/index-1.html"
    } else if has_index_all {
        "index-all.html"
    } else {
        ""
    }
}
