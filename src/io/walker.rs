//! Class discovery: enumerate the classes directory and partition production
//! classes from test classes by the `<Name>Test` stem convention.

use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A production class awaiting analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductionClass {
    pub name: String,
    pub path: PathBuf,
}

/// Outcome of discovery: production classes in deterministic order, plus the
/// set of base names that have a test class.
#[derive(Debug, Default)]
pub struct DiscoveredClasses {
    pub production: Vec<ProductionClass>,
    pub test_bases: HashSet<String>,
}

impl DiscoveredClasses {
    /// Exact, case-sensitive pairing by derived base name.
    pub fn has_test_for(&self, name: &str) -> bool {
        self.test_bases.contains(name)
    }
}

pub struct ClassWalker {
    root: PathBuf,
    extension: String,
}

impl ClassWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: "cls".to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Enumerate the directory (non-recursive) in sorted filename order.
    ///
    /// Sorting pins discovery order, which is the tie-break order of the
    /// final ranking, so reports reproduce byte for byte across platforms.
    pub fn discover(&self) -> Result<DiscoveredClasses> {
        let mut discovered = DiscoveredClasses::default();

        let walker = WalkDir::new(&self.root)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !self.matches_extension(path) {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match stem.strip_suffix("Test") {
                Some(base) => {
                    discovered.test_bases.insert(base.to_string());
                }
                None => discovered.production.push(ProductionClass {
                    name: stem.to_string(),
                    path: path.to_path_buf(),
                }),
            }
        }

        Ok(discovered)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension.as_str())
            .unwrap_or(false)
    }
}
