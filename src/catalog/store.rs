// ABOUTME: Template catalog store that loads definitions from a directory
// ABOUTME: Provides lookup by key and enumeration of all loaded template keys

use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, warn};

use super::error::{CatalogError, Result};
use super::template::TemplateDefinition;

/// In-memory catalog of receipt templates, keyed by definition filename stem.
///
/// Read-only after construction; reload by building a new catalog.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: IndexMap<String, TemplateDefinition>,
}

impl TemplateCatalog {
    /// Load every `.yaml`/`.yml` definition in `dir` (non-recursive).
    ///
    /// Entries are processed in sorted filename order, so when two files share
    /// a stem (e.g. `task.yaml` and `task.yml`) the later name in byte order
    /// wins. The collision is logged, not treated as an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|source| CatalogError::DirectoryUnreadable {
            dir: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file()
                    && matches!(
                        path.extension().and_then(|e| e.to_str()),
                        Some("yaml") | Some("yml")
                    )
            })
            .collect();
        paths.sort();

        let mut templates = IndexMap::new();
        for path in paths {
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let content =
                std::fs::read_to_string(&path).map_err(|source| CatalogError::FileUnreadable {
                    file: path.clone(),
                    source,
                })?;
            let template: TemplateDefinition =
                serde_yaml::from_str(&content).map_err(|source| CatalogError::Malformed {
                    file: path.clone(),
                    source,
                })?;
            if templates.contains_key(key) {
                warn!("Duplicate template key '{}', keeping {:?}", key, path);
            }
            debug!("Loaded template '{}' from {:?}", key, path);
            templates.insert(key.to_string(), template.with_key(key));
        }

        Ok(Self { templates })
    }

    /// Look up a template by key.
    pub fn get(&self, key: &str) -> Result<&TemplateDefinition> {
        self.templates.get(key).ok_or_else(|| CatalogError::NotFound {
            name: key.to_string(),
        })
    }

    /// All template keys, in load order.
    pub fn list(&self) -> Vec<&str> {
        self.templates.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
