//! Template registry: the name→path lookup table built from a templates
//! root. The front end only threads the finished table through to nodes;
//! building it lives here so the CLI and tests have a concrete collaborator.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::SourceError;

/// File extension registered templates carry.
pub const TEMPLATE_EXT: &str = "weft";

/// A file stem starting with an underscore marks a partial template.
pub fn is_partial_stem(stem: &str) -> bool {
  stem.starts_with('_')
}

/// Registered name for a file stem: partials drop the underscore marker.
pub fn template_name(stem: &str) -> &str {
  stem.strip_prefix('_').unwrap_or(stem)
}

/// Scan `root` recursively for `*.weft` files into a read-only name→path
/// table. Templates in subdirectories register as `dir/name` with `/`
/// separators regardless of platform.
pub fn build_registry(root: &Path) -> Result<HashMap<String, PathBuf>, SourceError> {
  let mut table = HashMap::new();
  scan_dir(root, "", &mut table)?;
  Ok(table)
}

fn scan_dir(
  dir: &Path,
  prefix: &str,
  table: &mut HashMap<String, PathBuf>,
) -> Result<(), SourceError> {
  let entries =
    fs::read_dir(dir).map_err(|e| SourceError::new(format!("{}: {}", dir.display(), e)))?;
  for entry in entries {
    let entry = entry.map_err(|e| SourceError::new(format!("{}: {}", dir.display(), e)))?;
    let path = entry.path();
    if path.is_dir() {
      let sub = format!("{}{}/", prefix, entry.file_name().to_string_lossy());
      scan_dir(&path, &sub, table)?;
    } else if path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXT) {
      if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        table.insert(format!("{}{}", prefix, template_name(stem)), path.clone());
      }
    }
  }
  Ok(())
}
