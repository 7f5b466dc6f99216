use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

const CATALOG_MARKER: &str = "pokedex.json";

/// Nearest `data/` directory holding a catalog, walking up from `start`.
pub fn find_data_dir(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let candidate = dir.join("data");
        if candidate.join(CATALOG_MARKER).is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// An explicit directory wins; otherwise search upward from the current
/// directory.
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    let cwd = std::env::current_dir()?;
    match find_data_dir(&cwd) {
        Some(dir) => Ok(dir),
        None => bail!(
            "no data/{CATALOG_MARKER} found above {}; pass --data-dir or set MOVE_FINDER_DATA",
            cwd.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_data_dir_walks_up() {
        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let found = find_data_dir(&crate_dir.join("src")).unwrap();
        assert!(found.join(CATALOG_MARKER).is_file());
        assert!(found.ends_with("data"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = PathBuf::from("/nowhere/data");
        assert_eq!(resolve_data_dir(Some(dir.clone())).unwrap(), dir);
    }
}
