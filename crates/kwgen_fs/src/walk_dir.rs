use std::path::{Path, PathBuf};

/// Looks for `name` in `start` and then in each of its ancestors.
pub fn walk_for_file(start: impl AsRef<Path>, name: &str) -> Option<PathBuf> {
    start
        .as_ref()
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
