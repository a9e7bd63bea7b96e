use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Return the one directory that directly contains every path, or None.
///
/// - Paths are compared component-wise, so `/a//b/x` and `/a/b/y` agree on `/a/b`.
/// - A bare filename contributes the empty parent `""` like any other value.
/// - A path without a parent (a filesystem root) contributes nothing.
/// - Zero or several distinct parents yield None.
pub fn common_parent<P: AsRef<Path>>(paths: &[P]) -> Option<PathBuf> {
    let parents: BTreeSet<&Path> = paths.iter().filter_map(|p| p.as_ref().parent()).collect();

    if parents.len() == 1 {
        parents.into_iter().next().map(Path::to_path_buf)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_yields_its_directory() {
        assert_eq!(common_parent(&["/a/b/x.txt"]), Some(PathBuf::from("/a/b")));
    }

    #[test]
    fn distinct_directories_yield_none() {
        assert_eq!(common_parent(&["/a/b/x.txt", "/a/c/y.txt"]), None);
    }

    #[test]
    fn duplicates_and_mixed_kinds_share_parent() {
        let paths = ["/a/b/x.txt", "/a/b/sub", "/a/b/x.txt"];
        assert_eq!(common_parent(&paths), Some(PathBuf::from("/a/b")));
    }

    #[test]
    fn bare_filenames_share_empty_parent() {
        assert_eq!(common_parent(&["x.txt", "y.txt"]), Some(PathBuf::new()));
    }

    #[test]
    fn bare_filename_mixed_with_absolute_yields_none() {
        assert_eq!(common_parent(&["x.txt", "/a/b/y.txt"]), None);
    }

    #[test]
    fn root_only_yields_none() {
        assert_eq!(common_parent(&["/"]), None);
    }

    #[test]
    fn empty_input_yields_none() {
        let none: [&str; 0] = [];
        assert_eq!(common_parent(&none), None);
    }
}
