use std::path::{Path, PathBuf};

/// Base filename of a path, the identity used for deduplication and for
/// naming outputs in the destination folder.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Insertion-ordered set of input images, unique by base filename.
///
/// Two directories holding files with the same name count as the same image;
/// the first one added wins.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: Vec<PathBuf>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless an entry with the same base filename is already
    /// present. Returns whether the path was added.
    pub fn add(&mut self, path: PathBuf) -> bool {
        let name = base_name(&path);
        if self.items.iter().any(|existing| base_name(existing) == name) {
            return false;
        }
        self.items.push(path);
        true
    }

    /// Bulk [`add`](Self::add); returns how many paths were appended.
    pub fn extend<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut added = 0;
        for path in paths {
            if self.add(path) {
                added += 1;
            }
        }
        added
    }

    /// Remove an entry by exact path identity. Returns whether one existed.
    pub fn remove(&mut self, path: &Path) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing != path);
        before != self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_by_base_filename_across_directories() {
        let mut selection = Selection::new();
        assert!(selection.add(PathBuf::from("/a/cat.png")));
        assert!(!selection.add(PathBuf::from("/b/cat.png")));
        assert!(selection.add(PathBuf::from("/b/dog.png")));
        assert_eq!(selection.len(), 2);
        // first occurrence wins
        assert_eq!(
            selection.iter().next(),
            Some(&PathBuf::from("/a/cat.png"))
        );
    }

    #[test]
    fn preserves_insertion_order() {
        let mut selection = Selection::new();
        let added = selection.extend([
            PathBuf::from("/x/c.png"),
            PathBuf::from("/x/a.png"),
            PathBuf::from("/x/b.png"),
            PathBuf::from("/y/a.png"),
        ]);
        assert_eq!(added, 3);
        let names: Vec<String> = selection.iter().map(|p| base_name(p)).collect();
        assert_eq!(names, ["c.png", "a.png", "b.png"]);
    }

    #[test]
    fn remove_and_clear() {
        let mut selection = Selection::new();
        selection.extend([PathBuf::from("/x/a.png"), PathBuf::from("/x/b.png")]);

        assert!(selection.remove(Path::new("/x/a.png")));
        assert!(!selection.remove(Path::new("/x/a.png")));
        assert_eq!(selection.len(), 1);

        // a removed name can be re-added
        assert!(selection.add(PathBuf::from("/z/a.png")));

        selection.clear();
        assert!(selection.is_empty());
    }
}
