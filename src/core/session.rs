use std::path::{Path, PathBuf};

use crate::core::selection::Selection;

/// Mutable state a frontend builds up before a run: the selected images and
/// the destination folder. Owned by the frontend and passed by reference
/// into the batch runner; there is no process-wide state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: Selection,
    destination: Option<PathBuf>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add images to the selection, skipping duplicate base filenames.
    /// Returns how many were actually added.
    pub fn add_images<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.selection.extend(paths)
    }

    /// Remove one image by exact path. Returns whether it was present.
    pub fn remove_image(&mut self, path: &Path) -> bool {
        self.selection.remove(path)
    }

    /// Clear the selection wholesale.
    pub fn reset_selection(&mut self) {
        self.selection.clear();
    }

    pub fn set_destination(&mut self, dir: PathBuf) {
        self.destination = Some(dir);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }
}
