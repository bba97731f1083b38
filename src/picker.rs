//! Image picker
//!
//! A modal directory browser that stands in for a photo library. It lists
//! subdirectories and image files; choosing a file decodes it. While open,
//! the entry form receives no input.

use crate::error::Result;
use crate::recipe::RecipeImage;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One line in the picker listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEntry {
    Parent(PathBuf),
    Directory(PathBuf),
    Image(PathBuf),
}

impl PickerEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::Parent(p) | Self::Directory(p) | Self::Image(p) => p,
        }
    }

    /// Text shown in the listing
    pub fn label(&self) -> String {
        match self {
            Self::Parent(_) => "..".to_string(),
            Self::Directory(p) => format!("{}/", file_name(p)),
            Self::Image(p) => file_name(p),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// What activating the selected entry produced
#[derive(Debug)]
pub enum PickerAction {
    /// Moved into another directory; the picker stays open
    Navigated,
    /// A picture was decoded and the picker can close
    Chosen(RecipeImage),
    /// Nothing to activate (empty listing)
    None,
}

/// Browser state while the picker is open
#[derive(Debug, Clone)]
pub struct ImagePickerState {
    dir: PathBuf,
    extensions: Vec<String>,
    entries: Vec<PickerEntry>,
    selected: usize,
    /// Last read or decode failure, shown inside the picker
    pub error: Option<String>,
}

impl ImagePickerState {
    /// Open the picker on `dir`, offering files with the given extensions
    pub fn open(dir: &Path, extensions: &[String]) -> Result<Self> {
        let mut state = Self {
            dir: PathBuf::new(),
            extensions: extensions.iter().map(|e| e.to_lowercase()).collect(),
            entries: Vec::new(),
            selected: 0,
            error: None,
        };
        state.load_dir(dir)?;
        Ok(state)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[PickerEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&PickerEntry> {
        self.entries.get(self.selected)
    }

    fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| self.extensions.contains(&e))
    }

    fn load_dir(&mut self, dir: &Path) -> Result<()> {
        let dir = dir.canonicalize()?;
        let mut dirs = Vec::new();
        let mut images = Vec::new();

        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                dirs.push(path);
            } else if self.is_image(&path) {
                images.push(path);
            }
        }
        dirs.sort();
        images.sort();

        let mut entries = Vec::with_capacity(dirs.len() + images.len() + 1);
        if let Some(parent) = dir.parent() {
            entries.push(PickerEntry::Parent(parent.to_path_buf()));
        }
        entries.extend(dirs.into_iter().map(PickerEntry::Directory));
        entries.extend(images.into_iter().map(PickerEntry::Image));

        debug!("Picker listing {:?}: {} entries", dir, entries.len());
        self.dir = dir;
        self.entries = entries;
        self.selected = 0;
        self.error = None;
        Ok(())
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn move_to_first(&mut self) {
        self.selected = 0;
    }

    pub fn move_to_last(&mut self) {
        self.selected = self.entries.len().saturating_sub(1);
    }

    /// Go to the parent directory, if there is one
    pub fn ascend(&mut self) {
        if let Some(parent) = self.dir.parent().map(Path::to_path_buf) {
            self.navigate(&parent);
        }
    }

    fn navigate(&mut self, dir: &Path) {
        if let Err(e) = self.load_dir(dir) {
            warn!("Cannot open {:?}: {}", dir, e);
            self.error = Some(format!("Cannot open {}: {}", dir.display(), e));
        }
    }

    /// Activate the selected entry.
    ///
    /// A file that fails to decode keeps the picker open with `error` set.
    pub fn activate(&mut self) -> PickerAction {
        let Some(entry) = self.selected_entry().cloned() else {
            return PickerAction::None;
        };
        match entry {
            PickerEntry::Parent(dir) | PickerEntry::Directory(dir) => {
                self.navigate(&dir);
                PickerAction::Navigated
            }
            PickerEntry::Image(path) => match RecipeImage::load(&path) {
                Ok(image) => PickerAction::Chosen(image),
                Err(e) => {
                    warn!("Failed to load image {:?}: {}", path, e);
                    self.error = Some(format!("{}: {}", file_name(&path), e));
                    PickerAction::None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn extensions() -> Vec<String> {
        vec!["png".to_string(), "jpg".to_string()]
    }

    fn write_png(path: &Path) {
        RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]))
            .save(path)
            .unwrap();
    }

    #[test]
    fn test_listing_order_and_filter() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        write_png(&dir.path().join("b.png"));
        write_png(&dir.path().join("A.PNG"));
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let picker = ImagePickerState::open(dir.path(), &extensions()).unwrap();
        let labels: Vec<String> = picker.entries().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["..", "alpha/", "zeta/", "A.PNG", "b.png"]);
    }

    #[test]
    fn test_navigation_bounds() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("one.png"));
        let mut picker = ImagePickerState::open(dir.path(), &extensions()).unwrap();

        picker.move_up();
        assert_eq!(picker.selected(), 0);
        picker.move_down();
        picker.move_down();
        assert_eq!(picker.selected(), 1);
        picker.move_to_first();
        assert_eq!(picker.selected(), 0);
        picker.move_to_last();
        assert_eq!(picker.selected(), 1);
    }

    #[test]
    fn test_enter_directory_and_ascend() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("photos")).unwrap();
        let mut picker = ImagePickerState::open(dir.path(), &extensions()).unwrap();
        let root = picker.dir().to_path_buf();

        picker.move_down();
        assert!(matches!(picker.activate(), PickerAction::Navigated));
        assert!(picker.dir().ends_with("photos"));

        picker.ascend();
        assert_eq!(picker.dir(), root.as_path());
    }

    #[test]
    fn test_choose_image() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("cake.png"));
        let mut picker = ImagePickerState::open(dir.path(), &extensions()).unwrap();

        picker.move_to_last();
        match picker.activate() {
            PickerAction::Chosen(image) => assert_eq!((image.width(), image.height()), (2, 2)),
            other => panic!("expected a chosen image, got {:?}", other),
        }
    }

    #[test]
    fn test_broken_image_keeps_picker_open() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.png"), b"nope").unwrap();
        let mut picker = ImagePickerState::open(dir.path(), &extensions()).unwrap();

        picker.move_to_last();
        assert!(matches!(picker.activate(), PickerAction::None));
        assert!(picker.error.as_deref().is_some_and(|e| e.starts_with("broken.png")));
    }

    #[test]
    fn test_open_missing_dir_fails() {
        assert!(ImagePickerState::open(Path::new("/no/such/dir/here"), &extensions()).is_err());
    }
}
