//! Recipe records
//!
//! A [`Recipe`] is built once, fully formed, and never changes afterwards.
//! Fields are private and only readable through getters.

use crate::error::Result;
use crate::types::Category;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Opaque recipe identity, used as a stable selection key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecipeId(Uuid);

impl RecipeId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecipeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resampled sizes kept per picture. The screens use at most three
/// (row thumbnail, entry preview, detail), plus one stale detail size
/// after a terminal resize.
const MAX_CACHED_SIZES: usize = 4;

type ScaledCache = Arc<Mutex<HashMap<(u32, u32), Arc<RgbaImage>>>>;

/// Decoded picture attached to a recipe
///
/// Clones share both the decoded payload and the cache of resampled
/// copies, so the form's image and the stored recipe's image resample once.
#[derive(Clone)]
pub struct RecipeImage {
    pixels: Arc<DynamicImage>,
    source: Option<PathBuf>,
    scaled: ScaledCache,
}

impl RecipeImage {
    /// Wrap an already decoded image
    pub fn from_image(pixels: DynamicImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
            source: None,
            scaled: ScaledCache::default(),
        }
    }

    /// Read and decode an image file
    pub fn load(path: &Path) -> Result<Self> {
        let pixels = image::ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?;
        Ok(Self {
            pixels: Arc::new(pixels),
            source: Some(path.to_path_buf()),
            scaled: ScaledCache::default(),
        })
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    /// File the image was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Short label for the form and the picker status line
    pub fn describe(&self) -> String {
        let name = self
            .source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        format!("{} ({}x{})", name, self.width(), self.height())
    }

    /// The picture resampled to exactly `width x height`.
    ///
    /// Each size is computed once and reused on later frames.
    pub fn resized(&self, width: u32, height: u32) -> Arc<RgbaImage> {
        let key = (width, height);
        if let Some(hit) = self
            .scaled
            .lock()
            .ok()
            .and_then(|cache| cache.get(&key).cloned())
        {
            return hit;
        }

        let resampled = Arc::new(
            self.pixels
                .resize_exact(width, height, FilterType::Triangle)
                .to_rgba8(),
        );
        if let Ok(mut cache) = self.scaled.lock() {
            if cache.len() >= MAX_CACHED_SIZES {
                cache.clear();
            }
            cache.insert(key, Arc::clone(&resampled));
        }
        resampled
    }

    /// Number of resampled sizes currently cached
    pub fn cached_sizes(&self) -> usize {
        self.scaled.lock().map(|cache| cache.len()).unwrap_or(0)
    }

    /// Whether two handles share the same decoded payload
    pub fn same_payload(&self, other: &RecipeImage) -> bool {
        Arc::ptr_eq(&self.pixels, &other.pixels)
    }
}

impl fmt::Debug for RecipeImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("source", &self.source)
            .finish()
    }
}

/// One catalog entry
#[derive(Debug, Clone)]
pub struct Recipe {
    id: RecipeId,
    name: String,
    category: Category,
    image: Option<RecipeImage>,
}

impl Recipe {
    /// Build a recipe; no field is validated
    pub fn new(name: impl Into<String>, category: Category, image: Option<RecipeImage>) -> Self {
        Self {
            id: RecipeId::new(),
            name: name.into(),
            category,
            image,
        }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn image(&self) -> Option<&RecipeImage> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_ids_are_unique() {
        let a = Recipe::new("A", Category::Dessert, None);
        let b = Recipe::new("A", Category::Dessert, None);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_fields_are_kept_verbatim() {
        let recipe = Recipe::new("", Category::Entree, None);
        assert_eq!(recipe.name(), "");
        assert_eq!(recipe.category(), Category::Entree);
        assert!(recipe.image().is_none());
    }

    #[test]
    fn test_describe_without_source() {
        let img = RecipeImage::from_image(DynamicImage::ImageRgba8(RgbaImage::new(3, 2)));
        assert_eq!(img.describe(), "image (3x2)");
        assert!(img.source().is_none());
    }

    #[test]
    fn test_load_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(RecipeImage::load(&path).is_err());
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("soup.png");
        RgbaImage::from_pixel(5, 4, image::Rgba([200, 10, 10, 255]))
            .save(&path)
            .unwrap();

        let img = RecipeImage::load(&path).unwrap();
        assert_eq!((img.width(), img.height()), (5, 4));
        assert_eq!(img.source(), Some(path.as_path()));
        assert_eq!(img.describe(), "soup.png (5x4)");
    }

    #[test]
    fn test_resized_is_computed_once_per_size() {
        let img = RecipeImage::from_image(DynamicImage::ImageRgba8(RgbaImage::new(40, 30)));
        let first = img.resized(4, 3);
        let second = img.resized(4, 3);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!((first.width(), first.height()), (4, 3));

        // Clones share the cache
        let copy = img.clone();
        assert!(Arc::ptr_eq(&copy.resized(4, 3), &first));
        assert_eq!(img.cached_sizes(), 1);
    }

    #[test]
    fn test_resized_cache_is_bounded() {
        let img = RecipeImage::from_image(DynamicImage::ImageRgba8(RgbaImage::new(8, 8)));
        for side in 1..=10 {
            img.resized(side, side);
        }
        assert!(img.cached_sizes() <= MAX_CACHED_SIZES);
    }
}
