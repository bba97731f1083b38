//! Error handling module for recipetui
//!
//! Provides centralized error types using thiserror. Recipe operations
//! themselves never fail; these errors come from the terminal loop and from
//! reading images in the picker. Configuration and startup use anyhow.

use thiserror::Error;

/// Main error type for recipetui
#[derive(Error, Debug)]
pub enum RecipeTuiError {
    /// IO errors (directory listing, terminal drawing and input)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding errors from the picker
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias for recipetui operations
pub type Result<T> = std::result::Result<T, RecipeTuiError>;
