//! Texture error types.

use thiserror::Error;

/// Errors that can occur while turning bytes into host textures.
#[derive(Error, Debug)]
pub enum TextureError {
    /// The format hint does not name an image container the decoder knows.
    #[error("unknown image format '{0}'")]
    UnknownFormat(String),

    /// The buffer is not a valid image of the stated format.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Pixel buffer length does not match the stated dimensions.
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A specialized Result type for texture operations.
pub type TextureResult<T> = std::result::Result<T, TextureError>;
