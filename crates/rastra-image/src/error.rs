/// An error type for image container and resampling operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the declared image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a source or destination dimension is zero.
    #[error("Invalid image size, got ({0}x{1}) -> ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when casting the pixel data to a different type.
    #[error("Failed to cast image data")]
    CastError,
}
