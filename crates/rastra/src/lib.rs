#![doc = env!("CARGO_PKG_DESCRIPTION")]
#![deny(missing_docs)]

#[doc(inline)]
pub use rastra_image as image;

#[doc(inline)]
pub use rastra_imgproc as imgproc;
