//! Image CDN URL building for CMS assets.
//!
//! Raw asset URLs coming out of the CMS point at the origin bucket. When an
//! imgix-style CDN is configured we rewrite them into signed, transformed
//! CDN URLs; when it isn't, the raw URL is handed back untouched so a missing
//! CDN never fails a request.
//!
//! ## What lives here
//!
//! - [`ImgixConfig`] - CDN domain + signing key, resolved once at start-up
//! - [`TransformSpec`] - width/height/crop/fit/format options with house defaults
//! - [`ImageUrlBuilder`] - the signer/pass-through switch
//! - [`build_hero_image`] - the four-variant hero block used across content types
//!
//! ## Example
//!
//! ```
//! use images::{ImageUrlBuilder, ImgixConfig, TransformSpec};
//!
//! let builder = ImageUrlBuilder::new(Some(ImgixConfig::new("media.example.org", "secret")));
//! let url = builder.build(
//!     "https://origin.example.org/uploads/photo.jpg",
//!     &TransformSpec::new().width(100).height(100),
//! );
//! assert!(url.starts_with("https://media.example.org/uploads/photo.jpg?"));
//!
//! let passthrough = ImageUrlBuilder::passthrough();
//! assert_eq!(
//!     passthrough.build("https://origin.example.org/a.jpg", &TransformSpec::new()),
//!     "https://origin.example.org/a.jpg"
//! );
//! ```

mod asset;
mod builder;
mod config;
mod hero;
mod spec;

pub use crate::asset::Asset;
pub use crate::builder::ImageUrlBuilder;
pub use crate::config::{ImgixConfig, IMGIX_DOMAIN_ENV, IMGIX_SIGN_KEY_ENV};
pub use crate::hero::{build_hero_image, HeroImage, HeroImageUrls};
pub use crate::spec::TransformSpec;
