//! Form Embed - iframe source construction
//!
//! Turns a form reference plus an options bag into the URL the embedded
//! form iframe is loaded from.
//!
//! ## Core Design
//!
//! ```text
//! EmbedOptions + HostPage → query params (ordered) → ?query#fragment
//!                               ↓
//!                     application/x-www-form-urlencoded
//! ```
//!
//! Host page reads (title, url, headings) go through the [`HostPage`] trait,
//! so nothing here touches a real document.

pub mod error;
pub mod host;
pub mod options;
pub mod src_builder;
pub mod types;
pub mod utils;

pub use error::{EmbedError, Result};
pub use host::{HostPage, StaticHostPage};
pub use options::EmbedOptions;
pub use src_builder::{build_iframe_src, BuildParams};
pub use types::*;
