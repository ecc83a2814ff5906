//! Helper functions for templates and handlers

mod html;
mod url;

pub use html::*;
pub use url::*;
