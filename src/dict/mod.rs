//! Core dictionary reader module
//!
//! Layers, bottom-up:
//! - [`types`]: errors, shared models and the [`Engine`](types::engines::Engine) trait
//! - [`codec`]: legacy byte tables and the two markup interpreters
//! - [`format`]: SAP and YDP container parsing
//! - [`reader`] / [`dictionary`]: the dictionary handle, per engine and runtime-selected
//! - [`locator`]: approximate prefix search over the word list

pub mod codec;
pub mod dictionary;
pub mod format;
pub mod iter;
pub mod locator;
pub mod reader;
pub mod types;
mod utils;

pub use dictionary::Dictionary;
pub use reader::DictReader;
pub use types::error::{DictError, Result};
