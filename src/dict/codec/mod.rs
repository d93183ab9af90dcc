//! Codec layer turning legacy bytes into UTF-8 text and styled runs.
//!
//! # Submodules
//!
//! - [`charset`][]: The three legacy byte tables (ISO-8859-2, windows-1250, phonetic)
//! - [`sap_markup`][]: SAP control-character interpreter
//! - [`ydp_markup`][]: YDP control-word interpreter with group state

pub mod charset;
pub mod sap_markup;
pub mod ydp_markup;
