//! File format parsing layer for SAP and YDP dictionary files.
//!
//! This module sits between raw file I/O and the high-level
//! [`DictReader`](crate::dict::reader::DictReader): it turns container bytes
//! into [`Entry`](crate::dict::types::models::Entry) lists and fetches raw
//! definition bytes. Decoding the definitions is left to the `codec` layer.
//!
//! - [`sap`]: single paged `.dic` file
//! - [`ydp`]: `.IDX` word table plus `.DAT` definition file

pub mod sap;
pub mod ydp;
