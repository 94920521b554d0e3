//! # `tagdir_types`
//!
//! Plain data for the `tagdir` crate: byte orders, primitive types, decoded
//! values, directory kinds, vendor tag tables, and maker-note layouts.
//!
//! Nothing in here touches a byte stream. The engine in `tagdir` reads the
//! tables defined here to decide how to walk a TIFF blob.

#![forbid(unsafe_code)]

pub mod kind;
pub mod makernote;
pub mod primitives;
pub mod rules;
pub mod tags;
pub mod value;
