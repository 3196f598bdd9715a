//! Archive extraction functionality.
//!
//! Artifacts whose destination ends in `.zip` are unpacked into the
//! destination's parent directory once downloaded, and the archive is removed.

pub mod extract;

pub use extract::{extract, is_archive, unpack_in_place};
