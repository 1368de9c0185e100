//! Service layer exposing partitions to the HTTP surface.
//! - Data access goes through the `PartitionRepository` seam.
//! - Records leave this crate as `PartitionView`, with asset paths resolved
//!   to public URLs by `AssetUrls`.

pub mod errors;
pub mod assets;
pub mod partition;
#[cfg(test)]
pub mod test_support;
