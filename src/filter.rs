// Bucket name filtering
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::Buckets;
use tracing::debug;

/// Keeps the buckets whose name contains `substring`, in their original
/// order.
///
/// The match is literal and case sensitive. An empty `substring` matches
/// every bucket.
pub fn filter(mut buckets: Buckets, substring: &str) -> Buckets {
    debug!("Filtering bucket list for '{}'", substring);

    buckets.retain(|b| b.name.contains(substring));
    buckets
}
