// Bucket listing with region lookups
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Buckets,
    BucketStore,
    Result,
};
use tracing::{
    debug,
    warn,
};

/// Returns every bucket visible to `store`, with regions resolved.
///
/// Only a failure of the listing itself is an error. Buckets whose region
/// can't be found are still returned, without a region.
pub async fn list_buckets<S>(store: &S) -> Result<Buckets>
where
    S: BucketStore,
{
    let mut buckets = store.list_buckets().await?;

    resolve_regions(store, &mut buckets).await;

    Ok(buckets)
}

/// Looks up the region of each bucket, one at a time.
pub async fn resolve_regions<S>(store: &S, buckets: &mut Buckets)
where
    S: BucketStore,
{
    for bucket in buckets.iter_mut() {
        debug!("Retrieving location for '{}'", bucket.name);

        match store.bucket_region(&bucket.name).await {
            Ok(region) => bucket.region = Some(region),
            Err(e)     => {
                warn!("{}", e);
                bucket.region = None;
            },
        }
    }
}
