// BucketStore and StoreFactory traits
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use super::{
    Buckets,
    ObjectVersions,
    Region,
    Result,
};

/// `BucketStore` represents the required methods to list S3 buckets and
/// remove them.
///
/// A store is bound to a single `Region`. Object and bucket deletion must go
/// through a store bound to the bucket's own region.
#[async_trait]
pub trait BucketStore: Send + Sync {
    /// The region this store talks to.
    fn region(&self) -> &Region;

    /// Returns every bucket visible to the credentials, in the order S3
    /// returns them. Regions are not resolved here.
    async fn list_buckets(&self) -> Result<Buckets>;

    /// Returns the region that `bucket` lives in.
    async fn bucket_region(&self, bucket: &str) -> Result<Region>;

    /// Deletes every object in `bucket`, returning how many were deleted.
    async fn empty_bucket(
        &self,
        bucket: &str,
        versions: ObjectVersions,
    ) -> Result<usize>;

    /// Deletes the, already empty, `bucket`.
    async fn delete_bucket(&self, bucket: &str) -> Result<()>;

    /// Waits until S3 reports that `bucket` no longer exists.
    async fn wait_until_gone(&self, bucket: &str) -> Result<()>;
}

/// Builds `BucketStore`s bound to a given region.
#[async_trait]
pub trait StoreFactory: Send + Sync {
    /// The store type produced by this factory.
    type Store: BucketStore;

    /// Returns a store bound to `region`.
    async fn store(&self, region: &Region) -> Result<Self::Store>;
}
