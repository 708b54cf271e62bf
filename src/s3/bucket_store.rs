// Implement the BucketStore trait for the s3::Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use async_trait::async_trait;
use crate::common::{
    Buckets,
    BucketStore,
    ObjectVersions,
    Region,
    Result,
    StoreFactory,
};
use super::client::{
    Client,
    ClientFactory,
};
use tracing::debug;

#[async_trait]
impl BucketStore for Client {
    fn region(&self) -> &Region {
        &self.region
    }

    /// Return `Buckets` discovered in S3, without their regions.
    async fn list_buckets(&self) -> Result<Buckets> {
        Client::list_buckets(self).await
    }

    async fn bucket_region(&self, bucket: &str) -> Result<Region> {
        self.get_bucket_location(bucket).await
    }

    /// Delete the objects selected by `versions` from `bucket`.
    async fn empty_bucket(
        &self,
        bucket: &str,
        versions: ObjectVersions,
    ) -> Result<usize> {
        debug!("empty_bucket: '{}' with {:?}", bucket, versions);

        match versions {
            ObjectVersions::All => {
                self.delete_object_versions(bucket).await
            },
            ObjectVersions::Current => {
                self.delete_current_objects(bucket).await
            },
        }
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        Client::delete_bucket(self, bucket).await
    }

    async fn wait_until_gone(&self, bucket: &str) -> Result<()> {
        self.wait_until_bucket_not_exists(bucket).await
    }
}

#[async_trait]
impl StoreFactory for ClientFactory {
    type Store = Client;

    async fn store(&self, region: &Region) -> Result<Client> {
        Ok(self.client(region))
    }
}
