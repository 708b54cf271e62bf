// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::client::Waiters;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::types::{
    Delete,
    ObjectIdentifier,
};
use aws_types::SdkConfig;
use crate::common::{
    Bucket,
    Buckets,
    ClientConfig,
    Error,
    Region,
    Result,
};
use std::time::Duration;
use tracing::debug;

/// DeleteObjects accepts at most this many keys per request.
const MAX_DELETE_BATCH: usize = 1_000;

/// How long to wait for S3 to report a deleted bucket as gone.
const MAX_BUCKET_WAIT: Duration = Duration::from_secs(300);

// Render SDK errors with their service error code and message.
fn reason<E: std::error::Error>(error: E) -> String {
    DisplayErrorContext(error).to_string()
}

/// Builds region bound S3 `Client`s from a single loaded AWS configuration.
pub struct ClientFactory {
    /// Custom endpoint URL, if any.
    endpoint: Option<String>,

    /// Shared configuration for the selected profile.
    sdk_config: SdkConfig,
}

impl ClientFactory {
    /// Loads the AWS configuration for the profile in the `ClientConfig` and
    /// checks that credentials can be resolved for it.
    pub async fn new(config: &ClientConfig) -> Result<Self> {
        let profile = &config.profile;

        debug!(
            "new: Loading AWS config for profile '{}' in region '{}'",
            profile,
            config.region.name(),
        );

        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(profile)
            .region(config.region.clone())
            .load()
            .await;

        let authentication_error = |reason: String| Error::Authentication {
            profile: profile.to_owned(),
            reason:  reason,
        };

        let provider = sdk_config.credentials_provider()
            .ok_or_else(|| {
                authentication_error("no credentials provider".into())
            })?;

        provider.provide_credentials()
            .await
            .map_err(|e| authentication_error(reason(e)))?;

        debug!("new: Credentials resolved for profile '{}'", profile);

        Ok(Self {
            endpoint:   config.endpoint.clone(),
            sdk_config: sdk_config,
        })
    }

    /// Returns a `Client` bound to `region`.
    ///
    /// This doesn't make any network calls.
    pub fn client(&self, region: &Region) -> Client {
        debug!("client: Creating S3Client in region '{}'", region.name());

        let region_override = region.aws_region()
            .or_else(|| self.sdk_config.region().cloned());

        let mut builder = S3ConfigBuilder::from(&self.sdk_config)
            .region(region_override);

        // S3 compatible stores rarely support virtual hosted buckets.
        if let Some(endpoint) = &self.endpoint {
            builder = builder
                .endpoint_url(endpoint)
                .force_path_style(true);
        }

        Client {
            client: S3Client::from_conf(builder.build()),
            region: region.clone(),
        }
    }
}

/// The S3 `Client`.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,

    /// `Region` that the client sends requests to.
    pub region: Region,
}

impl Client {
    /// Returns every bucket owned by the credentials.
    ///
    /// ListBuckets isn't paginated, all buckets come back in one response.
    pub async fn list_buckets(&self) -> Result<Buckets> {
        debug!("list_buckets: Listing...");

        let output = self.client.list_buckets()
            .send()
            .await
            .map_err(|e| Error::List(reason(e)))?;

        let buckets = output.buckets()
            .iter()
            .filter_map(|b| {
                let name = b.name()?;

                Some(Bucket {
                    creation_date: b.creation_date().copied(),
                    ..Bucket::new(name)
                })
            })
            .collect();

        Ok(buckets)
    }

    /// Return the bucket location (`Region`) for the given `bucket`.
    ///
    /// This method will properly handle the case of the `null` (empty) and
    /// `EU` location constraints, by replacing them with `us-east-1` and
    /// `eu-west-1` respectively.
    pub async fn get_bucket_location(&self, bucket: &str) -> Result<Region> {
        debug!("get_bucket_location for '{}'", bucket);

        let output = self.client.get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| Error::RegionLookup {
                bucket: bucket.into(),
                reason: reason(e),
            })?;

        let location = output.location_constraint()
            .map(|constraint| constraint.as_str());

        debug!("GetBucketLocation API returned '{:?}'", location);

        Ok(Region::from_location_constraint(location))
    }

    /// Delete the current objects in the bucket.
    ///
    /// Objects are listed a page at a time and each page is deleted before
    /// moving on to the next.
    pub async fn delete_current_objects(&self, bucket: &str) -> Result<usize> {
        debug!("delete_current_objects for '{}'", bucket);

        let mut continuation_token = None;
        let mut deleted            = 0;

        // Loop until all objects are processed.
        loop {
            let output = self.client.list_objects_v2()
                .bucket(bucket)
                .set_continuation_token(continuation_token)
                .send()
                .await
                .map_err(|e| delete_objects_error(bucket, reason(e)))?;

            let objects = output.contents()
                .iter()
                .filter_map(|o| o.key())
                .map(|key| ObjectIdentifier::builder().key(key).build())
                .collect::<std::result::Result<Vec<_>, _>>()?;

            deleted += self.delete_objects(bucket, objects).await?;

            // If the output was truncated (Some(true)), we should have a
            // next_continuation_token.
            // If it wasn't, (Some(false) | None) we're done and can break.
            // A truncated page without a token would list the same page
            // again forever.
            match output.is_truncated() {
                Some(true) => {
                    let nct = output.next_continuation_token()
                        .ok_or_else(|| missing_marker(bucket, "NextContinuationToken"))?;

                    continuation_token = Some(nct.to_string());
                },
                _ => break,
            }
        }

        Ok(deleted)
    }

    /// Delete every object version and delete marker in the bucket.
    ///
    /// Needed to empty buckets that have, or had, versioning enabled.
    pub async fn delete_object_versions(&self, bucket: &str) -> Result<usize> {
        debug!("delete_object_versions for '{}'", bucket);

        let mut next_key_marker        = None;
        let mut next_version_id_marker = None;
        let mut deleted                = 0;

        // Loop until all object versions are processed
        loop {
            let output = self.client.list_object_versions()
                .bucket(bucket)
                .set_key_marker(next_key_marker)
                .set_version_id_marker(next_version_id_marker)
                .send()
                .await
                .map_err(|e| delete_objects_error(bucket, reason(e)))?;

            let versions = output.versions()
                .iter()
                .map(|v| (v.key(), v.version_id()));

            let markers = output.delete_markers()
                .iter()
                .map(|m| (m.key(), m.version_id()));

            let objects = versions
                .chain(markers)
                .filter_map(|(key, version_id)| Some((key?, version_id)))
                .map(|(key, version_id)| {
                    ObjectIdentifier::builder()
                        .key(key)
                        .set_version_id(version_id.map(String::from))
                        .build()
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;

            deleted += self.delete_objects(bucket, objects).await?;

            // Check if we need to continue processing bucket output and store
            // the continuation tokens for the next loop if so.
            // NextVersionIdMarker may legitimately be absent, NextKeyMarker
            // may not.
            match output.is_truncated() {
                Some(true) => {
                    let nkm  = output.next_key_marker()
                        .ok_or_else(|| missing_marker(bucket, "NextKeyMarker"))?;
                    let nvim = output.next_version_id_marker();

                    next_key_marker        = Some(nkm.to_string());
                    next_version_id_marker = nvim.map(String::from);
                },
                _ => break,
            }
        }

        Ok(deleted)
    }

    /// Deletes `objects` from `bucket` in batches, returning how many were
    /// deleted.
    ///
    /// Any per-key error reported by S3 fails the whole call.
    async fn delete_objects(
        &self,
        bucket: &str,
        objects: Vec<ObjectIdentifier>,
    ) -> Result<usize> {
        let mut deleted = 0;

        for batch in objects.chunks(MAX_DELETE_BATCH) {
            debug!(
                "delete_objects: Deleting {} objects from '{}'",
                batch.len(),
                bucket,
            );

            let delete = Delete::builder()
                .set_objects(Some(batch.to_vec()))
                .quiet(true)
                .build()?;

            let output = self.client.delete_objects()
                .bucket(bucket)
                .delete(delete)
                .send()
                .await
                .map_err(|e| delete_objects_error(bucket, reason(e)))?;

            let errors = output.errors();

            if let Some(error) = errors.first() {
                let reason = format!(
                    "{} object(s) failed, first '{}': {}: {}",
                    errors.len(),
                    error.key().unwrap_or_default(),
                    error.code().unwrap_or_default(),
                    error.message().unwrap_or_default(),
                );

                return Err(delete_objects_error(bucket, reason));
            }

            deleted += batch.len();
        }

        Ok(deleted)
    }

    /// Delete the, already empty, `bucket`.
    pub async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        debug!("delete_bucket for '{}'", bucket);

        self.client.delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| Error::DeleteBucket {
                bucket: bucket.into(),
                reason: reason(e),
            })?;

        Ok(())
    }

    /// Poll HeadBucket until S3 stops reporting `bucket` as existing.
    pub async fn wait_until_bucket_not_exists(&self, bucket: &str) -> Result<()> {
        debug!("wait_until_bucket_not_exists for '{}'", bucket);

        self.client.wait_until_bucket_not_exists()
            .bucket(bucket)
            .wait(MAX_BUCKET_WAIT)
            .await
            .map_err(|e| Error::WaitBucketGone {
                bucket: bucket.into(),
                reason: reason(e),
            })?;

        Ok(())
    }
}

fn delete_objects_error(bucket: &str, reason: String) -> Error {
    Error::DeleteObjects {
        bucket: bucket.into(),
        reason: reason,
    }
}

// Listing was truncated but gave us nothing to continue from.
fn missing_marker(bucket: &str, marker: &str) -> Error {
    let reason = format!("listing was truncated without a {}", marker);

    delete_objects_error(bucket, reason)
}
