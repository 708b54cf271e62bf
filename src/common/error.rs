// Error taxonomy for bucket operations
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::io;

/// Errors raised while talking to the bucket store or the user.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Credentials for the profile could not be resolved.
    #[error("Unable to load credentials for profile '{profile}': {reason}")]
    Authentication {
        /// Name of the credential profile.
        profile: String,
        /// Why resolution failed.
        reason:  String,
    },

    /// The bucket listing itself failed.
    #[error("Unable to list buckets: {0}")]
    List(String),

    /// The region of a single bucket could not be found.
    #[error("Unable to find region for bucket '{bucket}': {reason}")]
    RegionLookup {
        /// Bucket name.
        bucket: String,
        /// Why the lookup failed.
        reason: String,
    },

    /// Objects could not be listed or deleted.
    #[error("Unable to delete objects from bucket '{bucket}': {reason}")]
    DeleteObjects {
        /// Bucket name.
        bucket: String,
        /// Why deletion failed.
        reason: String,
    },

    /// The emptied bucket could not be deleted.
    #[error("Unable to delete bucket '{bucket}': {reason}")]
    DeleteBucket {
        /// Bucket name.
        bucket: String,
        /// Why deletion failed.
        reason: String,
    },

    /// The bucket was deleted but wasn't confirmed gone in time.
    #[error("Unable to confirm bucket '{bucket}' was deleted: {reason}")]
    WaitBucketGone {
        /// Bucket name.
        bucket: String,
        /// Why the wait failed.
        reason: String,
    },

    /// Reading the confirmation answer failed.
    #[error("Unable to read confirmation: {0}")]
    InputRead(#[from] io::Error),

    /// An SDK request input could not be built.
    #[error("Unable to build request: {0}")]
    Build(#[from] aws_sdk_s3::error::BuildError),
}

/// `Result` alias for bucket store operations.
pub type Result<T> = std::result::Result<T, Error>;
