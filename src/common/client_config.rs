// ClientConfig
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use super::{
    ObjectVersions,
    OutputFormat,
    Region,
};

/// Credential profile used when none is given.
pub const DEFAULT_PROFILE: &str = "dev";

/// Client configuration.
#[derive(Debug)]
pub struct ClientConfig {
    /// Substring that bucket names must contain to be selected for deletion.
    ///
    /// Only used by the `delete` command.
    pub bucket_filter: Option<String>,

    /// Custom S3 endpoint URL, for S3 compatible stores.
    pub endpoint: Option<String>,

    /// The S3 object versions that should be removed when emptying a bucket.
    pub object_versions: ObjectVersions,

    /// How the `list` command displays buckets.
    pub output_format: OutputFormat,

    /// Name of the credential profile in the shared AWS config files.
    pub profile: String,

    /// The region that our AWS client should be created in.
    ///
    /// Buckets in other regions get their own client when being deleted.
    pub region: Region,
}

impl Default for ClientConfig {
    /// Returns a default `ClientConfig`.
    ///
    /// ```rust
    /// ClientConfig {
    ///     bucket_filter:   None,
    ///     endpoint:        None,
    ///     object_versions: ObjectVersions::Current,
    ///     output_format:   OutputFormat::Table,
    ///     profile:         "dev".into(),
    ///     region:          Region::new(),
    /// }
    /// ```
    fn default() -> Self {
        Self {
            bucket_filter:   None,
            endpoint:        None,
            object_versions: ObjectVersions::default(),
            output_format:   OutputFormat::default(),
            profile:         DEFAULT_PROFILE.into(),
            region:          Region::new(),
        }
    }
}
