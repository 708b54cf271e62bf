// Definition of a bucket
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;
use super::Region;

/// Represents an S3 bucket.
///
/// This will always have a `name`. The `region` is `None` when the bucket
/// location couldn't be looked up.
#[derive(Clone, Debug, PartialEq)]
pub struct Bucket {
    pub name:          String,
    pub region:        Option<Region>,
    pub creation_date: Option<DateTime>,
}

impl Bucket {
    /// Returns a `Bucket` with only a name.
    pub fn new(name: &str) -> Self {
        Self {
            name:          name.into(),
            region:        None,
            creation_date: None,
        }
    }

    /// The region name for display, `unknown` when the lookup failed.
    pub fn region_name(&self) -> &str {
        match &self.region {
            Some(region) => region.name(),
            None         => "unknown",
        }
    }

    /// The creation date as RFC 3339, `unknown` when S3 didn't return one.
    pub fn creation_date_string(&self) -> String {
        self.creation_date
            .and_then(|date| date.fmt(Format::DateTime).ok())
            .unwrap_or_else(|| "unknown".into())
    }
}

/// Convenience type for a list of `Bucket`.
pub type Buckets = Vec<Bucket>;
