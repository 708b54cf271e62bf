// ObjectVersions
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::str::FromStr;

/// Which object versions are removed when emptying a bucket.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ObjectVersions {
    /// Every object version and delete marker. Versioned buckets can only be
    /// deleted once all of these are gone.
    All,

    /// Only current objects.
    #[default]
    Current,
}

/// This converts from the string arguments we receive on the command line to
/// our enum type.
impl FromStr for ObjectVersions {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all"     => Ok(Self::All),
            "current" => Ok(Self::Current),
            _         => Err("no match"),
        }
    }
}
