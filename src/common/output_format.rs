// OutputFormat
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use std::str::FromStr;

/// `OutputFormat` represents how bucket listings are displayed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// One line per bucket with its creation time.
    Plain,

    /// A table of bucket names and regions.
    #[default]
    Table,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "table" => Ok(Self::Table),
            _       => Err("no match"),
        }
    }
}
