// Handles region things
use aws_config::meta::region::future;
use aws_config::meta::region::ProvideRegion;
use aws_types::region;
use std::env;
use std::fmt;
use tracing::debug;

/// Region name for buckets whose location constraint is empty.
const US_EAST_1: &str = "us-east-1";

/// Region name for buckets with the legacy `EU` location constraint.
const EU_WEST_1: &str = "eu-west-1";

/// An optional AWS region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Region {
    region: Option<region::Region>,
}

impl Region {
    pub fn new() -> Self {
        // By default, we try to get a region from the environment, this might
        // be overridden later depending on CLI options.
        let possibilities = vec![
            env::var("AWS_REGION"),
            env::var("AWS_DEFAULT_REGION"),
        ];

        let region = possibilities
            .iter()
            .find_map(|region| region.as_ref().ok())
            .map(|region| region::Region::new(region.to_owned()));

        debug!("AWS_REGION in environment is: {:?}", region);

        Self {
            region: region,
        }
    }

    /// Returns a `Region` from a GetBucketLocation location constraint.
    ///
    /// Location constraints for sufficiently old buckets may not quite meet
    /// expectations. An empty constraint means `us-east-1` and `EU` means
    /// `eu-west-1`.
    pub fn from_location_constraint(location: Option<&str>) -> Self {
        let location = match location {
            None | Some("") => US_EAST_1,
            Some("EU")      => EU_WEST_1,
            Some(location)  => location,
        };

        Self::default().set_region(location)
    }

    // Returns the region name
    pub fn name(&self) -> &str {
        match &self.region {
            Some(region) => region.as_ref(),
            None         => "default",
        }
    }

    /// Returns the SDK region, if one is set.
    pub fn aws_region(&self) -> Option<region::Region> {
        self.region.to_owned()
    }

    pub fn set_region(mut self, region: &str) -> Self {
        debug!("Region set to: {:?}", region);

        let region = region::Region::new(region.to_string());
        self.region = Some(region);
        self
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl ProvideRegion for Region {
    // Takes our region string and returns a proper AWS Region, this should
    // allow us to pass our Region into AWS SDK functions expecting an AWS
    // Region.
    fn region(&self) -> future::ProvideRegion<'_> {
        future::ProvideRegion::ready(self.region.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_location_constraint() {
        let tests = vec![
            (None,                 "us-east-1"),
            (Some(""),             "us-east-1"),
            (Some("EU"),           "eu-west-1"),
            (Some("eu-central-1"), "eu-central-1"),
        ];

        for test in tests {
            let location = test.0;
            let expected = test.1;

            let ret = Region::from_location_constraint(location);

            assert_eq!(ret.name(), expected);
        }
    }

    #[test]
    fn test_region_eq() {
        let a = Region::default().set_region("eu-west-1");
        let b = Region::from_location_constraint(Some("EU"));
        let c = Region::default().set_region("us-east-1");

        assert_eq!(a, b);
        assert!(a != c);
    }

    #[test]
    fn test_region_name_default() {
        let region = Region::default();

        assert_eq!(region.name(), "default");
        assert_eq!(region.aws_region(), None);
    }
}
