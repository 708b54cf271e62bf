// Bucket list rendering
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Bucket,
    OutputFormat,
};
use tabled::{
    Table,
    Tabled,
};

/// A row of the bucket table.
#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Region")]
    region: String,
}

impl From<&Bucket> for BucketRow {
    fn from(bucket: &Bucket) -> Self {
        Self {
            name:   bucket.name.to_owned(),
            region: bucket.region_name().into(),
        }
    }
}

/// Renders `buckets` in the requested `format`, in the order given.
///
/// `Table` gives a Name/Region table, `Plain` gives one
/// `name<TAB>creation-time` line per bucket.
pub fn render(buckets: &[Bucket], format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => {
            buckets.iter()
                .map(|b| format!("{}\t{}\n", b.name, b.creation_date_string()))
                .collect()
        },
        OutputFormat::Table => {
            let rows = buckets.iter().map(BucketRow::from);

            format!("{}\n", Table::new(rows))
        },
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::common::Region;
    use aws_smithy_types::DateTime;
    use pretty_assertions::assert_eq;

    // Returns the cells of each table body row.
    pub fn table_rows(table: &str) -> Vec<Vec<String>> {
        table.lines()
            .filter(|line| line.starts_with('|'))
            .skip(1)
            .map(|line| {
                line.trim_matches('|')
                    .split('|')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }

    fn bucket(name: &str, region: Option<&str>) -> Bucket {
        Bucket {
            name:          name.into(),
            region:        region.map(|r| Region::default().set_region(r)),
            creation_date: None,
        }
    }

    #[test]
    fn test_render_table() {
        let buckets = vec![
            bucket("a", Some("us-east-1")),
            bucket("b", Some("eu-west-1")),
        ];

        let ret = render(&buckets, OutputFormat::Table);

        let expected = vec![
            vec!["a", "us-east-1"],
            vec!["b", "eu-west-1"],
        ];

        assert!(ret.contains("Name"));
        assert!(ret.contains("Region"));
        assert_eq!(table_rows(&ret), expected);
    }

    #[test]
    fn test_render_table_unknown_region() {
        let buckets = vec![bucket("a", None)];

        let ret = render(&buckets, OutputFormat::Table);

        assert_eq!(table_rows(&ret), vec![vec!["a", "unknown"]]);
    }

    #[test]
    fn test_render_plain() {
        let mut first = bucket("a", Some("us-east-1"));
        first.creation_date = Some(DateTime::from_secs(1_584_024_300));

        let buckets = vec![
            first,
            bucket("b", None),
        ];

        let ret = render(&buckets, OutputFormat::Plain);

        assert_eq!(ret, "a\t2020-03-12T14:45:00Z\nb\tunknown\n");
    }
}
