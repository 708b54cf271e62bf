// The list and delete commands
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::{
    bail,
    Context,
    Result,
};
use crate::common::{
    BucketStore,
    ObjectVersions,
    OutputFormat,
    StoreFactory,
};
use crate::confirm::confirm;
use crate::deleter::{
    delete_buckets,
    DeletionReport,
    Outcome,
    RegionalStores,
};
use crate::filter::filter;
use crate::lister;
use crate::presenter::render;
use std::io::{
    Read,
    Write,
};
use tracing::debug;

/// Lists every bucket with its region.
pub async fn list<S, W>(store: &S, format: OutputFormat, out: &mut W) -> Result<()>
where
    S: BucketStore,
    W: Write,
{
    debug!("list: Listing buckets in {:?} format", format);

    let buckets = lister::list_buckets(store)
        .await
        .context("Failed to list buckets")?;

    write!(out, "{}", render(&buckets, format))?;

    Ok(())
}

/// Deletes the buckets whose name contains `substring`, after confirmation
/// read from `input`.
///
/// Buckets in other regions than `store` are deleted through stores created
/// by `factory`.
pub async fn delete<F, R, W>(
    factory: &F,
    store: &F::Store,
    substring: &str,
    versions: ObjectVersions,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    F: StoreFactory,
    R: Read,
    W: Write,
{
    if substring.is_empty() {
        bail!("A bucket name filter is required to delete buckets");
    }

    let buckets = store.list_buckets()
        .await
        .context("Failed to list buckets")?;

    let total         = buckets.len();
    let mut selection = filter(buckets, substring);

    if selection.is_empty() {
        writeln!(out, "Buckets not found")?;

        return Ok(());
    }

    lister::resolve_regions(store, &mut selection).await;

    write!(out, "{}", render(&selection, OutputFormat::Table))?;

    if selection.len() == total {
        writeln!(
            out,
            "\nWarning: '{}' matches all {} bucket(s) visible to this profile.",
            substring,
            total,
        )?;
    }

    if !confirm(input, out) {
        writeln!(out, "Deletion cancelled!")?;

        return Ok(());
    }

    let mut stores = RegionalStores::new(factory, store);

    let report = delete_buckets(&mut stores, &selection, versions, out)
        .await
        .context("Failed to write deletion progress")?;

    write_summary(&report, out)?;

    let failures = report.failures().len();

    if failures > 0 {
        bail!(
            "Failed to delete {} of {} bucket(s)",
            failures,
            report.len(),
        );
    }

    Ok(())
}

fn write_summary<W: Write>(report: &DeletionReport, out: &mut W) -> Result<()> {
    writeln!(out, "\nDeleted {} of {} bucket(s)", report.deleted(), report.len())?;

    for bucket in &report.0 {
        match &bucket.outcome {
            Outcome::Gone { .. } => {},
            Outcome::Unconfirmed { error, .. } => {
                writeln!(out, "  {}: deleted, not yet confirmed: {}", bucket.bucket, error)?;
            },
            Outcome::Failed { stage, error } => {
                writeln!(out, "  {}: failed {}: {}", bucket.bucket, stage, error)?;
            },
        }
    }

    Ok(())
}
