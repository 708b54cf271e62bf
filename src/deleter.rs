// Bucket deletion
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use crate::common::{
    Bucket,
    BucketStore,
    Error,
    ObjectVersions,
    Region,
    Result,
    StoreFactory,
};
use std::collections::HashMap;
use std::fmt;
use std::io::{
    self,
    Write,
};
use tracing::{
    debug,
    info,
    warn,
};

/// The step a bucket deletion failed at.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Listing or deleting the objects in the bucket.
    DeletingObjects,

    /// Deleting the emptied bucket.
    DeletingBucket,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Self::DeletingObjects => "deleting objects",
            Self::DeletingBucket  => "deleting bucket",
        };

        write!(f, "{}", stage)
    }
}

/// What happened to a single bucket.
#[derive(Debug)]
pub enum Outcome {
    /// Emptied, deleted and confirmed gone.
    Gone {
        /// Number of objects deleted.
        objects: usize,
    },

    /// Emptied and deleted, but S3 didn't confirm the bucket was gone.
    Unconfirmed {
        /// Number of objects deleted.
        objects: usize,
        /// The wait failure.
        error:   Error,
    },

    /// Deletion stopped at `stage`.
    Failed {
        /// The step that failed.
        stage: Stage,
        /// Why it failed.
        error: Error,
    },
}

impl Outcome {
    /// Returns `true` unless the bucket failed to delete.
    pub fn is_deleted(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }
}

/// Outcome for one bucket.
#[derive(Debug)]
pub struct BucketReport {
    /// Bucket name.
    pub bucket:  String,
    /// What happened to it.
    pub outcome: Outcome,
}

/// Outcomes for a whole batch, in the order buckets were processed.
#[derive(Debug, Default)]
pub struct DeletionReport(pub Vec<BucketReport>);

impl DeletionReport {
    /// Number of buckets that were deleted, confirmed or not.
    pub fn deleted(&self) -> usize {
        self.0.iter()
            .filter(|r| r.outcome.is_deleted())
            .count()
    }

    /// The buckets that failed to delete.
    pub fn failures(&self) -> Vec<&BucketReport> {
        self.0.iter()
            .filter(|r| !r.outcome.is_deleted())
            .collect()
    }

    /// Number of buckets processed.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Hands out the store to use for a bucket, by the bucket's region.
///
/// Buckets in the default store's region, or with an unknown region, use the
/// default store. Stores for other regions are created on first use and kept
/// for the rest of the batch.
pub struct RegionalStores<'a, F>
where
    F: StoreFactory,
{
    default: &'a F::Store,
    factory: &'a F,
    stores:  HashMap<String, F::Store>,
}

impl<'a, F> RegionalStores<'a, F>
where
    F: StoreFactory,
{
    /// Returns a new `RegionalStores` with nothing cached yet.
    pub fn new(factory: &'a F, default: &'a F::Store) -> Self {
        Self {
            default: default,
            factory: factory,
            stores:  HashMap::new(),
        }
    }

    /// Returns the store for buckets in `region`.
    pub async fn resolve(&mut self, region: Option<&Region>) -> Result<&F::Store> {
        let region = match region {
            Some(region) if region != self.default.region() => region,
            _ => return Ok(self.default),
        };

        let name = region.name();

        if !self.stores.contains_key(name) {
            debug!("resolve: Creating store for region '{}'", name);

            let store = self.factory.store(region).await?;
            self.stores.insert(name.to_string(), store);
        }

        Ok(&self.stores[name])
    }
}

/// Deletes `buckets` one at a time, in order.
///
/// A bucket that fails doesn't stop the batch, the failure is recorded and
/// the next bucket is processed. Progress is written to `out`.
pub async fn delete_buckets<F, W>(
    stores: &mut RegionalStores<'_, F>,
    buckets: &[Bucket],
    versions: ObjectVersions,
    out: &mut W,
) -> io::Result<DeletionReport>
where
    F: StoreFactory,
    W: Write,
{
    let mut report = DeletionReport::default();

    for bucket in buckets {
        let outcome = match stores.resolve(bucket.region.as_ref()).await {
            Ok(store) => delete_bucket(store, bucket, versions, out).await?,
            Err(e)    => Outcome::Failed {
                stage: Stage::DeletingObjects,
                error: e,
            },
        };

        if let Outcome::Failed { stage, error } = &outcome {
            writeln!(out, "Failed {} for bucket {:?}: {}", stage, bucket.name, error)?;
        }

        report.0.push(BucketReport {
            bucket:  bucket.name.to_owned(),
            outcome: outcome,
        });
    }

    Ok(report)
}

// Walks a single bucket through emptying, deletion and the wait for it to be
// gone.
async fn delete_bucket<S, W>(
    store: &S,
    bucket: &Bucket,
    versions: ObjectVersions,
    out: &mut W,
) -> io::Result<Outcome>
where
    S: BucketStore,
    W: Write,
{
    let name = &bucket.name;

    info!("Deleting bucket '{}' in region '{}'", name, store.region());

    let objects = match store.empty_bucket(name, versions).await {
        Ok(objects) => objects,
        Err(e)      => return Ok(Outcome::Failed {
            stage: Stage::DeletingObjects,
            error: e,
        }),
    };

    write!(out, "Deleted {} object(s) from bucket: {}", objects, name)?;

    if let Err(e) = store.delete_bucket(name).await {
        writeln!(out)?;

        return Ok(Outcome::Failed {
            stage: Stage::DeletingBucket,
            error: e,
        });
    }

    writeln!(out, " Waiting for bucket {:?} to be deleted...", name)?;

    let outcome = match store.wait_until_gone(name).await {
        Ok(()) => Outcome::Gone {
            objects: objects,
        },
        Err(e) => {
            warn!("{}", e);

            Outcome::Unconfirmed {
                objects: objects,
                error:   e,
            }
        },
    };

    Ok(outcome)
}
