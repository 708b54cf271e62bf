// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
pub mod bucket_store;
mod client_config;
mod error;
mod object_versions;
mod output_format;
mod region;

pub use bucket::*;
pub use bucket_store::{
    BucketStore,
    StoreFactory,
};
pub use client_config::*;
pub use error::*;
pub use object_versions::*;
pub use output_format::*;
pub use region::*;
