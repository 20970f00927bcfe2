//! Vendor API ingestion: fetches the current tenant list from a mall's
//! public API and maps it into [`mallwatch_core::Point`] records.

pub mod client;
pub mod error;
pub mod sources;

pub use client::MallClient;
pub use error::IngestError;
pub use sources::Source;
