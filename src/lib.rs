//! Category-targeted ad selection with a random fallback.
//!
//! `ad-core` holds an immutable category index over a fixed ad catalog and
//! answers GetAds requests from it: every ad matching the requested
//! categories, or two ads drawn at random when nothing matches. The
//! selection core is synchronous, allocation-only, and safe to call from any
//! number of threads at once; `service` exposes it over gRPC with `tonic`.

pub mod catalog;
pub mod selection;
pub mod service;
pub mod types;
