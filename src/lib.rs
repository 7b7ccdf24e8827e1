//! # vartab
//!
//! `vartab` builds wide per-variant annotation tables out of two
//! tab-delimited streams produced by a somatic variant-calling pipeline:
//! a VEP annotation stream (metadata, header and data lines) and a
//! headerless per-sample call-statistics stream extracted from a
//! multisample Mutect2 VCF. The two streams enumerate the same variants in
//! the same order; `vartab` concatenates them column-wise, then splits each
//! sample's combined `"ref,alt"` allele-depth field into typed
//! `REF`/`ALT`/`DETECTED` columns.
//!
//! Tables are [polars](https://pola.rs) `DataFrame`s throughout. All inputs
//! are read to completion before any transformation runs; the whole table
//! is materialized in memory.
//!
//! ## Structure
//!
//! * [`data_structs`]: the sample roster and per-sample column schema
//!   ([`SampleRoster`], [`SampleField`]) and the merged table itself
//!   ([`AnnotationTable`]).
//! * [`io`]: readers for the VEP and call streams, the tab-separated
//!   table writer, and (feature-gated) compression support for the VCF
//!   passthrough.
//! * [`error`]: the [`VartabError`] taxonomy. Every error is fatal at the
//!   point of detection — a misaligned or silently padded table would
//!   corrupt downstream interpretation, so the pipeline aborts instead.
//!
//! If you do not want to use vartab as a crate, check out the `vartab`
//! CLI tool in this workspace's `console` member.
//!
//! [`SampleRoster`]: data_structs::SampleRoster
//! [`SampleField`]: data_structs::SampleField
//! [`AnnotationTable`]: data_structs::AnnotationTable
//! [`VartabError`]: error::VartabError

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod utils;
