//! File input and output: the VEP annotation stream, the headerless call
//! stream, and the final tab-separated table.

pub mod calls;
#[cfg(feature = "compression")]
pub mod compression;
pub mod vep;
pub mod write;

pub use calls::read_call_table;
pub use vep::read_vep_table;
pub use write::TableWriter;
