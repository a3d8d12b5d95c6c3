//! Orchestration of extraction and validation into the document.

mod assembler;

pub use assembler::{AssemblyResult, DocumentAssembler};
