//! Conformance harness: loads golden test vectors, drives the codecs, and
//! reports per-vector pass/fail with byte-exact diffing.
//!
//! A single vector's failure never halts a run; every vector is checked in
//! isolation and every remaining vector still reports. Only an unreadable
//! or malformed vector *file* aborts the run.

pub mod report;
pub mod runner;
pub mod value;
pub mod vector;

pub use report::{Failure, Report, VectorResult};
pub use runner::run;
pub use value::{json_to_value, ValueError};
pub use vector::{load_vectors, load_vectors_file, CodecKind, HarnessError, TestVector};
