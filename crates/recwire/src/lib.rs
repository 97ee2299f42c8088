//! recwire — byte-exact conformance harness for the record wire codecs.
//!
//! Loads externally authored golden test vectors (logical value plus
//! expected bytes), drives the codecs in `recwire-codec`, and reports
//! per-vector pass/fail with byte-exact diffing.

pub mod conformance;
