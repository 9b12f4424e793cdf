//! Crate-level test suites that are too large to live inline.
