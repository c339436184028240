//! Live tests against AWS Certificate Manager.
//!
//! Run with `--features integration-tests` and the `ACM_TEST_*` variables
//! described in `test_utils.rs`.
#![cfg(feature = "integration-tests")]

mod acm_test;
mod test_utils;
