//! Integration tests

mod capture_test;
mod helpers;
mod playback_test;
#[cfg(unix)]
mod record_test;
