//! Test utilities for Tandem services.
//!
//! Provides an in-process HTTP stub server for exercising the cross-service
//! clients without the real upstream. Use from tests only.

pub mod http;
