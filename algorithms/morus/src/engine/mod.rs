//! Execution Engine
//!
//! CPU dispatch between the AVX2 and portable kernels.

pub mod dispatcher;

pub use dispatcher::backend;
