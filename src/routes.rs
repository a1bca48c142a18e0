//! Route handlers, one module per mount point.

pub mod home;
