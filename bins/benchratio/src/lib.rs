//! Command line front-end of [`bench_ratio`].

pub mod cmd;
