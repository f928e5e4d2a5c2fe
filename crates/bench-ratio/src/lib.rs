//! Weight to gas ratio derivation for EVM benchmarks.
//!
//! Reads the runtime benchmark results (reads, writes and intrinsic weight of
//! every benchmarked operation), pairs them with the gas each operation used
//! when executed directly, and derives the single `RATIO` constant the runtime
//! uses to convert EVM gas into weight.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod calculator;
pub mod codegen;
pub mod constants;
pub mod cost_table;
pub mod entry;
pub mod error;
pub mod report;

pub use calculator::{round_up_ratio, DbWeights, RatioCalculator, RatioReport, RatioSummary};
pub use codegen::{render_ratio_source, write_ratio_source, LICENSE_HEADER};
pub use constants::*;
pub use cost_table::{CostEntry, CostTable};
pub use entry::{load_benchmark_entries, parse_benchmark_entries, BenchmarkEntry};
pub use error::RatioError;
