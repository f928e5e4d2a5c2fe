//! Weight to gas ratio derivation.
use crate::{
    constants::{DB_READ_COST, DB_WRITE_COST, RATIO_ROUNDING},
    cost_table::CostTable,
    entry::BenchmarkEntry,
    error::RatioError,
};
use serde::{Deserialize, Serialize};

/// Weight charged per storage access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DbWeights {
    /// Weight of one storage read.
    pub read: u64,
    /// Weight of one storage write.
    pub write: u64,
}

impl Default for DbWeights {
    fn default() -> Self {
        Self::new(DB_READ_COST, DB_WRITE_COST)
    }
}

impl DbWeights {
    /// Creates new storage access weights.
    pub const fn new(read: u64, write: u64) -> Self {
        Self { read, write }
    }

    /// Weight of `reads` reads and `writes` writes, `None` on overflow.
    pub fn storage_weight(&self, reads: u64, writes: u64) -> Option<u64> {
        reads
            .checked_mul(self.read)?
            .checked_add(writes.checked_mul(self.write)?)
    }
}

/// Ratio derived for a single benchmark entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioReport {
    /// Operation name.
    pub name: String,
    /// Number of storage reads.
    pub reads: u64,
    /// Number of storage writes.
    pub writes: u64,
    /// Intrinsic weight.
    pub weight: u64,
    /// Intrinsic weight plus storage access weight.
    pub total_weight: u64,
    /// Measured gas.
    pub used_gas: u64,
    /// `total_weight / used_gas`, truncated.
    pub ratio: u64,
}

/// Outcome of a calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioSummary {
    /// Per entry reports, sorted by descending ratio.
    ///
    /// Entries with equal ratios keep their input order.
    pub reports: Vec<RatioReport>,
    /// Largest ratio before rounding.
    pub max_ratio: u64,
    /// `max_ratio` rounded up to the calculator's rounding bucket.
    pub ratio: u64,
}

/// Derives the weight to gas ratio from benchmark entries and gas measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RatioCalculator {
    db_weights: DbWeights,
    rounding: u64,
}

impl Default for RatioCalculator {
    fn default() -> Self {
        Self::new(DbWeights::default())
    }
}

impl RatioCalculator {
    /// Creates a calculator with the given storage weights, rounding to
    /// [`RATIO_ROUNDING`].
    pub const fn new(db_weights: DbWeights) -> Self {
        Self {
            db_weights,
            rounding: RATIO_ROUNDING,
        }
    }

    /// Sets the bucket the final ratio is rounded up to.
    pub const fn with_rounding(mut self, rounding: u64) -> Self {
        self.rounding = rounding;
        self
    }

    /// Storage access weights in use.
    pub const fn db_weights(&self) -> DbWeights {
        self.db_weights
    }

    /// Rounding bucket in use.
    pub const fn rounding(&self) -> u64 {
        self.rounding
    }

    /// `weight + reads * read + writes * write` of `entry`.
    pub fn total_weight(&self, entry: &BenchmarkEntry) -> Result<u64, RatioError> {
        self.db_weights
            .storage_weight(entry.reads, entry.writes)
            .and_then(|storage| storage.checked_add(entry.weight))
            .ok_or_else(|| {
                RatioError::validation(format!(
                    "total weight of operation `{}` overflows u64",
                    entry.name
                ))
            })
    }

    /// Computes the report of a single entry.
    pub fn report_entry(
        &self,
        entry: &BenchmarkEntry,
        costs: &CostTable,
    ) -> Result<RatioReport, RatioError> {
        let used_gas = costs.used_gas(&entry.name)?;
        let total_weight = self.total_weight(entry)?;
        Ok(RatioReport {
            name: entry.name.clone(),
            reads: entry.reads,
            writes: entry.writes,
            weight: entry.weight,
            total_weight,
            used_gas,
            // used_gas is never zero here.
            ratio: total_weight / used_gas,
        })
    }

    /// Computes every report and the rounded maximum ratio.
    ///
    /// Fails on the first entry that cannot be resolved; no partial result is
    /// returned.
    pub fn calculate(
        &self,
        entries: &[BenchmarkEntry],
        costs: &CostTable,
    ) -> Result<RatioSummary, RatioError> {
        if entries.is_empty() {
            return Err(RatioError::validation("no benchmark entries"));
        }

        let mut reports = entries
            .iter()
            .map(|entry| self.report_entry(entry, costs))
            .collect::<Result<Vec<_>, _>>()?;
        // `sort_by` is stable, ties keep input order.
        reports.sort_by(|a, b| b.ratio.cmp(&a.ratio));

        let max_ratio = reports[0].ratio;
        let ratio = round_up_ratio(max_ratio, self.rounding)?;
        tracing::debug!(
            operation = %reports[0].name,
            max_ratio,
            ratio,
            "derived weight to gas ratio"
        );

        Ok(RatioSummary {
            reports,
            max_ratio,
            ratio,
        })
    }
}

/// Rounds `candidate` up to the next multiple of `bucket`.
///
/// Exact multiples are returned unchanged.
pub fn round_up_ratio(candidate: u64, bucket: u64) -> Result<u64, RatioError> {
    if bucket == 0 {
        return Err(RatioError::validation("rounding bucket must be positive"));
    }
    candidate
        .div_ceil(bucket)
        .checked_mul(bucket)
        .ok_or_else(|| RatioError::validation(format!("ratio {candidate} overflows when rounded")))
}
