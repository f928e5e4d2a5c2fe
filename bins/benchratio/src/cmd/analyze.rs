use bench_ratio::{
    load_benchmark_entries, write_ratio_source, CostTable, DbWeights, RatioCalculator, RatioError,
    RatioSummary, DB_READ_COST, DB_WRITE_COST, DEFAULT_COST_TABLE_PATH,
};
use clap::Parser;
use std::{
    io::{self, Read},
    path::PathBuf,
};

/// Error of the `analyze` subcommand.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading, computing or writing failed.
    #[error(transparent)]
    Ratio(#[from] RatioError),
    /// Standard input could not be read.
    #[error("failed to read benchmark list path from stdin: {0}")]
    Stdin(#[source] io::Error),
    /// Neither `--benches` nor a path on standard input was given.
    #[error("no benchmark list path given on stdin")]
    NoBenchPath,
    /// Report could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// `analyze` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Path of the generated source file
    ///
    /// Relative paths are resolved against the working directory. Nothing is written when
    /// omitted.
    output: Option<PathBuf>,
    /// Benchmark results, a JSON array of `{name, reads, writes, weight}`
    ///
    /// When omitted, the last non-empty line of standard input is taken as the path.
    #[arg(short, long)]
    benches: Option<PathBuf>,
    /// Gas measurements, a JSON object mapping operation name to `{used_gas}`
    ///
    /// The default is resolved against the working directory.
    #[arg(short, long, default_value = DEFAULT_COST_TABLE_PATH)]
    costs: PathBuf,
    /// Weight of one storage read
    #[arg(long, default_value_t = DB_READ_COST)]
    db_read: u64,
    /// Weight of one storage write
    #[arg(long, default_value_t = DB_WRITE_COST)]
    db_write: u64,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cmd {
    /// Runs `analyze` command.
    pub fn run(&self) -> Result<RatioSummary, Error> {
        self.run_with_input(io::stdin().lock())
    }

    /// Runs `analyze`, taking the benchmark list path from `input` if `--benches` is absent.
    pub fn run_with_input(&self, input: impl Read) -> Result<RatioSummary, Error> {
        let benches = match &self.benches {
            Some(path) => path.clone(),
            None => bench_path_from(input)?,
        };
        tracing::info!(
            benches = %benches.display(),
            costs = %self.costs.display(),
            "loading inputs"
        );

        let entries = load_benchmark_entries(&benches)?;
        let costs = CostTable::load(&self.costs)?;
        let calculator = RatioCalculator::new(DbWeights::new(self.db_read, self.db_write));
        tracing::debug!(
            db_weights = ?calculator.db_weights(),
            rounding = calculator.rounding(),
            "calculating ratio"
        );
        let summary = calculator.calculate(&entries, &costs)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("{summary}");
        }

        match &self.output {
            Some(output) => {
                write_ratio_source(output, summary.ratio)?;
            }
            None => tracing::info!(ratio = summary.ratio, "no output path given, skipping write"),
        }
        Ok(summary)
    }
}

/// Takes the last non-empty line of `input` as a path.
fn bench_path_from(mut input: impl Read) -> Result<PathBuf, Error> {
    let mut text = String::new();
    input.read_to_string(&mut text).map_err(Error::Stdin)?;
    text.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
        .ok_or(Error::NoBenchPath)
}
