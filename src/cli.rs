//! 命令行参数

use clap::Parser;

use crate::{bench::BenchConfig, error::BenchError, types::TableKind};

#[derive(Parser, Debug)]
#[command(
    name = "hashing",
    about = "Compare collision-resolution strategies of fixed-capacity hash tables",
    version
)]
pub struct Cli {
    /// Perform microbenchmarking (time insertions only, skip validation).
    #[arg(long)]
    pub microbenchmark: bool,

    /// Select an algorithm.
    #[arg(long, value_enum)]
    pub algo: TableKind,

    /// Set the fill factor.
    #[arg(long, default_value_t = 0.5)]
    pub fill: f32,

    /// Table capacity as a power of two (M = 2^N).
    #[arg(long = "log2-capacity", default_value_t = 26)]
    pub log2_capacity: u32,

    /// Seed for workload generation and cuckoo hash parameters.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl Cli {
    pub fn into_config(self) -> Result<BenchConfig, BenchError> {
        let config = BenchConfig {
            algo: self.algo,
            log2_capacity: self.log2_capacity,
            fill_factor: self.fill,
            microbenchmark: self.microbenchmark,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
