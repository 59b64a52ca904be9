//! 评测执行 - 先插入后查询，分别计时并与真值比对

use std::time::Instant;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    bench::{insert_count, BenchConfig, EvaluationReport, MicroReport, Report, Workload},
    build_table,
    error::{BenchError, TableError},
    map::HashTable,
    types::Value,
};

/// 执行完整评测：全部插入、按打乱顺序查询、统计不一致条数
pub fn evaluate<T: HashTable + ?Sized>(
    table: &mut T,
    workload: &Workload,
    fill_factor: f32,
) -> Result<EvaluationReport, TableError> {
    log_info!("Performing {} insertions...", workload.len());
    let insert_start = Instant::now();
    for &(k, v) in &workload.inserts {
        table.put(k, v)?;
    }
    let insert_time = insert_start.elapsed();
    log_info!("{} insert stats: {}", table.name(), table.stats());

    log_info!("Performing {} lookups...", workload.distinct_keys());
    let mut errors = 0;
    let lookup_start = Instant::now();
    for &(k, v) in &workload.lookups {
        if table.get(k) != Some(v) {
            errors += 1;
        }
    }
    let lookup_time = lookup_start.elapsed();

    if errors > 0 {
        log_warn!("There were {} errors", errors);
    } else {
        log_info!("There were 0 errors");
    }

    Ok(EvaluationReport {
        algo: table.name(),
        capacity: table.capacity(),
        fill_factor,
        insert_time,
        lookup_time,
        errors,
    })
}

/// 微基准：插入 n 个随机键，只对插入循环计时
pub fn microbenchmark<T: HashTable + ?Sized>(
    table: &mut T,
    fill_factor: f32,
    seed: u64,
) -> Result<MicroReport, TableError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let n = insert_count(table.capacity(), fill_factor);

    log_info!("Running microbenchmark with {} insertions...", n);
    let start = Instant::now();
    for i in 0..n {
        table.put(rng.gen(), i as Value + 1)?;
    }
    let time = start.elapsed();
    log_info!("{} insert stats: {}", table.name(), table.stats());

    Ok(MicroReport {
        algo: table.name(),
        capacity: table.capacity(),
        fill_factor,
        time,
    })
}

/// 按配置构造表并运行
pub fn run(config: &BenchConfig) -> Result<Report, BenchError> {
    config.validate()?;
    let mut table = build_table(config.algo, config.capacity(), config.seed)?;

    if config.microbenchmark {
        let report = microbenchmark(table.as_mut(), config.fill_factor, config.seed)?;
        return Ok(Report::Micro(report));
    }

    log_info!("Generating random data...");
    let workload = Workload::generate(table.capacity(), config.fill_factor, config.seed)?;
    let report = evaluate(table.as_mut(), &workload, config.fill_factor)?;
    Ok(Report::Evaluation(report))
}
