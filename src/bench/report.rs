//! 评测报告 - 与原始基准程序一致的输出格式

use std::{fmt, time::Duration};

/// 完整评测结果
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub algo: &'static str,
    pub capacity: usize,
    pub fill_factor: f32,
    pub insert_time: Duration,
    pub lookup_time: Duration,
    /// 查询结果与真值不一致的条数
    pub errors: usize,
}

/// 微基准结果，只对插入计时
#[derive(Debug, Clone, PartialEq)]
pub struct MicroReport {
    pub algo: &'static str,
    pub capacity: usize,
    pub fill_factor: f32,
    pub time: Duration,
}

/// 两种运行模式的结果
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Evaluation(EvaluationReport),
    Micro(MicroReport),
}

impl Report {
    /// 校验失败条数；微基准不做校验
    pub fn errors(&self) -> usize {
        match self {
            Self::Evaluation(report) => report.errors,
            Self::Micro(_) => 0,
        }
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "algo: {}", self.algo)?;
        writeln!(f, "m: {}", self.capacity)?;
        writeln!(f, "fill_factor: {}", self.fill_factor)?;
        writeln!(f, "time_insert: {} # ms", self.insert_time.as_millis())?;
        write!(f, "time_lookup: {} # ms", self.lookup_time.as_millis())
    }
}

impl fmt::Display for MicroReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "algo: {}", self.algo)?;
        writeln!(f, "m: {}", self.capacity)?;
        writeln!(f, "fill_factor: {}", self.fill_factor)?;
        write!(f, "time: {} # ms", self.time.as_millis())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evaluation(report) => report.fmt(f),
            Self::Micro(report) => report.fmt(f),
        }
    }
}
