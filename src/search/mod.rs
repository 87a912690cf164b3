use rayon::prelude::*;

use crate::error::SearchError;
use crate::index::sa_index::SaIndex;
use crate::store::Query;

pub mod naive;
pub mod pigeon;

pub use pigeon::{seed_spans, Match};

/// 批次中一条查询的执行结果。
/// 单条查询出错（如种子预算不合法）不影响批次里其他查询。
#[derive(Debug)]
pub struct QueryOutcome {
    pub id: String,
    pub result: Result<Vec<Match>, SearchError>,
}

/// 朴素策略跑整个批次。查询之间相互独立，用 rayon 数据并行展开；
/// collect 保持与输入相同的顺序。
pub fn run_naive(text: &[u8], queries: &[Query]) -> Vec<QueryOutcome> {
    queries
        .par_iter()
        .map(|q| QueryOutcome {
            id: q.id.clone(),
            result: Ok(exact_hits(naive::find_all(text, &q.seq))),
        })
        .collect()
}

/// 后缀数组精确策略跑整个批次。索引构建后只读，可无锁共享。
pub fn run_exact(index: &SaIndex<'_>, queries: &[Query]) -> Vec<QueryOutcome> {
    queries
        .par_iter()
        .map(|q| QueryOutcome {
            id: q.id.clone(),
            result: Ok(exact_hits(index.find(&q.seq))),
        })
        .collect()
}

/// 种子-延伸近似策略跑整个批次。
pub fn run_pigeon(index: &SaIndex<'_>, queries: &[Query], errors: u32) -> Vec<QueryOutcome> {
    queries
        .par_iter()
        .map(|q| QueryOutcome {
            id: q.id.clone(),
            result: pigeon::search(index, &q.seq, errors),
        })
        .collect()
}

fn exact_hits(positions: Vec<u32>) -> Vec<Match> {
    positions
        .into_iter()
        .map(|pos| Match { pos, mismatches: 0 })
        .collect()
}
