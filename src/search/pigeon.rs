use crate::error::SearchError;
use crate::index::sa_index::SaIndex;

/// 一次通过验证的比对：参考上的起始位置与真实错配数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub pos: u32,
    pub mismatches: u32,
}

/// 把长度 len 的查询切成 parts 段连续不重叠的区间 [start, end)。
/// 前 parts-1 段长 ⌊len/parts⌋，最后一段吸收余数，
/// 拼起来恰好覆盖 [0, len)，不跳过也不重复任何符号。
/// 纯函数，只依赖 (len, parts)。
pub fn seed_spans(len: usize, parts: usize) -> Vec<(usize, usize)> {
    debug_assert!(parts >= 1 && parts <= len);
    let base = len / parts;
    let mut spans = Vec::with_capacity(parts);
    for p in 0..parts {
        let start = p * base;
        let end = if p + 1 == parts { len } else { start + base };
        spans.push((start, end));
    }
    spans
}

/// 带上限的 Hamming 计数：运行计数一旦超过 max 就提前返回 None。
/// 提前退出只是剪枝，不改变接受/拒绝的结果。
fn hamming_within(a: &[u8], b: &[u8], max: u32) -> Option<u32> {
    debug_assert_eq!(a.len(), b.len());
    let mut count = 0u32;
    for (&x, &y) in a.iter().zip(b) {
        if x != y {
            count += 1;
            if count > max {
                return None;
            }
        }
    }
    Some(count)
}

/// 种子-延伸近似匹配（鸽笼原理）。
///
/// 查询被切成 k = errors+1 个不相交种子。若查询确实能以 ≤ errors 个错配
/// 对上参考的某个位置，这些错配最多落进 errors 个种子，必然剩下一个
/// 零错配的种子能被精确索引命中，完整验证随之接受该比对，因此不漏报；
/// 验证重算真实错配数，因此也不误报。
///
/// 每个命中推回候选起点 cand = hit - 种子在查询内的偏移；越出参考任一端
/// 的候选被丢弃；同一候选可能来自多个种子，验证前先排序去重，
/// 结果按位置升序、每个位置至多出现一次。
pub fn search(index: &SaIndex<'_>, query: &[u8], errors: u32) -> Result<Vec<Match>, SearchError> {
    let query_len = query.len();
    if query_len == 0 {
        // 空查询按"永不匹配"处理，先于种子预算检查
        return Ok(Vec::new());
    }
    let parts = errors as usize + 1;
    if parts > query_len {
        // 每个种子都会退化为空串，拒绝而不是悄悄截断
        return Err(SearchError::SeedBudget { errors, query_len });
    }
    let text = index.text;
    if query_len > text.len() {
        return Ok(Vec::new());
    }

    let mut candidates: Vec<u32> = Vec::new();
    for (seed_start, seed_end) in seed_spans(query_len, parts) {
        let (lower, upper) = index.range(&query[seed_start..seed_end]);
        for &hit in index.positions(lower, upper) {
            let hit = hit as usize;
            if hit < seed_start {
                continue; // 比对会越过参考左端
            }
            let cand = hit - seed_start;
            if cand + query_len > text.len() {
                continue; // 越过参考右端
            }
            candidates.push(cand as u32);
        }
    }
    candidates.sort_unstable();
    candidates.dedup();

    let mut matches = Vec::new();
    for cand in candidates {
        let window = &text[cand as usize..cand as usize + query_len];
        if let Some(mismatches) = hamming_within(window, query, errors) {
            matches.push(Match { pos: cand, mismatches });
        }
    }
    Ok(matches)
}
