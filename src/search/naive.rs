/// 朴素滑窗精确匹配：返回 [0, n-m] 内所有逐符号相等的起始位置。
/// 无任何辅助结构，O((n-m+1)·m)；既是独立策略，
/// 也是其他策略在测试中的正确性基准。
pub fn find_all(reference: &[u8], query: &[u8]) -> Vec<u32> {
    let n = reference.len();
    let m = query.len();
    let mut positions = Vec::new();
    // 空查询永不匹配；查询比参考长时没有可行窗口，不是错误
    if m == 0 || m > n {
        return positions;
    }
    for i in 0..=n - m {
        if &reference[i..i + m] == query {
            positions.push(i as u32);
        }
    }
    positions
}
