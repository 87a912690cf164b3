/// 构建后缀数组（倍增法）。
/// 输入为数值化的文本（util::dna 编码，0 保留给哨兵、正常序列中不出现）。
/// 排序口径：越界位置按秩 -1 参与比较，等价于在文本概念上的末尾放一个
/// 比所有符号都小的哨兵，因此较短后缀排在它的任何延长之前。
/// 每轮按 (rank[i], rank[i+k]) 排序并重新分配秩，k 逐轮翻倍，
/// 共 O(log n) 轮、每轮 O(n log n)，对高度重复的文本同样正确。
pub fn build_sa(text: &[u8]) -> Vec<u32> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sa: Vec<usize> = (0..n).collect();
    // 初始秩直接取符号编码，首轮即按第一个符号有序
    let mut rank: Vec<i32> = text.iter().map(|&b| i32::from(b)).collect();
    let mut next_rank: Vec<i32> = vec![0; n];

    let mut k = 1usize;
    while k < n {
        let pair = |i: usize| (rank[i], if i + k < n { rank[i + k] } else { -1 });
        sa.sort_unstable_by_key(|&i| pair(i));

        next_rank[sa[0]] = 0;
        for t in 1..n {
            let bump = i32::from(pair(sa[t]) != pair(sa[t - 1]));
            next_rank[sa[t]] = next_rank[sa[t - 1]] + bump;
        }
        rank.copy_from_slice(&next_rank);

        // 秩已两两不同，顺序固定
        if rank[sa[n - 1]] as usize == n - 1 {
            break;
        }
        k <<= 1;
    }

    sa.into_iter().map(|i| i as u32).collect()
}
