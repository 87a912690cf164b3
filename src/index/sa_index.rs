use std::cmp::Ordering;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::index::sa;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Contig {
    pub name: String,
    pub len: u32,
    pub offset: u32,
}

/// 索引构建时的元信息，随索引一起落盘。
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct IndexMeta {
    pub reference_file: Option<String>,
    pub build_args: Option<String>,
    pub build_timestamp: Option<String>,
}

/// 基于后缀数组的精确匹配索引：
/// - 参考文本只读共享（借用），后缀数组归索引独占所有；
/// - `range` 在后缀数组上二分，返回以模式为前缀的后缀区间 [lower, upper)；
/// - 构建一次后不再修改，可在任意多个查询间无锁共享。
#[derive(Debug)]
pub struct SaIndex<'t> {
    pub text: &'t [u8],
    pub sa: Vec<u32>,
    pub contigs: Vec<Contig>,
    pub meta: IndexMeta,
}

/// 序列化载体：参考文本是共享数据、不随索引落盘，加载时重新对上。
#[derive(Debug, Serialize, Deserialize)]
struct SaIndexBlob {
    sa: Vec<u32>,
    contigs: Vec<Contig>,
    meta: IndexMeta,
}

impl<'t> SaIndex<'t> {
    /// 对参考文本构建索引。文本应为 util::dna 编码后的序列。
    pub fn build(text: &'t [u8], contigs: Vec<Contig>) -> Self {
        let sa_arr = sa::build_sa(text);
        Self {
            text,
            sa: sa_arr,
            contigs,
            meta: IndexMeta::default(),
        }
    }

    pub fn set_meta(&mut self, meta: IndexMeta) {
        self.meta = meta;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// 比较 start 处的后缀与模式：
    /// 先逐符号比较前 min(|后缀|, |模式|) 个符号；前缀相同时，
    /// 更短的后缀不可能包含模式，判为 Less；Equal 表示模式是该后缀的前缀。
    /// 两个二分边界共用这一个比较器，只是对 Equal 的取舍方向不同。
    fn cmp_suffix(&self, start: usize, pat: &[u8]) -> Ordering {
        let suffix = &self.text[start..];
        let common = suffix.len().min(pat.len());
        match suffix[..common].cmp(&pat[..common]) {
            Ordering::Equal if suffix.len() < pat.len() => Ordering::Less,
            Ordering::Equal => Ordering::Equal,
            other => other,
        }
    }

    /// 返回后缀数组上以 pat 为前缀的最大连续区间 [lower, upper)，
    /// lower == upper 表示未命中。每次比较 O(|pat|)，共 O(|pat| log n)。
    pub fn range(&self, pat: &[u8]) -> (usize, usize) {
        if pat.is_empty() {
            // 空查询按"永不匹配"处理
            return (0, 0);
        }
        let lower = self
            .sa
            .partition_point(|&p| self.cmp_suffix(p as usize, pat) == Ordering::Less);
        let upper = self
            .sa
            .partition_point(|&p| self.cmp_suffix(p as usize, pat) != Ordering::Greater);
        (lower, upper)
    }

    /// 取出区间对应的文本位置（后缀数组顺序，未按位置排序）。
    pub fn positions(&self, lower: usize, upper: usize) -> &[u32] {
        &self.sa[lower..upper]
    }

    /// 精确搜索：返回按参考位置升序排列的全部命中。
    pub fn find(&self, pat: &[u8]) -> Vec<u32> {
        let (lower, upper) = self.range(pat);
        let mut positions = self.sa[lower..upper].to_vec();
        positions.sort_unstable();
        positions
    }

    /// 将拼接坐标映射到 (contig 序号, contig 内偏移)。
    pub fn map_text_pos(&self, pos: u32) -> Option<(usize, u32)> {
        if self.contigs.is_empty() {
            return None;
        }
        let mut lo = 0usize;
        let mut hi = self.contigs.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            let c = &self.contigs[mid];
            if pos < c.offset {
                hi = mid;
            } else if pos >= c.offset + c.len {
                lo = mid + 1;
            } else {
                return Some((mid, pos - c.offset));
            }
        }
        None
    }

    pub fn save_to_file(&self, path: &str) -> Result<()> {
        let blob = SaIndexBlob {
            sa: self.sa.clone(),
            contigs: self.contigs.clone(),
            meta: self.meta.clone(),
        };
        let mut f = std::fs::File::create(path)?;
        bincode::serialize_into(&mut f, &blob)?;
        Ok(())
    }

    /// 加载落盘的索引并对上参考文本。
    /// 索引长度与参考长度不一致说明索引不是从这份参考构建的，直接报错，
    /// 而不是带着错误结果继续查询。
    pub fn load_from_file(path: &str, text: &'t [u8]) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        let blob: SaIndexBlob = bincode::deserialize_from(f)?;
        if blob.sa.len() != text.len() {
            return Err(SearchError::IndexMismatch {
                index_len: blob.sa.len(),
                reference_len: text.len(),
            }
            .into());
        }
        Ok(Self {
            text,
            sa: blob.sa,
            contigs: blob.contigs,
            meta: blob.meta,
        })
    }
}
