use anyhow::{Context, Result};

use crate::error::SearchError;
use crate::index::sa_index::Contig;
use crate::io::fasta::FastaReader;
use crate::util::dna;

/// 一条已编码的查询序列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub id: String,
    pub seq: Vec<u8>,
}

/// 参考序列存储：所有记录拼接成一条编码文本。
/// 拼接会丢失记录边界，因此按记录保留 (name, len, offset)，
/// 需要记录内坐标的调用方经由 contigs 自行换算。
#[derive(Debug)]
pub struct ReferenceStore {
    pub text: Vec<u8>,
    pub contigs: Vec<Contig>,
}

/// 读入参考 FASTA（支持 .gz），规范化并编码后拼接。
pub fn load_reference(path: &str) -> Result<ReferenceStore> {
    let mut reader = FastaReader::open(path)?;
    let mut text: Vec<u8> = Vec::new();
    let mut contigs: Vec<Contig> = Vec::new();

    while let Some(rec) = reader
        .next_record()
        .with_context(|| format!("reading reference FASTA '{}'", path))?
    {
        let offset = text.len() as u32;
        text.extend(dna::encode_seq(&rec.seq));
        contigs.push(Contig {
            name: rec.id,
            len: text.len() as u32 - offset,
            offset,
        });
    }

    if text.is_empty() {
        anyhow::bail!("reference FASTA '{}' contains no sequence data", path);
    }
    Ok(ReferenceStore { text, contigs })
}

/// 读入查询 FASTA（支持 .gz），每条记录单独编码。
pub fn load_queries(path: &str) -> Result<Vec<Query>> {
    let mut reader = FastaReader::open(path)?;
    let mut queries = Vec::new();
    while let Some(rec) = reader
        .next_record()
        .with_context(|| format!("reading query FASTA '{}'", path))?
    {
        queries.push(Query {
            id: rec.id,
            seq: dna::encode_seq(&rec.seq),
        });
    }
    Ok(queries)
}

/// 查询复制策略：整体翻倍（把当前前 m 条整段追加）直到数量 ≥ count，
/// 再截断到恰好 count 条。只复制，不重排、不改写内容。
/// 初始列表为空而 count > 0 时没有可复制的内容，报错。
pub fn replicate_queries<T: Clone>(mut queries: Vec<T>, count: usize) -> Result<Vec<T>, SearchError> {
    if queries.is_empty() {
        if count == 0 {
            return Ok(queries);
        }
        return Err(SearchError::EmptyQuerySet { requested: count });
    }
    while queries.len() < count {
        let old = queries.len();
        queries.extend_from_within(..old);
    }
    queries.truncate(count);
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replicate_two_to_five() {
        let out = replicate_queries(vec!["q0", "q1"], 5).unwrap();
        assert_eq!(out, vec!["q0", "q1", "q0", "q1", "q0"]);
    }

    #[test]
    fn replicate_truncates_when_enough() {
        let out = replicate_queries(vec![1, 2, 3], 2).unwrap();
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn replicate_exact_count_is_identity() {
        let out = replicate_queries(vec![1, 2, 3], 3).unwrap();
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn replicate_keeps_order_over_multiple_doublings() {
        let out = replicate_queries(vec![1, 2, 3], 10).unwrap();
        assert_eq!(out, vec![1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
    }

    #[test]
    fn replicate_empty_to_zero_is_fine() {
        let out: Vec<u8> = replicate_queries(Vec::new(), 0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn replicate_empty_to_nonzero_is_rejected() {
        let err = replicate_queries(Vec::<u8>::new(), 4).unwrap_err();
        assert_eq!(err, SearchError::EmptyQuerySet { requested: 4 });
    }
}
