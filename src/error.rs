use thiserror::Error;

/// 搜索引擎的错误分类。
/// 注意：查询未命中不是错误，空结果集即正常返回。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// 错误预算 e 要求 e+1 个种子，但查询长度不足，每个种子会退化为空串。
    #[error("error budget {errors} requires more seeds than the {query_len}-symbol query can provide")]
    SeedBudget { errors: u32, query_len: usize },

    /// 查询集合为空时无法复制扩充到非零数量。
    #[error("cannot replicate an empty query set to {requested} queries")]
    EmptyQuerySet { requested: usize },

    /// 反序列化得到的索引与给定参考序列长度不一致，继续查询只会得到错误结果。
    #[error("index covers {index_len} symbols but reference has {reference_len}")]
    IndexMismatch { index_len: usize, reference_len: usize },
}
