//! # samatch
//!
//! 基于后缀数组的 DNA 模式匹配引擎，支持精确匹配与容忍错配的近似匹配。
//!
//! 本 crate 提供三种共用一套数据模型的匹配策略：
//!
//! - **朴素扫描**：滑动窗口暴力匹配，作为基准与正确性参照
//! - **精确索引**：倍增法构建后缀数组，二分查找模式对应的后缀区间
//! - **种子-延伸**：鸽笼原理的近似匹配。查询切成 e+1 个不相交种子，
//!   精确索引命中种子后对完整窗口做 Hamming 验证
//!
//! ## 快速示例
//!
//! ```rust
//! use samatch::index::SaIndex;
//! use samatch::search::pigeon;
//! use samatch::util::dna;
//!
//! // 构建索引
//! let text = dna::encode_seq(b"ACGTACGTAC");
//! let index = SaIndex::build(&text, Vec::new());
//!
//! // 精确匹配搜索
//! let positions = index.find(&dna::encode_seq(b"GTAC"));
//! assert_eq!(positions, vec![2, 6]);
//!
//! // 允许 1 个错配的近似搜索
//! let hits = pigeon::search(&index, &dna::encode_seq(b"GTAA"), 1).unwrap();
//! assert!(hits.iter().any(|m| m.pos == 2 && m.mismatches == 1));
//! ```
//!
//! ## 模块说明
//!
//! - [`io`] — FASTA 文件解析（支持 gzip）
//! - [`store`] — 参考/查询序列装载与查询复制策略
//! - [`index`] — 后缀数组构建与精确匹配索引（含落盘/加载）
//! - [`search`] — 三种匹配策略与批量查询驱动
//! - [`util`] — DNA 编码/解码工具
//! - [`error`] — 引擎错误分类

pub mod error;
pub mod index;
pub mod io;
pub mod search;
pub mod store;
pub mod util;
