//! 演示如何在 library 模式下使用 samatch 进行精确与近似搜索。
//!
//! 运行方式：
//! ```bash
//! cargo run --example simple_search
//! ```

use samatch::index::SaIndex;
use samatch::search::{naive, pigeon};
use samatch::util::dna;

fn main() {
    // 1. 构建参考序列
    let reference = b"ACGTACGTAGCTGATCGTAGCTAGCTAGCTGATCGTAGCTAGCTAGCTGAT";
    println!("参考序列: {}", std::str::from_utf8(reference).unwrap());
    println!("参考长度: {} bp", reference.len());

    // 2. 构建后缀数组索引
    let text = dna::encode_seq(reference);
    let index = SaIndex::build(&text, Vec::new());
    println!("索引构建完成：SA 长度={}", index.len());

    // 3. 精确匹配搜索
    let pattern = b"GCTGATCGTAG";
    let positions = index.find(&dna::encode_seq(pattern));
    println!(
        "\n精确匹配 '{}': 找到 {} 处",
        std::str::from_utf8(pattern).unwrap(),
        positions.len()
    );
    for pos in &positions {
        println!("  position={}", pos);
    }

    // 4. 与朴素扫描对照
    let by_naive = naive::find_all(&text, &dna::encode_seq(pattern));
    println!("朴素扫描同样找到 {} 处", by_naive.len());

    // 5. 种子切分
    let query = b"GCTGATCGTAGCTAGCTAGG"; // 末尾带一个错配
    let spans = pigeon::seed_spans(query.len(), 2);
    println!("\n查询 '{}' 切成 2 个种子:", std::str::from_utf8(query).unwrap());
    for (start, end) in &spans {
        println!("  query[{}..{}]", start, end);
    }

    // 6. 允许 1 个错配的近似搜索
    let hits = pigeon::search(&index, &dna::encode_seq(query), 1).unwrap();
    println!("\n近似匹配（e=1）:");
    for m in &hits {
        println!("  position={}, mismatches={}", m.pos, m.mismatches);
    }

    println!("\n完成！");
}
