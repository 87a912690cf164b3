use anyhow::Result;
use clap::{Parser, Subcommand};

mod error;
mod index;
mod io;
mod search;
mod store;
mod util;

use index::sa_index::{IndexMeta, SaIndex};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "samatch", author, version, about = "Suffix-array based exact and approximate DNA pattern matching", arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a suffix array index of the reference and save it to disk
    Index {
        /// Reference FASTA file (.gz supported)
        reference: String,
        /// Output prefix for the index file
        #[arg(short, long, default_value = "ref")]
        output: String,
    },
    /// Brute-force sliding-window search (baseline)
    Naive {
        /// Reference FASTA file
        reference: String,
        /// Query FASTA file
        query: String,
        /// Number of queries; the query list is duplicated until large enough
        #[arg(long = "query-ct", default_value_t = 100)]
        query_ct: usize,
        /// Worker threads (0 = all logical cores)
        #[arg(short = 't', long = "threads", default_value_t = 0)]
        threads: usize,
    },
    /// Exact search via binary search on the suffix array
    Exact {
        /// Reference FASTA file
        reference: String,
        /// Query FASTA file
        query: String,
        #[arg(long = "query-ct", default_value_t = 100)]
        query_ct: usize,
        /// Load a prebuilt index (.sa) instead of rebuilding
        #[arg(short = 'i', long = "index")]
        index: Option<String>,
        #[arg(short = 't', long = "threads", default_value_t = 0)]
        threads: usize,
    },
    /// Approximate search: pigeonhole seeding with Hamming verification
    Pigeon {
        /// Reference FASTA file
        reference: String,
        /// Query FASTA file
        query: String,
        #[arg(long = "query-ct", default_value_t = 100)]
        query_ct: usize,
        /// Number of allowed mismatches
        #[arg(short = 'e', long = "errors", default_value_t = 0)]
        errors: u32,
        #[arg(short = 'i', long = "index")]
        index: Option<String>,
        #[arg(short = 't', long = "threads", default_value_t = 0)]
        threads: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Index { reference, output } => run_index(&reference, &output),
        Commands::Naive { reference, query, query_ct, threads } => {
            init_threads(threads)?;
            run_naive(&reference, &query, query_ct)
        }
        Commands::Exact { reference, query, query_ct, index, threads } => {
            init_threads(threads)?;
            run_exact(&reference, &query, query_ct, index.as_deref())
        }
        Commands::Pigeon { reference, query, query_ct, errors, index, threads } => {
            init_threads(threads)?;
            run_pigeon(&reference, &query, query_ct, errors, index.as_deref())
        }
    }
}

fn init_threads(threads: usize) -> Result<()> {
    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }
    Ok(())
}

fn run_index(reference: &str, output: &str) -> Result<()> {
    let store = store::load_reference(reference)?;
    println!("reference: {}", reference);
    println!("sequences: {}", store.contigs.len());
    println!("total_len: {}", store.text.len());

    let mut idx = SaIndex::build(&store.text, store.contigs.clone());
    idx.set_meta(IndexMeta {
        reference_file: Some(reference.to_string()),
        build_args: Some(std::env::args().collect::<Vec<_>>().join(" ")),
        build_timestamp: Some(chrono::Utc::now().to_rfc3339()),
    });

    let out_path = format!("{}.sa", output);
    idx.save_to_file(&out_path)
        .map_err(|e| anyhow::anyhow!("cannot write index to '{}': {}", out_path, e))?;
    println!("suffix array index saved: {}", out_path);
    Ok(())
}

/// 加载已落盘的索引（与参考对账），或直接现场构建。
fn open_index<'t>(store: &'t store::ReferenceStore, path: Option<&str>) -> Result<SaIndex<'t>> {
    match path {
        Some(p) => {
            let idx = SaIndex::load_from_file(p, &store.text)
                .map_err(|e| anyhow::anyhow!("cannot load index '{}': {}", p, e))?;
            Ok(idx)
        }
        None => Ok(SaIndex::build(&store.text, store.contigs.clone())),
    }
}

fn load_query_set(path: &str, query_ct: usize) -> Result<Vec<store::Query>> {
    let queries = store::load_queries(path)?;
    Ok(store::replicate_queries(queries, query_ct)?)
}

fn run_naive(reference: &str, query: &str, query_ct: usize) -> Result<()> {
    let store = store::load_reference(reference)?;
    let queries = load_query_set(query, query_ct)?;
    report(&search::run_naive(&store.text, &queries));
    Ok(())
}

fn run_exact(reference: &str, query: &str, query_ct: usize, index_path: Option<&str>) -> Result<()> {
    let store = store::load_reference(reference)?;
    let queries = load_query_set(query, query_ct)?;
    let idx = open_index(&store, index_path)?;
    report(&search::run_exact(&idx, &queries));
    Ok(())
}

fn run_pigeon(
    reference: &str,
    query: &str,
    query_ct: usize,
    errors: u32,
    index_path: Option<&str>,
) -> Result<()> {
    let store = store::load_reference(reference)?;
    let queries = load_query_set(query, query_ct)?;
    let idx = open_index(&store, index_path)?;
    report(&search::run_pigeon(&idx, &queries, errors));
    Ok(())
}

/// 逐条渲染批次结果；单条查询失败只影响自己那一行。
fn report(outcomes: &[search::QueryOutcome]) {
    for o in outcomes {
        match &o.result {
            Ok(matches) if matches.is_empty() => {
                println!("{}: Query not found.", o.id);
            }
            Ok(matches) => {
                let rendered: Vec<String> = matches
                    .iter()
                    .map(|m| {
                        if m.mismatches == 0 {
                            m.pos.to_string()
                        } else {
                            format!("{}({})", m.pos, m.mismatches)
                        }
                    })
                    .collect();
                println!("{}: Query found at positions: {}", o.id, rendered.join(" "));
            }
            Err(e) => {
                eprintln!("{}: error: {}", o.id, e);
            }
        }
    }
}
