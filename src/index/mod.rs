pub mod sa;
pub mod sa_index;

pub use sa::build_sa;
pub use sa_index::{Contig, IndexMeta, SaIndex};
