pub mod initialize;
pub mod pool;

pub use initialize::{ensure_table, init_db};
pub use pool::DbPool;
