pub mod glob;
pub mod search;
pub mod size;

pub use glob::{glob_recursive, Pattern};
pub use search::{find_index, NodeName};
pub use size::parse_size;
