//! Network input: edge records from the editor, the editing session, and
//! conversion to the adjacency matrix the algorithms consume.

pub mod builder;
pub mod edge;
pub mod session;

pub use builder::build_matrix;
pub use edge::{EdgeRecord, WeightLabel, DEFAULT_WEIGHT};
pub use session::{GraphSession, GraphSnapshot};
