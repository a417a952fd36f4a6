//! Reading edge lists.

pub use edge_list::EdgeList;
pub use parser::parse;

mod edge_list;
mod parser;
