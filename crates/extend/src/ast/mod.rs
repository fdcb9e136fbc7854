pub use node::*;
pub use selector::*;
pub use stmt::*;

mod node;
mod selector;
mod stmt;
