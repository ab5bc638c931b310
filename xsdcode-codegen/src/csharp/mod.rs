//! C# source rendering modules.

pub mod expressions;
pub mod types;

pub use expressions::ExpressionRenderer;
pub use types::TypeRenderer;
