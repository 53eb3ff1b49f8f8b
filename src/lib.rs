pub mod ast;
pub mod env;
pub mod error;
pub mod eval;
pub mod maxargs;
