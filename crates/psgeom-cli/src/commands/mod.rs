pub mod eval;
pub mod filter;
pub mod shapes;
pub mod stage;
pub mod sweep;
