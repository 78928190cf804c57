pub mod cubic;
pub mod fibonacci;
pub mod rollup;
