pub mod services;
pub mod tree;
