pub mod filter;
pub mod view_model;
