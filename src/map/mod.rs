pub mod coordinator;
pub mod marker;
pub mod view;
pub mod viewport;
