pub mod store;
pub mod csv;
pub mod container;
