// Models module for data structures
pub mod compare;
pub mod version;
