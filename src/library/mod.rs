pub mod seen;
pub mod selector;
