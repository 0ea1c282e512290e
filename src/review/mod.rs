pub mod decision;
pub mod session;
