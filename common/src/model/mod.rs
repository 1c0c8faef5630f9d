pub mod page;
pub mod report;
pub mod state;
