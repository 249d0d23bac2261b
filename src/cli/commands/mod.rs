pub mod config;
pub mod daily;
mod report;
pub mod total;
