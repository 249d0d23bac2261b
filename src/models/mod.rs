pub mod action;
pub mod event;
pub mod report;

pub use action::Action;
pub use event::Event;
pub use report::{AggregateResult, Balance, DailyTotal};
