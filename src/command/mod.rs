mod countdown;
mod task;

pub use countdown::countdown;
pub use task::Task;
