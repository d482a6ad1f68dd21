pub mod terminal;
pub mod timer;
#[cfg(test)]
mod timer_test;
