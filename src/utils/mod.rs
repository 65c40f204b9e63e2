pub mod safely;

pub use safely::{call_safely, for_each_safely, panic_message};
