pub mod enums;
pub mod id;
pub mod record;
pub mod task;
pub mod time;

pub use enums::{Priority, SessionLength, UiMode};
pub use id::IdGen;
pub use record::{ceil_minutes, SessionRecord};
pub use task::Task;
pub use time::{format_clock, format_seconds};
