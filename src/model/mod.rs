mod quote;
mod task;
mod user;

pub use quote::{Quote, QuotePage};
pub use task::{NewTask, Task, TaskId, TaskPatch};
pub use user::{User, UserPatch};
