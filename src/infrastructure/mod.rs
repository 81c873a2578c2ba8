//! Hardware bindings: the pixel driver, the access point and the tasks that
//! keep them running.

pub mod drivers;
pub mod tasks;
pub mod types;
