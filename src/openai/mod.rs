mod core;
pub use core::{API_VERSION, CompletionError, Message, Role, completion};
