mod models;
pub use models::{Session, Transcript, Turn};
