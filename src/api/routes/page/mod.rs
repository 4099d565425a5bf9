pub mod public;
mod router;
mod template;
pub use router::router;
pub use template::templates;
