pub mod macros;
pub mod max;
pub mod pitfalls;
pub mod sugar;
pub mod sort;
pub mod transcript;
pub mod demo;
pub mod error;

pub use paste;

pub use demo::{Demo, DemoConfig};
pub use error::LabError;
pub use error::LabResult;
pub use transcript::Transcript;
