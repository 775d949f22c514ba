//! Advice providers for Wise.
//!
//! All providers implement the `wise_core::AdviceProvider` trait. The
//! [`AdvisorService`] puts an optional external chain in front of the local
//! engine so a question always gets an answer.

pub mod citations;
pub mod fallback;
pub mod local;
pub mod service;

pub use citations::extract_sources;
pub use fallback::FallbackProvider;
pub use local::LocalProvider;
pub use service::AdvisorService;
