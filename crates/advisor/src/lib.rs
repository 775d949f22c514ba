//! # Wise Advisor
//!
//! The offline advice engine. A question is lower-cased and run through an
//! ordered table of topic triggers; the first match produces a canned,
//! optionally personalized answer with citations. Questions no topic claims
//! go to a fee follow-up rule, then a small glossary, then general guidance.
//!
//! Everything here is pure and synchronous: same input, same reply.

pub mod catalog;
pub mod context;
pub mod dispatcher;
pub mod format;
pub mod rules;
pub mod topics;

pub use catalog::Link;
pub use context::AdviceContext;
pub use dispatcher::{Dispatch, Rule, advise, dispatch};
pub use topics::{Topic, topic, topics};
