// tests/support/mocks/mod.rs
pub mod article_store;
pub mod time;

pub use article_store::{InMemoryArticleStore, UnavailableStore};
pub use time::{SteppingClock, fixed_now};
