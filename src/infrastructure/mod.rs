pub mod database;
pub mod markdown;
pub mod repositories;
pub mod time;
pub mod util;
