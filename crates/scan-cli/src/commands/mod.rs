pub mod catalog;
pub mod chat;
pub mod dispatch;
pub mod rank;
pub mod schema;
pub mod shared;
