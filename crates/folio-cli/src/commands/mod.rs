pub mod dispatch;
pub mod endpoints;
pub mod fetch;
pub mod login;
pub mod media;
pub mod push;
pub mod schema;
pub mod serve;
pub mod shared;
