pub mod broadcast;
pub mod connection;
pub mod dispatch;
pub mod handlers;
pub mod message;
pub mod send;
