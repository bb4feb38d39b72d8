pub mod cart;
pub mod chat;
pub mod common;
pub mod menu;
pub mod payment;
pub mod session;
pub mod voice;
