pub mod cart;
pub mod chat;
pub mod health;
pub mod html;
pub mod menu;
pub mod payment;
pub mod server;
pub mod session;
pub mod voice;

#[cfg(test)]
mod test;
