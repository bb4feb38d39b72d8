use crate::domain::{cart::entities::Cart, chat::entities::Conversation};

/// Per-browser state kept between requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    pub cart: Cart,
    pub conversation: Option<Conversation>,
}
