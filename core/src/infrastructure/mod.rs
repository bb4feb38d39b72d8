pub mod ethereum;
pub mod llm;
pub mod menu;
pub mod session;
pub mod voice;
