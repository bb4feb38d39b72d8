pub mod check_transaction;
pub mod depay_callback;
pub mod payment_page;
pub mod webhook;
