pub mod json_menu_repository;

pub use json_menu_repository::JsonMenuRepository;
