pub mod template;
pub mod section;
pub mod search_modal;
