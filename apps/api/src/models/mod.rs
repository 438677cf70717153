pub mod catalog;
pub mod document;
pub mod forms;
pub mod section;
