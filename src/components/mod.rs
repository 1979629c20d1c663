pub mod common;
pub mod empty_state;
pub mod forms;
pub mod layout;
pub mod table;
