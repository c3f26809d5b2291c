//! 界面组件模块

pub mod assign_form;
pub mod assignment_table;
pub mod filter_bar;

pub use assign_form::AssignForm;
pub use assignment_table::AssignmentTable;
pub use filter_bar::FilterBar;
