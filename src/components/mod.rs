//! UI Components
//!
//! Leptos components reading the view-model and session from context.

mod auth_header;
mod new_todo_form;
mod notice_toasts;
mod stats_bar;
mod todo_list;
mod todo_row;

pub use auth_header::AuthHeader;
pub use new_todo_form::NewTodoForm;
pub use notice_toasts::NoticeToasts;
pub use stats_bar::StatsBar;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
