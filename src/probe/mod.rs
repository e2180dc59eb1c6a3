//! Form discovery and payload submission

pub mod forms;
pub mod inject;

pub use forms::{discover_forms, extract_forms};
pub use inject::{build_form_data, submit_form};
