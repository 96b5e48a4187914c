pub mod auth_modal;
pub mod borrow_form;
pub mod cards;
pub mod chart;
pub mod docs_sidebar;
pub mod footer;
pub mod form;
pub mod header;
pub mod layout;
pub mod lend_form;
pub mod rewards_overview;
