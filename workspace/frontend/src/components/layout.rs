pub mod layout;
pub mod navbar;
pub mod page_header;
pub mod sidebar;
