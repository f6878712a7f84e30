//! HTML views
//!
//! Pure functions from page data to markup. No templates on disk, no hidden
//! state: everything a page shows comes in through its arguments, and every
//! user-supplied string is escaped.

mod layout;
mod pages;

pub use layout::layout;
pub use pages::{error_page, form_page, index_page};

/// Data every page shares
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub title: &'a str,
    /// Flash messages to show above the content
    pub flashes: &'a [String],
    /// Masked connection string for the footer
    pub database_display: &'a str,
}

impl<'a> PageContext<'a> {
    pub fn new(title: &'a str, flashes: &'a [String], database_display: &'a str) -> Self {
        Self {
            title,
            flashes,
            database_display,
        }
    }
}

fn text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

fn attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}
