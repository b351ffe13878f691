//! App shell components: PageHeader

mod page_header;

pub use page_header::PageHeader;
