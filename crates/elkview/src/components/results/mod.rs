//! Results components: the fetching view and what it renders.

mod result_body;
mod result_view;

pub use result_body::{ErrorMessage, LoadingIndicator, ResultBody, ResultItem, ResultList};
pub use result_view::ResultView;
