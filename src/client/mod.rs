mod collect;
mod http;
mod view;

pub use collect::{COMMON_INGREDIENTS, collect, parse_common};
pub use http::submit;
pub use view::{ViewState, render};
