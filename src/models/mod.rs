mod category;
mod post;

pub use category::*;
pub use post::*;
