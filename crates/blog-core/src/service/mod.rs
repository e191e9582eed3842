//! Services - the only callers of the repository ports.

mod post;

pub use post::PostService;
