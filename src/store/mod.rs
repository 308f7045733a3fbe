mod posts;
mod users;

pub use posts::{PostFilter, PostPage, PostStore};
pub use users::UserStore;
