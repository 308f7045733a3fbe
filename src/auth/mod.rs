mod gate;
mod token;

pub use gate::{AuthUser, OptionalUser};
pub use token::{Claims, TokenService};
