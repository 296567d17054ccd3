//! Endpoint operations, one facet per API area
//!
//! Every operation follows the same shape: fail fast if the client is
//! closed, run the capability guard, validate parameters, build the
//! route, issue exactly one transport call, and wrap the payload in the
//! matching response model. Mutation operations return no model.

mod avatars;
mod guilds;
mod ksoft;
mod tokens;
mod urls;
mod users;

pub use avatars::{Avatar, Avatars};
pub use guilds::Guilds;
pub use ksoft::KSoft;
pub use tokens::Tokens;
pub use urls::Urls;
pub use users::Users;
