//! Auth-domain identifiers, roles, and search-token models.

pub mod id;
pub mod role;
pub mod token;

pub use id::*;
pub use role::*;
pub use token::{access::*, claims::*, credential::*, integrity::*};
