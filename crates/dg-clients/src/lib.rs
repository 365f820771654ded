pub mod authenticator;
pub mod directory;
pub mod error;
pub mod validation;

pub use authenticator::{AuthError, DirectoryAuthenticator};
pub use directory::DirectoryClient;
pub use error::{ClientError, Result};
pub use validation::ValidationClient;
