pub mod codec;
pub mod error;
pub mod keys;
pub mod service_claims;
pub mod service_minter;
pub mod session_claims;

pub use codec::TokenCodec;
pub use error::{Result, TokenError};
pub use keys::TokenKeys;
pub use service_claims::ServiceClaims;
pub use service_minter::ServiceTokenMinter;
pub use session_claims::SessionClaims;
