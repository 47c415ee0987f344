use color_eyre::eyre::Result;
use secrecy::Secret;

use super::Principal;

/// Client for the external authentication collaborator's identity endpoint.
/// Returning `Ok(None)` means the token does not correspond to a live
/// session; transport failures are errors.
#[async_trait::async_trait]
pub trait AuthClient {
    async fn get_identity(
        &self,
        token: &Secret<String>,
    ) -> Result<Option<Principal>>;
}
