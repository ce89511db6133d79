/// Public OAuth client id handed to the Google sign-in widget.
pub const GOOGLE_CLIENT_ID: &str = match option_env!("PORTAL_GOOGLE_CLIENT_ID") {
    Some(id) => id,
    None => "YOUR_GOOGLE_CLIENT_ID",
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("no credential was returned by the sign-in provider")]
    MissingCredential,
    #[error("sign-in provider rejected the credential: {0}")]
    Rejected(String),
}

/// An external sign-in provider. It gets an opaque credential and decides
/// whether it is acceptable; the portal never looks inside it.
pub trait IdentityProvider {
    fn client_id(&self) -> &str;
    fn verify(&self, credential: &str) -> Result<(), IdentityError>;
}

/// Accepts any non-empty credential. There is no backend to check against.
#[derive(Debug, Clone)]
pub struct PlaceholderIdentity {
    client_id: String,
}

impl PlaceholderIdentity {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }
}

impl Default for PlaceholderIdentity {
    fn default() -> Self {
        Self::new(GOOGLE_CLIENT_ID)
    }
}

impl IdentityProvider for PlaceholderIdentity {
    fn client_id(&self) -> &str {
        &self.client_id
    }

    fn verify(&self, credential: &str) -> Result<(), IdentityError> {
        if credential.is_empty() {
            return Err(IdentityError::MissingCredential);
        }
        Ok(())
    }
}
