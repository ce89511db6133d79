use super::identity::{IdentityError, IdentityProvider};
use super::role::{Destination, Role};
use super::store::{StateStore, StoreKey};
use super::theme::Theme;

/// Stand-in session token. Nothing ever checks it.
pub const PLACEHOLDER_TOKEN: &str = "demo-token";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    RoleSelection,
    LoginForm,
}

/// Named user intents, one per interactive control on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    SelectRole(Role),
    GoBack,
    ToggleTheme,
    Submit { email: String, password: String },
    Credential(String),
    SignOut,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Navigate(Destination),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please fill in all fields")]
    EmptyCredentials,
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// What the view layer needs to render.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PortalView {
    pub screen: Screen,
    pub theme: Theme,
    pub role: Option<Role>,
    pub signed_in: bool,
}

impl PortalView {
    /// Text shown next to "Signing in as".
    pub fn role_label(&self) -> Option<&'static str> {
        self.role.map(|r| r.label())
    }
}

/// Two-screen portal state machine over an injected store and sign-in
/// provider. Every operation is synchronous and either completes or leaves
/// the state untouched.
pub struct Portal<S, I> {
    store: S,
    identity: I,
    screen: Screen,
    theme: Theme,
    role: Option<Role>,
}

impl<S: StateStore, I: IdentityProvider> Portal<S, I> {
    /// Page-load initialization. Unknown persisted values count as absent.
    pub fn load(store: S, identity: I) -> Self {
        let theme = store
            .get(StoreKey::Theme)
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();
        let role = store.get(StoreKey::UserRole).and_then(|r| r.parse().ok());

        log::debug!("portal loaded: theme={theme} role={role:?}");

        Self {
            store,
            identity,
            screen: Screen::RoleSelection,
            theme,
            role,
        }
    }

    pub fn view(&self) -> PortalView {
        PortalView {
            screen: self.screen,
            theme: self.theme,
            role: self.role,
            signed_in: self.store.get(StoreKey::UserToken).is_some(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn client_id(&self) -> &str {
        self.identity.client_id()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn dispatch(&mut self, intent: Intent) -> Result<Transition, LoginError> {
        match intent {
            Intent::SelectRole(role) => self.select_role(role),
            Intent::GoBack => self.back_to_roles(),
            Intent::ToggleTheme => {
                self.toggle_theme();
            }
            Intent::Submit { email, password } => {
                return self.submit_login(&email, &password).map(Transition::Navigate);
            }
            Intent::Credential(credential) => {
                return self
                    .sign_in_with_credential(&credential)
                    .map(Transition::Navigate);
            }
            Intent::SignOut => self.sign_out(),
        }
        Ok(Transition::Stay)
    }

    pub fn select_role(&mut self, role: Role) {
        self.store.set(StoreKey::UserRole, role.label());
        self.role = Some(role);
        self.screen = Screen::LoginForm;
        log::info!("role selected: {role}");
    }

    pub fn back_to_roles(&mut self) {
        self.store.remove(StoreKey::UserRole);
        self.role = None;
        self.screen = Screen::RoleSelection;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(StoreKey::Theme, self.theme.as_str());
        self.theme
    }

    /// Mock sign-in: any non-empty pair is accepted.
    pub fn submit_login(&mut self, email: &str, password: &str) -> Result<Destination, LoginError> {
        if email.is_empty() || password.is_empty() {
            log::warn!("login rejected: empty credentials");
            return Err(LoginError::EmptyCredentials);
        }
        Ok(self.complete_sign_in())
    }

    pub fn sign_in_with_credential(&mut self, credential: &str) -> Result<Destination, LoginError> {
        if credential.is_empty() {
            return Err(IdentityError::MissingCredential.into());
        }
        self.identity.verify(credential).inspect_err(|e| {
            log::warn!("identity sign-in failed: {e}");
        })?;
        Ok(self.complete_sign_in())
    }

    pub fn sign_out(&mut self) {
        self.store.remove(StoreKey::UserToken);
        self.back_to_roles();
        log::info!("signed out");
    }

    pub fn redirect_target(&self) -> Destination {
        self.role
            .map(|r| r.destination())
            .unwrap_or(Destination::Dashboard)
    }

    fn complete_sign_in(&mut self) -> Destination {
        self.store.set(StoreKey::UserToken, PLACEHOLDER_TOKEN);
        let target = self.redirect_target();
        log::info!("signed in as {:?}, redirecting to {}", self.role, target.href());
        target
    }
}
