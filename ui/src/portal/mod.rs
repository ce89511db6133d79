pub mod controller;
pub mod identity;
pub mod role;
pub mod store;
pub mod theme;

pub use controller::{Intent, LoginError, Portal, PortalView, Screen, Transition};
pub use identity::{IdentityProvider, PlaceholderIdentity};
pub use role::{Destination, Role};
pub use store::{MemoryStore, StateStore, StoreKey};
pub use theme::Theme;

#[cfg(feature = "web")]
pub use store::BrowserStore;
