pub mod google_button;
pub mod login_form;
pub mod role_cards;
pub mod theme_toggle;
