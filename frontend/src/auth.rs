use web_sys::window;
use log::info;
use crate::config;

pub fn is_logged_in() -> bool {
    if let Some(window) = window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(_token)) = storage.get_item("token") {
                return true;
            }
        }
    }
    false
}

pub fn request_sign_up(return_path: &str) {
    info!("Sending guest to sign up");
    if let Some(window) = window() {
        let _ = window.location().set_href(&config::signup_url_with_return(return_path));
    }
}

pub fn open_app() {
    if let Some(window) = window() {
        let _ = window.location().set_href(config::get_app_url());
    }
}

/// What the demo widgets do when a guest hits something that needs an account.
/// Signed-in visitors are taken into the real app instead.
pub fn handle_account_required(return_path: &str) {
    if is_logged_in() {
        open_app();
    } else {
        request_sign_up(return_path);
    }
}
