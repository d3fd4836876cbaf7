
#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:3001/app"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    "/app"  // Production URL
}

#[cfg(debug_assertions)]
pub fn get_signup_url() -> &'static str {
    "http://localhost:3001/signup"
}

#[cfg(not(debug_assertions))]
pub fn get_signup_url() -> &'static str {
    "/signup"
}

// The sign-up flow sends the visitor back to `return_path` afterwards.
pub fn signup_url_with_return(return_path: &str) -> String {
    format!("{}?redirect={}", get_signup_url(), urlencoding::encode(return_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_path_is_encoded() {
        let url = signup_url_with_return("/platform/compare?from=demo");
        assert!(url.starts_with(get_signup_url()));
        assert!(url.ends_with("?redirect=%2Fplatform%2Fcompare%3Ffrom%3Ddemo"));
    }
}
