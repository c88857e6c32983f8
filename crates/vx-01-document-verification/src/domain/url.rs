//! Verification URL builders.

/// Route prefix of the public document lookup page.
pub const VERIFICATION_PATH: &str = "/verificar-documento";

/// Route prefix of the mobile signing page.
pub const MOBILE_SIGNING_PATH: &str = "/sign-mobile";

/// Relative lookup path for a code. The code is not validated.
pub fn verification_url(code: &str) -> String {
    format!("{VERIFICATION_PATH}/{code}")
}

/// Relative mobile signing path for a code.
pub fn mobile_signing_url(code: &str) -> String {
    format!("{MOBILE_SIGNING_PATH}/{code}")
}

/// Join a public base URL with a relative path, tolerating a trailing slash.
pub fn absolute_verification_url(base_url: &str, relative_path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), relative_path)
}
