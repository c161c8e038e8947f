/// Service address used until the operator points the console elsewhere.
pub const DEFAULT_SERVICE_ADDR: &str =
    "https://credential-generator-with-policy-controls.onrender.com";

pub mod paths {
    pub const CREDENTIALS: &str = "/credentials";
    pub const REQUESTS: &str = "/requests";
    pub const DEBUG_DECRYPT: &str = "/_debug/decrypt";
}
