
#[cfg(debug_assertions)]
pub fn get_api_base_url() -> &'static str {
    match option_env!("GEMINI_API_BASE") {
        Some(url) => url, // Local proxy or mock when developing
        None => "https://generativelanguage.googleapis.com/v1beta",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_api_base_url() -> &'static str {
    "https://generativelanguage.googleapis.com/v1beta"
}

pub fn get_model() -> &'static str {
    option_env!("GEMINI_MODEL").unwrap_or("gemini-3-flash-preview")
}

/// Baked in at build time, the bundle has no other way to see the environment.
pub fn get_api_key() -> Option<&'static str> {
    option_env!("GEMINI_API_KEY").filter(|key| !key.trim().is_empty())
}
