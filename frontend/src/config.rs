use log::Level;

/// Destination of every WhatsApp hand-off.
pub const WHATSAPP_NUMBER: &str = "5541988710303";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Handle shown in the profile header and quoted in contact messages.
pub const CLIENT_HANDLE: &str = "@InteligenciArte.IA";
pub const LOGO_PATH: &str = "/logo.png";

pub const QUOTE_INTERVAL_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose wizard transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}
