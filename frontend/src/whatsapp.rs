use log::{info, warn};
use web_sys::window;

use crate::config;
use crate::error::SubmitError;

/// Deep link that opens a chat with the studio, prefilled with `message`.
pub fn chat_url(message: &str) -> String {
    format!(
        "{}/{}?text={}",
        config::WHATSAPP_BASE_URL,
        config::WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

/// Message sent from the quick contact dialog.
pub fn contact_message(name: &str) -> Result<String, SubmitError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SubmitError::MissingName);
    }
    Ok(format!(
        "Olá, meu nome é {}! Vi o link de {} e gostaria de um site incrível como esse!",
        name,
        config::CLIENT_HANDLE
    ))
}

/// Ask the browser to open `url` in a new tab. Nothing is awaited.
pub fn open_chat(url: &str) -> Result<(), SubmitError> {
    let window = window().ok_or(SubmitError::NoWindow)?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(_) => {
            info!("Opened WhatsApp hand-off");
            Ok(())
        }
        Err(e) => {
            warn!("window.open failed: {:?}", e);
            Err(SubmitError::OpenFailed(format!("{:?}", e)))
        }
    }
}
