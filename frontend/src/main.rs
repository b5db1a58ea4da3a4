use log::info;
use yew::prelude::*;

mod catalog;
mod config;
mod error;
mod inquiry;
mod whatsapp;

mod components {
    pub mod form_fields;
    pub mod instagram_modal;
    pub mod link_button;
    pub mod minisite_modal;
    pub mod modal;
    pub mod profile_section;
    pub mod subtitle;
    pub mod whatsapp_modal;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    info!("Rendering Home page");
    html! { <Home /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
