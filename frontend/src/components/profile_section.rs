use yew::prelude::*;

use crate::config;

#[function_component(ProfileSection)]
pub fn profile_section() -> Html {
    html! {
        <div class="profile-section">
            <img src={config::LOGO_PATH} alt="Logo InteligenciArte.IA" class="profile-logo" />
            <h1 class="profile-handle">{config::CLIENT_HANDLE}</h1>
        </div>
    }
}
