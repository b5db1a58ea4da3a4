use yew::prelude::*;

use crate::catalog::INSTAGRAM_PROFILES;
use crate::components::link_button::LinkButton;
use crate::components::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct InstagramModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(InstagramModal)]
pub fn instagram_modal(props: &InstagramModalProps) -> Html {
    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()}>
            <h2 class="modal-title">{"Nossos Perfis no Instagram"}</h2>
            <p class="modal-subtitle">{"Escolha qual perfil você gostaria de visitar."}</p>
            <div class="link-list">
                { for INSTAGRAM_PROFILES.iter().map(|profile| html! {
                    <LinkButton
                        key={profile.text}
                        text={profile.text}
                        icon={profile.icon}
                        brand_color={profile.brand_color}
                        href={profile.url.map(AttrValue::Static)}
                    />
                }) }
            </div>
            <div class="modal-actions">
                <button class="secondary-button" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    {"Fechar"}
                </button>
            </div>
        </Modal>
    }
}
