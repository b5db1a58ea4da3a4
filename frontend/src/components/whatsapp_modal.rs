use log::info;
use yew::prelude::*;

use crate::components::form_fields::FormInput;
use crate::components::modal::Modal;
use crate::whatsapp;

#[derive(Properties, PartialEq)]
pub struct WhatsAppModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(WhatsAppModal)]
pub fn whatsapp_modal(props: &WhatsAppModalProps) -> Html {
    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()}>
            <ContactForm on_close={props.on_close.clone()} />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct ContactFormProps {
    on_close: Callback<()>,
}

#[function_component(ContactForm)]
fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let error = use_state(|| None::<String>);

    let on_name = {
        let name = name.clone();
        let error = error.clone();
        Callback::from(move |value: String| {
            name.set(value);
            error.set(None);
        })
    };

    let on_submit = {
        let name = name.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let sent = whatsapp::contact_message(&name)
                .and_then(|message| whatsapp::open_chat(&whatsapp::chat_url(&message)));
            match sent {
                Ok(()) => {
                    info!("Contact message handed off to WhatsApp");
                    name.set(String::new());
                    on_close.emit(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <>
            <h2 class="modal-title">{"Quase lá!"}</h2>
            <p class="modal-subtitle">
                {"Para personalizar sua mensagem, por favor, nos diga seu nome."}
            </p>
            <FormInput
                label="Seu nome"
                id="contact-name"
                value={(*name).clone()}
                placeholder="Digite seu nome aqui"
                on_input={on_name}
            />
            if let Some(message) = (*error).as_ref() {
                <p class="form-error">{message}</p>
            }
            <div class="modal-actions">
                <button class="primary-button" onclick={on_submit}>{"Enviar Mensagem 🚀"}</button>
                <button class="secondary-button" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                    {"Cancelar"}
                </button>
            </div>
        </>
    }
}
