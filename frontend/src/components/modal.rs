use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub wide: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Overlay dialog. Children are only mounted while open, so every
/// opening starts from fresh component state.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Escape closes the dialog while it is open
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(move |is_open: &bool| {
            let listener = if *is_open {
                window().map(|window| {
                    let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if e.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    let _ = window.add_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                    (window, callback)
                })
            } else {
                None
            };

            move || {
                if let Some((window, callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, props.is_open);
    }

    if !props.is_open {
        return html! {};
    }

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div
                class={classes!("modal-content", props.wide.then(|| "wide"))}
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <button class="modal-close" aria-label="Fechar modal" onclick={close}>
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
