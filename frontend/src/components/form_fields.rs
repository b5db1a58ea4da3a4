use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormInputProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
}

/// Labelled text input that reports every keystroke.
#[function_component(FormInput)]
pub fn form_input(props: &FormInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="form-field fade-in">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                name={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormCheckboxProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(FormCheckbox)]
pub fn form_checkbox(props: &FormCheckboxProps) -> Html {
    let onchange = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle.emit(input.checked());
        })
    };

    html! {
        <div class="form-checkbox">
            <input
                type="checkbox"
                id={props.id.clone()}
                name={props.id.clone()}
                checked={props.checked}
                {onchange}
            />
            <label for={props.id.clone()}>{props.label.clone()}</label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct OptionTileProps {
    pub label: AttrValue,
    pub icon: AttrValue,
    pub active: bool,
    pub on_click: Callback<()>,
}

/// Square toggle used by the channel and visual identity pickers.
#[function_component(OptionTile)]
pub fn option_tile(props: &OptionTileProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("option-tile", props.active.then(|| "active"))}
            onclick={props.on_click.reform(|_: MouseEvent| ())}
        >
            <i class={classes!(props.icon.to_string())}></i>
            <span>{props.label.clone()}</span>
        </button>
    }
}
