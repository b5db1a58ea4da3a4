use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub text: AttrValue,
    pub icon: AttrValue,
    pub brand_color: AttrValue,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub on_click: Option<Callback<()>>,
}

/// Anchor when there is somewhere to go, plain button otherwise.
#[function_component(LinkButton)]
pub fn link_button(props: &LinkButtonProps) -> Html {
    let style = format!("--brand-color: {};", props.brand_color);
    let content = html! {
        <>
            <i class={classes!("link-icon", props.icon.to_string())}></i>
            <span>{props.text.clone()}</span>
        </>
    };

    match &props.href {
        Some(href) => html! {
            <a
                href={href.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="link-button"
                {style}
            >
                {content}
            </a>
        },
        None => {
            let onclick = props
                .on_click
                .clone()
                .map(|cb| cb.reform(|_: MouseEvent| ()));
            html! {
                <button class="link-button" {style} {onclick}>
                    {content}
                </button>
            }
        }
    }
}
