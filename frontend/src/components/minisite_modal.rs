use log::{debug, info, warn};
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::catalog::{SocialChannel, VisualIdentity, VISUAL_IDENTITY_OPTIONS};
use crate::components::form_fields::{FormCheckbox, FormInput, OptionTile};
use crate::components::modal::Modal;
use crate::inquiry::{self, InquiryForm, MeetingPreference, Reveal, WizardStep};
use crate::whatsapp;

#[derive(Properties, PartialEq)]
pub struct MinisiteInquiryModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(MinisiteInquiryModal)]
pub fn minisite_inquiry_modal(props: &MinisiteInquiryModalProps) -> Html {
    html! {
        <Modal is_open={props.is_open} on_close={props.on_close.clone()} wide={true}>
            <InquiryWizard on_close={props.on_close.clone()} />
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct InquiryWizardProps {
    on_close: Callback<()>,
}

fn update_form(form: &UseStateHandle<InquiryForm>, f: impl FnOnce(&mut InquiryForm)) {
    let mut next = (**form).clone();
    f(&mut next);
    form.set(next);
}

fn scroll_to_anchor(anchor_id: &str) {
    let element = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(anchor_id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(InquiryWizard)]
fn inquiry_wizard(props: &InquiryWizardProps) -> Html {
    let form = use_state(InquiryForm::new);
    let revealed = use_state(|| None::<Reveal>);

    // Runs after the newly revealed field has been committed to the DOM
    use_effect_with_deps(
        |revealed: &Option<Reveal>| {
            if let Some(reveal) = revealed {
                scroll_to_anchor(&reveal.anchor_id());
            }
            || ()
        },
        *revealed,
    );

    let choose = |step: WizardStep| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| update_form(&form, |f| {
            f.choose(step);
        }))
    };

    let on_back = {
        let form = form.clone();
        let revealed = revealed.clone();
        Callback::from(move |_: MouseEvent| {
            update_form(&form, InquiryForm::back);
            revealed.set(None);
        })
    };

    let on_toggle_channel = {
        let form = form.clone();
        let revealed = revealed.clone();
        Callback::from(move |channel: SocialChannel| {
            let mut next = (*form).clone();
            revealed.set(next.toggle_channel(channel));
            form.set(next);
        })
    };

    let on_channel_input = {
        let form = form.clone();
        Callback::from(move |(channel, value): (SocialChannel, String)| {
            update_form(&form, |f| f.set_channel_value(channel, value))
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let sent = form
                .whatsapp_url()
                .and_then(|url| whatsapp::open_chat(&url));
            match sent {
                Ok(()) => {
                    info!("Minisite inquiry sent ({:?})", form.step());
                    on_close.emit(());
                }
                Err(e) => warn!("Minisite inquiry not sent: {}", e),
            }
        })
    };

    let body = match form.step() {
        WizardStep::Selection => html! {
            <>
                <h2 class="modal-title">{"Para quem é o Minisite?"}</h2>
                <p class="modal-subtitle">{"Selecione o tipo de perfil que você deseja criar."}</p>
                <div class="selection-grid">
                    <button class="selection-card" onclick={choose(WizardStep::Personal)}>
                        <i class="icon-user"></i>
                        <span>{"Uso Pessoal"}</span>
                    </button>
                    <button class="selection-card" onclick={choose(WizardStep::Business)}>
                        <i class="icon-building"></i>
                        <span>{"Para Empresa"}</span>
                    </button>
                </div>
            </>
        },
        WizardStep::Personal => render_personal(&form, on_toggle_channel, on_channel_input),
        WizardStep::Business => {
            render_business(&form, &revealed, on_toggle_channel, on_channel_input)
        }
    };

    html! {
        <>
            {body}
            if form.step() != WizardStep::Selection {
                <div class="modal-actions">
                    <button
                        class="primary-button"
                        onclick={on_submit}
                        disabled={!form.can_submit()}
                    >
                        {"Enviar Solicitação 🚀"}
                    </button>
                    <button class="secondary-button" onclick={on_back}>{"Voltar"}</button>
                </div>
            }
        </>
    }
}

fn render_personal(
    form: &UseStateHandle<InquiryForm>,
    on_toggle_channel: Callback<SocialChannel>,
    on_channel_input: Callback<(SocialChannel, String)>,
) -> Html {
    let personal = form.personal();

    let on_name = {
        let form = form.clone();
        Callback::from(move |value: String| update_form(&form, |f| f.set_personal_name(value)))
    };
    let on_age = {
        let form = form.clone();
        Callback::from(move |value: String| {
            update_form(&form, |f| {
                f.set_age(value);
                debug!("Age advisory now {:?}", f.advisory());
            })
        })
    };
    let on_public_phone = {
        let form = form.clone();
        Callback::from(move |checked: bool| update_form(&form, |f| f.set_public_phone(checked)))
    };

    html! {
        <>
            <h2 class="modal-title">{"Minisite Pessoal"}</h2>
            <div class="form-scroll">
                <FormInput
                    label="Seu Nome"
                    id="name"
                    value={personal.name.clone()}
                    placeholder="Ex: João Silva"
                    on_input={on_name}
                />
                <FormInput
                    label="Sua Idade (Obrigatório)"
                    id="age"
                    input_type="number"
                    value={personal.age.clone()}
                    placeholder="Ex: 25"
                    on_input={on_age}
                />
                if let Some(advisory) = form.advisory() {
                    <p class={classes!("age-advisory", advisory.is_blocking().then(|| "blocking"))}>
                        {advisory.message()}
                    </p>
                }
                <FormCheckbox
                    label="Exibir meu celular publicamente"
                    id="publicPhone"
                    checked={personal.public_phone}
                    on_toggle={on_public_phone}
                />
                {render_channel_selector(form, on_toggle_channel, on_channel_input)}
            </div>
        </>
    }
}

fn render_business(
    form: &UseStateHandle<InquiryForm>,
    revealed: &UseStateHandle<Option<Reveal>>,
    on_toggle_channel: Callback<SocialChannel>,
    on_channel_input: Callback<(SocialChannel, String)>,
) -> Html {
    let business = form.business();

    let on_name = {
        let form = form.clone();
        Callback::from(move |value: String| update_form(&form, |f| f.set_business_name(value)))
    };
    let on_toggle_visual = |option: VisualIdentity| {
        let form = form.clone();
        let revealed = revealed.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            let reveal = next.toggle_visual(option);
            form.set(next);
            // Logo has no field of its own; leave the last reveal alone
            if option != VisualIdentity::Logo {
                revealed.set(reveal);
            }
        })
    };
    let on_slogan = {
        let form = form.clone();
        Callback::from(move |value: String| update_form(&form, |f| f.set_slogan(value)))
    };
    let on_palette = {
        let form = form.clone();
        Callback::from(move |value: String| update_form(&form, |f| f.set_palette(value)))
    };
    let meeting = |preference: MeetingPreference| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| update_form(&form, |f| f.set_meeting(preference)))
    };
    let on_date = {
        let form = form.clone();
        Callback::from(move |value: String| update_form(&form, |f| f.set_meeting_date(value)))
    };
    let on_hour = {
        let form = form.clone();
        Callback::from(move |value: String| update_form(&form, |f| f.set_meeting_hour(value)))
    };
    let meeting_class = |preference: MeetingPreference| {
        classes!("meeting-button", (business.meeting == preference).then(|| "active"))
    };

    html! {
        <>
            <h2 class="modal-title">{"Minisite para Empresa"}</h2>
            <div class="form-scroll">
                <FormInput
                    label="Nome da Empresa / Responsável"
                    id="name"
                    value={business.name.clone()}
                    placeholder="Ex: Minha Empresa LTDA"
                    on_input={on_name}
                />

                <h3 class="form-section">{"Identidade Visual"}</h3>
                <p class="form-hint">{"Selecione os itens que você já possui:"}</p>
                <div class="option-grid">
                    { for VISUAL_IDENTITY_OPTIONS.iter().map(|option| html! {
                        <OptionTile
                            key={option.label}
                            label={option.label}
                            icon={option.icon}
                            active={business.has(option.option)}
                            on_click={on_toggle_visual(option.option)}
                        />
                    }) }
                </div>
                if business.has_slogan {
                    <div id={Reveal::Slogan.anchor_id()}>
                        <FormInput
                            label="Qual é o slogan?"
                            id="slogan"
                            value={business.slogan.clone()}
                            placeholder="Ex: A melhor da cidade"
                            on_input={on_slogan}
                        />
                    </div>
                }
                if business.has_palette {
                    <div id={Reveal::Palette.anchor_id()}>
                        <FormInput
                            label="Quais são as cores?"
                            id="palette"
                            value={business.palette.clone()}
                            placeholder="Ex: #FFFFFF, Preto, Roxo"
                            on_input={on_palette}
                        />
                    </div>
                }

                <h3 class="form-section">{"Reunião Online"}</h3>
                <p class="form-hint">{"Qual o melhor horário para conversarmos sobre o projeto?"}</p>
                <div class="meeting-choice">
                    <button class={meeting_class(MeetingPreference::Now)} onclick={meeting(MeetingPreference::Now)}>
                        {"Agora"}
                    </button>
                    <button class={meeting_class(MeetingPreference::Later)} onclick={meeting(MeetingPreference::Later)}>
                        {"Mais Tarde"}
                    </button>
                </div>
                if business.meeting == MeetingPreference::Later {
                    <div class="meeting-slot">
                        <FormInput label="Data" id="meetingDate" input_type="date" value={business.meeting_date.clone()} on_input={on_date} />
                        <FormInput label="Hora" id="meetingHour" input_type="time" value={business.meeting_hour.clone()} on_input={on_hour} />
                    </div>
                }

                {render_channel_selector(form, on_toggle_channel, on_channel_input)}
            </div>
        </>
    }
}

fn render_channel_selector(
    form: &InquiryForm,
    on_toggle: Callback<SocialChannel>,
    on_input: Callback<(SocialChannel, String)>,
) -> Html {
    html! {
        <>
            <h3 class="form-section">{"Redes Sociais e Links"}</h3>
            <p class="form-hint">{"Selecione as redes que deseja adicionar:"}</p>
            <div class="option-grid">
                { for inquiry::channel_choices().map(|channel| {
                    let option = channel.option();
                    html! {
                        <OptionTile
                            key={option.id}
                            label={option.label}
                            icon={option.icon}
                            active={form.is_channel_active(channel)}
                            on_click={on_toggle.reform(move |_: ()| channel)}
                        />
                    }
                }) }
            </div>
            <div class="channel-inputs">
                { for form.active_channels().map(|channel| {
                    let option = channel.option();
                    html! {
                        <div key={option.id} id={Reveal::Channel(channel).anchor_id()}>
                            <FormInput
                                label={option.label}
                                id={option.id}
                                input_type={option.input_type}
                                value={form.channel_value(channel).to_string()}
                                placeholder={option.placeholder}
                                on_input={on_input.reform(move |value: String| (channel, value))}
                            />
                        </div>
                    }
                }) }
            </div>
        </>
    }
}
