use log::info;
use yew::prelude::*;

use crate::catalog::{LinkAction, LINKS};
use crate::components::{
    instagram_modal::InstagramModal,
    link_button::LinkButton,
    minisite_modal::MinisiteInquiryModal,
    profile_section::ProfileSection,
    subtitle::Subtitle,
    whatsapp_modal::WhatsAppModal,
};

#[function_component(Home)]
pub fn home() -> Html {
    let instagram_open = use_state(|| false);
    let whatsapp_open = use_state(|| false);
    let minisite_open = use_state(|| false);

    let open = |flag: &UseStateHandle<bool>, name: &'static str| {
        let flag = flag.clone();
        Callback::from(move |_: ()| {
            info!("Opening {} dialog", name);
            flag.set(true);
        })
    };
    let close = |flag: &UseStateHandle<bool>| {
        let flag = flag.clone();
        Callback::from(move |_: ()| flag.set(false))
    };

    let action_callback = |action: LinkAction| match action {
        LinkAction::OpenInstagram => open(&instagram_open, "instagram"),
        LinkAction::OpenWhatsApp => open(&whatsapp_open, "whatsapp"),
    };

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: #000;
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .card {
                        width: 100%;
                        max-width: 28rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        text-align: center;
                        background: rgba(0, 0, 0, 0.4);
                        border: 1px solid rgba(168, 85, 247, 0.2);
                        box-shadow: 0 16px 32px rgba(168, 85, 247, 0.1);
                    }
                    .profile-logo { width: 7rem; height: 7rem; object-fit: contain; margin-bottom: 1.25rem; }
                    .profile-handle { font-size: 1.25rem; color: #c4b5fd; }
                    .subtitle { margin-top: 1rem; min-height: 3rem; font-size: 0.875rem; font-style: italic; color: rgba(199, 210, 254, 0.8); }
                    .link-list { margin-top: 2rem; display: flex; flex-direction: column; gap: 1rem; }
                    .link-button {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 100%;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        font-weight: 600;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .link-button:hover { transform: translateY(-4px) scale(1.05); box-shadow: 0 8px 24px var(--brand-color); }
                    .link-icon { position: absolute; left: 1rem; }
                    .cta-button, .primary-button {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        font-weight: 700;
                        color: #000;
                        background: linear-gradient(to right, #c084fc, #6366f1);
                        cursor: pointer;
                    }
                    .cta-button { margin-top: 2rem; }
                    .primary-button:disabled { background: #6b7280; cursor: not-allowed; }
                    .secondary-button {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: none;
                        border-radius: 0.5rem;
                        color: #d1d5db;
                        background: rgba(55, 65, 81, 0.5);
                        cursor: pointer;
                    }
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.7);
                        backdrop-filter: blur(4px);
                    }
                    .modal-content {
                        position: relative;
                        width: 100%;
                        max-width: 24rem;
                        margin: 1rem;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        background: #111827;
                        border: 1px solid rgba(168, 85, 247, 0.3);
                    }
                    .modal-content.wide { max-width: 32rem; }
                    .modal-close { position: absolute; top: -0.75rem; right: -0.75rem; border-radius: 9999px; padding: 0.5rem; background: #1f2937; color: #fff; border: none; cursor: pointer; }
                    .modal-title { text-align: center; color: #d8b4fe; }
                    .modal-subtitle, .form-hint { font-size: 0.875rem; color: #9ca3af; }
                    .modal-actions { margin-top: 1.5rem; display: flex; flex-direction: row-reverse; gap: 0.75rem; }
                    .form-scroll { max-height: 60vh; overflow-y: auto; display: flex; flex-direction: column; gap: 1rem; }
                    .form-field label { display: block; font-size: 0.875rem; color: #9ca3af; }
                    .form-field input { width: 100%; margin-top: 0.25rem; padding: 0.5rem 0.75rem; border-radius: 0.375rem; border: 1px solid #4b5563; background: #1f2937; color: #fff; }
                    .form-error, .age-advisory.blocking { font-size: 0.75rem; color: #f87171; }
                    .age-advisory { font-size: 0.75rem; color: #facc15; }
                    .selection-grid, .meeting-slot { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-top: 2rem; }
                    .selection-card { padding: 1.5rem; border-radius: 0.5rem; border: 1px solid rgba(168, 85, 247, 0.3); background: rgba(31, 41, 55, 0.5); color: #fff; cursor: pointer; }
                    .option-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.5rem; }
                    .option-tile { padding: 0.5rem; border-radius: 0.5rem; border: 1px solid rgba(168, 85, 247, 0.3); background: rgba(31, 41, 55, 0.5); color: #fff; cursor: pointer; }
                    .option-tile.active, .meeting-button.active { background: rgba(88, 28, 135, 0.6); border-color: #c084fc; }
                    .meeting-choice { display: flex; gap: 1rem; }
                    .meeting-button { flex: 1; padding: 0.5rem; border-radius: 0.375rem; border: 1px solid transparent; background: #374151; color: #d1d5db; cursor: pointer; }
                    .fade-in { animation: fadeIn 0.3s ease-out; }
                    @keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
                "#}
            </style>
            <main class="card">
                <ProfileSection />
                <Subtitle />
                <div class="link-list">
                    { for LINKS.iter().map(|link| html! {
                        <LinkButton
                            key={link.text}
                            text={link.text}
                            icon={link.icon}
                            brand_color={link.brand_color}
                            href={link.url.map(AttrValue::Static)}
                            on_click={link.action.map(|action| action_callback(action))}
                        />
                    }) }
                </div>
                <button class="cta-button" onclick={open(&minisite_open, "minisite").reform(|_: MouseEvent| ())}>
                    {"Quer um site incrível como esse?"}
                </button>
            </main>

            <InstagramModal is_open={*instagram_open} on_close={close(&instagram_open)} />
            <WhatsAppModal is_open={*whatsapp_open} on_close={close(&whatsapp_open)} />
            <MinisiteInquiryModal is_open={*minisite_open} on_close={close(&minisite_open)} />
        </div>
    }
}
