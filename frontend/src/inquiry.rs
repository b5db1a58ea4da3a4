//! State of the minisite order wizard and the message it hands off to WhatsApp.
//!
//! Nothing in here touches the DOM. The dialog builds a fresh [`InquiryForm`]
//! every time it opens and drops it on close.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::catalog::{SocialChannel, VisualIdentity, SOCIAL_OPTIONS};
use crate::error::SubmitError;
use crate::whatsapp;

/// Youngest age allowed to send a personal order.
pub const MINIMUM_AGE: i64 = 14;

const GREETING: &str = "Olá! Gostaria de solicitar um Minisite.\n\n";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Selection,
    Personal,
    Business,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MeetingPreference {
    #[default]
    Unset,
    Now,
    Later,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgeAdvisory {
    /// Under the minimum age; submission stays disabled.
    Underage,
    /// 15 to 18, shown but not blocking.
    ParentalAwareness,
}

impl AgeAdvisory {
    pub fn for_age(raw: &str) -> Option<Self> {
        match parse_age(raw)? {
            age if age < MINIMUM_AGE => Some(AgeAdvisory::Underage),
            15..=18 => Some(AgeAdvisory::ParentalAwareness),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AgeAdvisory::Underage => {
                "Menores de 14 anos não podem prosseguir. Peça a um responsável para entrar em contato."
            }
            AgeAdvisory::ParentalAwareness => {
                "Lembre-se de que é importante ter a conscientização dos seus pais ou responsáveis."
            }
        }
    }

    pub fn is_blocking(self) -> bool {
        self == AgeAdvisory::Underage
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits.
/// Trailing garbage is ignored, no digits at all yields `None`.
/// Digit runs too long for `i64` saturate instead of failing.
pub fn parse_age(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Text typed per channel. Empty values are never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocialHandles(BTreeMap<SocialChannel, String>);

impl SocialHandles {
    pub fn get(&self, channel: SocialChannel) -> &str {
        self.0.get(&channel).map(String::as_str).unwrap_or("")
    }

    fn set(&mut self, channel: SocialChannel, value: String) {
        if value.is_empty() {
            self.0.remove(&channel);
        } else {
            self.0.insert(channel, value);
        }
    }

    fn clear(&mut self, channel: SocialChannel) {
        self.0.remove(&channel);
    }

    /// Filled channels in catalog order.
    pub fn filled(&self) -> impl Iterator<Item = (SocialChannel, &str)> {
        self.0.iter().map(|(channel, value)| (*channel, value.as_str()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonalProfile {
    pub name: String,
    pub age: String,
    pub public_phone: bool,
    pub handles: SocialHandles,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusinessProfile {
    pub name: String,
    pub has_logo: bool,
    pub has_slogan: bool,
    pub slogan: String,
    pub has_palette: bool,
    pub palette: String,
    pub meeting: MeetingPreference,
    pub meeting_date: String,
    pub meeting_hour: String,
    pub handles: SocialHandles,
}

impl BusinessProfile {
    pub fn has(&self, option: VisualIdentity) -> bool {
        match option {
            VisualIdentity::Logo => self.has_logo,
            VisualIdentity::Slogan => self.has_slogan,
            VisualIdentity::Palette => self.has_palette,
        }
    }
}

/// A field that just became visible and should be scrolled into view
/// once the view has rendered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    Channel(SocialChannel),
    Slogan,
    Palette,
}

impl Reveal {
    pub fn anchor_id(self) -> String {
        match self {
            Reveal::Channel(channel) => format!("input-wrapper-{}", channel.id()),
            Reveal::Slogan => "input-wrapper-slogan".to_string(),
            Reveal::Palette => "input-wrapper-palette".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryForm {
    step: WizardStep,
    personal: PersonalProfile,
    business: BusinessProfile,
    active_channels: BTreeSet<SocialChannel>,
    advisory: Option<AgeAdvisory>,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn personal(&self) -> &PersonalProfile {
        &self.personal
    }

    pub fn business(&self) -> &BusinessProfile {
        &self.business
    }

    pub fn advisory(&self) -> Option<AgeAdvisory> {
        self.advisory
    }

    /// Leave the selection screen for one of the leaves.
    pub fn choose(&mut self, step: WizardStep) -> bool {
        if self.step != WizardStep::Selection || step == WizardStep::Selection {
            return false;
        }
        debug!("Inquiry wizard: selection -> {:?}", step);
        self.step = step;
        true
    }

    /// Return to the selection screen. Typed fields survive, shown channels do not.
    pub fn back(&mut self) {
        if self.step == WizardStep::Selection {
            return;
        }
        debug!("Inquiry wizard: {:?} -> selection", self.step);
        let channels = std::mem::take(&mut self.active_channels);
        if let Some(handles) = self.current_handles_mut() {
            for channel in channels {
                handles.clear(channel);
            }
        }
        self.step = WizardStep::Selection;
    }

    pub fn is_channel_active(&self, channel: SocialChannel) -> bool {
        self.active_channels.contains(&channel)
    }

    /// Active channels in catalog order.
    pub fn active_channels(&self) -> impl Iterator<Item = SocialChannel> + '_ {
        self.active_channels.iter().copied()
    }

    /// Show or hide a channel input. Hiding always drops what was typed.
    pub fn toggle_channel(&mut self, channel: SocialChannel) -> Option<Reveal> {
        if self.step == WizardStep::Selection {
            return None;
        }
        if self.active_channels.remove(&channel) {
            if let Some(handles) = self.current_handles_mut() {
                handles.clear(channel);
            }
            None
        } else {
            self.active_channels.insert(channel);
            Some(Reveal::Channel(channel))
        }
    }

    pub fn channel_value(&self, channel: SocialChannel) -> &str {
        match self.step {
            WizardStep::Personal => self.personal.handles.get(channel),
            WizardStep::Business => self.business.handles.get(channel),
            WizardStep::Selection => "",
        }
    }

    pub fn set_channel_value(&mut self, channel: SocialChannel, value: String) {
        if !self.active_channels.contains(&channel) {
            return;
        }
        if let Some(handles) = self.current_handles_mut() {
            handles.set(channel, value);
        }
    }

    pub fn set_personal_name(&mut self, name: String) {
        self.personal.name = name;
    }

    pub fn set_age(&mut self, raw: String) {
        self.advisory = AgeAdvisory::for_age(&raw);
        self.personal.age = raw;
    }

    pub fn set_public_phone(&mut self, public_phone: bool) {
        self.personal.public_phone = public_phone;
    }

    pub fn set_business_name(&mut self, name: String) {
        self.business.name = name;
    }

    pub fn toggle_visual(&mut self, option: VisualIdentity) -> Option<Reveal> {
        let business = &mut self.business;
        match option {
            VisualIdentity::Logo => {
                business.has_logo = !business.has_logo;
                None
            }
            VisualIdentity::Slogan => {
                business.has_slogan = !business.has_slogan;
                business.has_slogan.then_some(Reveal::Slogan)
            }
            VisualIdentity::Palette => {
                business.has_palette = !business.has_palette;
                business.has_palette.then_some(Reveal::Palette)
            }
        }
    }

    pub fn set_slogan(&mut self, slogan: String) {
        self.business.slogan = slogan;
    }

    pub fn set_palette(&mut self, palette: String) {
        self.business.palette = palette;
    }

    pub fn set_meeting(&mut self, meeting: MeetingPreference) {
        self.business.meeting = meeting;
    }

    pub fn set_meeting_date(&mut self, date: String) {
        self.business.meeting_date = date;
    }

    pub fn set_meeting_hour(&mut self, hour: String) {
        self.business.meeting_hour = hour;
    }

    pub fn can_submit(&self) -> bool {
        self.check_submit().is_ok()
    }

    fn check_submit(&self) -> Result<(), SubmitError> {
        match self.step {
            WizardStep::Selection => Err(SubmitError::NothingToSubmit),
            WizardStep::Personal => match parse_age(&self.personal.age) {
                None => Err(SubmitError::MissingAge),
                Some(age) if age < MINIMUM_AGE => Err(SubmitError::Underage(age)),
                Some(_) => Ok(()),
            },
            WizardStep::Business => Ok(()),
        }
    }

    pub fn compose_message(&self) -> Result<String, SubmitError> {
        self.check_submit()?;
        let message = match self.step {
            WizardStep::Personal => compose_personal(&self.personal),
            WizardStep::Business => compose_business(&self.business),
            WizardStep::Selection => return Err(SubmitError::NothingToSubmit),
        };
        Ok(message)
    }

    pub fn whatsapp_url(&self) -> Result<String, SubmitError> {
        let message = self.compose_message()?;
        Ok(whatsapp::chat_url(&message))
    }

    fn current_handles_mut(&mut self) -> Option<&mut SocialHandles> {
        match self.step {
            WizardStep::Personal => Some(&mut self.personal.handles),
            WizardStep::Business => Some(&mut self.business.handles),
            WizardStep::Selection => None,
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Sim" } else { "Não" }
}

fn compose_personal(profile: &PersonalProfile) -> String {
    let mut message = String::from(GREETING);
    message.push_str("--- DADOS DO PEDIDO (PESSOAL) ---\n");
    if !profile.name.is_empty() {
        message.push_str(&format!("Nome: {}\n", profile.name));
    }
    message.push_str(&format!("Idade: {}\n", profile.age));
    message.push_str(&format!(
        "Disponibilizar celular no link: {}\n",
        yes_no(profile.public_phone)
    ));
    push_channels(&mut message, "--- REDES SOCIAIS E LINKS ---", &profile.handles);
    message.trim().to_string()
}

fn compose_business(profile: &BusinessProfile) -> String {
    let mut message = String::from(GREETING);
    message.push_str("--- DADOS DO PEDIDO (EMPRESA) ---\n");
    if !profile.name.is_empty() {
        message.push_str(&format!("Nome da Empresa/Responsável: {}\n", profile.name));
    }
    message.push_str(&format!("Possui logotipo? {}\n", yes_no(profile.has_logo)));
    if profile.has_slogan {
        message.push_str(&format!("Slogan: {}\n", profile.slogan));
    }
    if profile.has_palette {
        message.push_str(&format!("Paleta de Cores: {}\n", profile.palette));
    }

    message.push_str("\n--- AGENDAMENTO ---\n");
    let when = match profile.meeting {
        MeetingPreference::Now => "Agora".to_string(),
        MeetingPreference::Later
            if !profile.meeting_date.is_empty() && !profile.meeting_hour.is_empty() =>
        {
            format!("{} às {}", profile.meeting_date, profile.meeting_hour)
        }
        _ => "A combinar".to_string(),
    };
    message.push_str(&format!("Melhor horário para reunião: {}\n", when));

    push_channels(&mut message, "--- REDES SOCIAIS E CONTATO ---", &profile.handles);
    message.trim().to_string()
}

fn push_channels(message: &mut String, header: &str, handles: &SocialHandles) {
    let lines: Vec<String> = handles
        .filled()
        .map(|(channel, value)| {
            if channel.is_handle() {
                format!("{}: @{}", channel.label(), value)
            } else {
                format!("{}: {}", channel.label(), value)
            }
        })
        .collect();
    if lines.is_empty() {
        return;
    }
    message.push('\n');
    message.push_str(header);
    message.push('\n');
    message.push_str(&lines.join("\n"));
}

/// Channels offered by the selector, in the order they are listed.
pub fn channel_choices() -> impl Iterator<Item = SocialChannel> {
    SOCIAL_OPTIONS.iter().map(|option| option.channel)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn personal_form() -> InquiryForm {
        let mut form = InquiryForm::new();
        assert!(form.choose(WizardStep::Personal));
        form
    }

    fn business_form() -> InquiryForm {
        let mut form = InquiryForm::new();
        assert!(form.choose(WizardStep::Business));
        form
    }

    #[test]
    fn new_form_starts_on_selection_with_empty_state() {
        let form = InquiryForm::new();
        assert_eq!(form.step(), WizardStep::Selection);
        assert_eq!(form.personal(), &PersonalProfile::default());
        assert_eq!(form.business(), &BusinessProfile::default());
        assert_eq!(form.active_channels().count(), 0);
        assert_eq!(form.advisory(), None);
        assert!(!form.can_submit());
    }

    #[test]
    fn choose_only_works_from_selection() {
        let mut form = personal_form();
        assert!(!form.choose(WizardStep::Business));
        assert_eq!(form.step(), WizardStep::Personal);

        let mut form = InquiryForm::new();
        assert!(!form.choose(WizardStep::Selection));
        assert_eq!(form.step(), WizardStep::Selection);
    }

    #[test]
    fn ages_below_minimum_block_submission() {
        for age in [-3, 0, 1, 9, 13] {
            let mut form = personal_form();
            form.set_personal_name("Ana".to_string());
            form.set_public_phone(true);
            form.set_age(age.to_string());
            assert_eq!(form.advisory(), Some(AgeAdvisory::Underage), "age {}", age);
            assert!(!form.can_submit(), "age {}", age);
            assert_eq!(form.compose_message(), Err(SubmitError::Underage(age)));
        }
    }

    #[test]
    fn teenagers_get_non_blocking_advisory() {
        for age in 15..=18 {
            let mut form = personal_form();
            form.set_age(age.to_string());
            assert_eq!(form.advisory(), Some(AgeAdvisory::ParentalAwareness));
            assert!(!AgeAdvisory::ParentalAwareness.is_blocking());
            assert!(form.can_submit());
        }
    }

    #[test]
    fn fourteen_and_adults_have_no_advisory() {
        for age in ["14", "19", "42"] {
            let mut form = personal_form();
            form.set_age(age.to_string());
            assert_eq!(form.advisory(), None);
            assert!(form.can_submit());
        }
    }

    #[test]
    fn advisory_follows_every_keystroke() {
        let mut form = personal_form();
        form.set_age("1".to_string());
        assert_eq!(form.advisory(), Some(AgeAdvisory::Underage));
        form.set_age("17".to_string());
        assert_eq!(form.advisory(), Some(AgeAdvisory::ParentalAwareness));
        form.set_age("1".to_string());
        assert_eq!(form.advisory(), Some(AgeAdvisory::Underage));
        form.set_age(String::new());
        assert_eq!(form.advisory(), None);
        assert!(!form.can_submit());
    }

    #[test]
    fn unparseable_age_clears_advisory_and_blocks() {
        let mut form = personal_form();
        form.set_age("10".to_string());
        form.set_age("abc".to_string());
        assert_eq!(form.advisory(), None);
        assert_eq!(form.compose_message(), Err(SubmitError::MissingAge));
    }

    #[test]
    fn parse_age_reads_leading_integer() {
        assert_eq!(parse_age("25"), Some(25));
        assert_eq!(parse_age("  30 anos"), Some(30));
        assert_eq!(parse_age("+7"), Some(7));
        assert_eq!(parse_age("-2"), Some(-2));
        assert_eq!(parse_age("12.9"), Some(12));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("-"), None);
        assert_eq!(parse_age("x1"), None);
        assert_eq!(parse_age("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_age("-99999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn oversized_age_counts_as_adult() {
        let mut form = personal_form();
        form.set_personal_name("Ana".to_string());
        form.set_age("99999999999999999999".to_string());
        assert_eq!(form.advisory(), None);
        assert!(form.can_submit());
        let message = form.compose_message().unwrap();
        assert!(message.contains("Idade: 99999999999999999999"));

        form.set_age("-99999999999999999999".to_string());
        assert_eq!(form.advisory(), Some(AgeAdvisory::Underage));
        assert_eq!(form.check_submit(), Err(SubmitError::Underage(-i64::MAX)));
    }

    #[test]
    fn toggling_channel_off_clears_its_value() {
        let mut form = personal_form();
        assert_eq!(
            form.toggle_channel(SocialChannel::Instagram),
            Some(Reveal::Channel(SocialChannel::Instagram))
        );
        form.set_channel_value(SocialChannel::Instagram, "foo".to_string());
        assert_eq!(form.channel_value(SocialChannel::Instagram), "foo");

        assert_eq!(form.toggle_channel(SocialChannel::Instagram), None);
        assert!(!form.is_channel_active(SocialChannel::Instagram));

        form.toggle_channel(SocialChannel::Instagram);
        assert_eq!(form.channel_value(SocialChannel::Instagram), "");
    }

    #[test]
    fn erased_channel_text_leaves_no_empty_line() {
        let mut form = personal_form();
        form.set_age("20".to_string());
        assert_eq!(
            form.toggle_channel(SocialChannel::Instagram),
            Some(Reveal::Channel(SocialChannel::Instagram))
        );
        form.set_channel_value(SocialChannel::Instagram, "ana".to_string());
        form.set_channel_value(SocialChannel::Instagram, String::new());

        assert!(form.is_channel_active(SocialChannel::Instagram));
        assert_eq!(form.channel_value(SocialChannel::Instagram), "");
        assert_eq!(form.personal().handles.filled().count(), 0);
        let message = form.compose_message().unwrap();
        assert!(!message.contains("Instagram"));
        assert!(!message.contains("REDES SOCIAIS"));

        let mut form = business_form();
        form.toggle_channel(SocialChannel::Email);
        form.toggle_channel(SocialChannel::Website);
        form.set_channel_value(SocialChannel::Email, "loja@x.com".to_string());
        form.set_channel_value(SocialChannel::Website, "x.com".to_string());
        form.set_channel_value(SocialChannel::Website, String::new());
        let message = form.compose_message().unwrap();
        assert!(message.ends_with("--- REDES SOCIAIS E CONTATO ---\nEmail: loja@x.com"));
        assert!(!message.contains("Site:"));
    }

    #[test]
    fn hidden_channels_ignore_input() {
        let mut form = business_form();
        form.set_channel_value(SocialChannel::Email, "a@b.com".to_string());
        assert_eq!(form.channel_value(SocialChannel::Email), "");
        assert_eq!(form.business().handles.filled().count(), 0);
    }

    #[test]
    fn back_clears_channels_but_keeps_typed_fields() {
        let mut form = personal_form();
        form.set_personal_name("Ana".to_string());
        form.set_age("25".to_string());
        form.toggle_channel(SocialChannel::TikTok);
        form.set_channel_value(SocialChannel::TikTok, "ana".to_string());

        form.back();
        assert_eq!(form.step(), WizardStep::Selection);
        assert_eq!(form.active_channels().count(), 0);
        assert_eq!(form.personal().name, "Ana");
        assert_eq!(form.personal().age, "25");

        form.choose(WizardStep::Personal);
        assert!(!form.is_channel_active(SocialChannel::TikTok));
        let message = form.compose_message().unwrap();
        assert!(!message.contains("TikTok"));
    }

    #[test]
    fn visual_toggles_reveal_only_when_turned_on() {
        let mut form = business_form();
        assert_eq!(form.toggle_visual(VisualIdentity::Logo), None);
        assert!(form.business().has_logo);
        assert_eq!(form.toggle_visual(VisualIdentity::Slogan), Some(Reveal::Slogan));
        assert_eq!(form.toggle_visual(VisualIdentity::Palette), Some(Reveal::Palette));
        assert_eq!(form.toggle_visual(VisualIdentity::Slogan), None);
        assert!(!form.business().has(VisualIdentity::Slogan));
    }

    #[test]
    fn reveal_anchors_match_rendered_wrappers() {
        assert_eq!(Reveal::Channel(SocialChannel::Website).anchor_id(), "input-wrapper-website");
        assert_eq!(Reveal::Slogan.anchor_id(), "input-wrapper-slogan");
        assert_eq!(Reveal::Palette.anchor_id(), "input-wrapper-palette");
    }

    #[test]
    fn personal_message_scenario() {
        let mut form = personal_form();
        form.set_personal_name("Ana".to_string());
        form.set_age("25".to_string());
        form.set_public_phone(true);
        form.toggle_channel(SocialChannel::Instagram);
        form.set_channel_value(SocialChannel::Instagram, "ana_art".to_string());

        let message = form.compose_message().unwrap();
        assert_eq!(
            message,
            "Olá! Gostaria de solicitar um Minisite.\n\n\
             --- DADOS DO PEDIDO (PESSOAL) ---\n\
             Nome: Ana\n\
             Idade: 25\n\
             Disponibilizar celular no link: Sim\n\
             \n\
             --- REDES SOCIAIS E LINKS ---\n\
             Instagram: @ana_art"
        );
    }

    #[test]
    fn personal_message_omits_empty_name_and_orders_channels() {
        let mut form = personal_form();
        form.set_age("30".to_string());
        // Activated out of catalog order on purpose
        for channel in [SocialChannel::Other, SocialChannel::Email, SocialChannel::Facebook] {
            form.toggle_channel(channel);
        }
        form.set_channel_value(SocialChannel::Other, "youtube.com/ana".to_string());
        form.set_channel_value(SocialChannel::Email, "ana@mail.com".to_string());
        form.set_channel_value(SocialChannel::Facebook, "ana.fb".to_string());

        let message = form.compose_message().unwrap();
        assert!(!message.contains("Nome:"));
        assert!(message.contains("Disponibilizar celular no link: Não"));
        assert!(message.ends_with(
            "--- REDES SOCIAIS E LINKS ---\nFacebook: @ana.fb\nEmail: ana@mail.com\nOutro Link: youtube.com/ana"
        ));
    }

    #[test]
    fn business_message_with_slogan_and_later_meeting() {
        let mut form = business_form();
        form.set_business_name("Loja X".to_string());
        form.toggle_visual(VisualIdentity::Slogan);
        form.set_slogan("Top".to_string());
        form.set_meeting(MeetingPreference::Later);
        form.set_meeting_date("2024-05-01".to_string());
        form.set_meeting_hour("14:00".to_string());

        let message = form.compose_message().unwrap();
        assert_eq!(
            message,
            "Olá! Gostaria de solicitar um Minisite.\n\n\
             --- DADOS DO PEDIDO (EMPRESA) ---\n\
             Nome da Empresa/Responsável: Loja X\n\
             Possui logotipo? Não\n\
             Slogan: Top\n\
             \n\
             --- AGENDAMENTO ---\n\
             Melhor horário para reunião: 2024-05-01 às 14:00"
        );
    }

    #[test]
    fn business_meeting_fallbacks() {
        let form = business_form();
        assert!(form.can_submit());
        let message = form.compose_message().unwrap();
        assert!(message.contains("Melhor horário para reunião: A combinar"));

        let mut form = business_form();
        form.set_meeting(MeetingPreference::Later);
        form.set_meeting_date("2024-05-01".to_string());
        let message = form.compose_message().unwrap();
        assert!(message.contains("Melhor horário para reunião: A combinar"));

        let mut form = business_form();
        form.set_meeting(MeetingPreference::Now);
        let message = form.compose_message().unwrap();
        assert!(message.contains("Melhor horário para reunião: Agora"));
    }

    #[test]
    fn business_message_lists_palette_and_contacts() {
        let mut form = business_form();
        form.toggle_visual(VisualIdentity::Logo);
        form.toggle_visual(VisualIdentity::Palette);
        form.set_palette("Preto, Roxo".to_string());
        form.toggle_channel(SocialChannel::Website);
        form.set_channel_value(SocialChannel::Website, "lojax.com.br".to_string());

        let message = form.compose_message().unwrap();
        assert!(message.contains("Possui logotipo? Sim\nPaleta de Cores: Preto, Roxo\n"));
        assert!(message.ends_with("--- REDES SOCIAIS E CONTATO ---\nSite: lojax.com.br"));
    }

    #[test]
    fn composition_is_deterministic() {
        let mut form = business_form();
        form.set_business_name("Loja X".to_string());
        form.toggle_channel(SocialChannel::TikTok);
        form.set_channel_value(SocialChannel::TikTok, "lojax".to_string());
        let copy = form.clone();
        assert_eq!(form.compose_message(), copy.compose_message());
        assert_eq!(form.whatsapp_url(), copy.whatsapp_url());
    }

    #[test]
    fn selection_has_nothing_to_submit() {
        let form = InquiryForm::new();
        assert_eq!(form.compose_message(), Err(SubmitError::NothingToSubmit));
        assert_eq!(form.whatsapp_url(), Err(SubmitError::NothingToSubmit));
    }

    #[test]
    fn whatsapp_url_encodes_composed_message() {
        let form = business_form();
        let url = form.whatsapp_url().unwrap();
        assert!(url.starts_with("https://wa.me/5541988710303?text=Ol%C3%A1%21%20Gostaria"));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn channel_choices_follow_catalog() {
        let ids: Vec<&str> = channel_choices().map(SocialChannel::id).collect();
        assert_eq!(ids, vec!["instagram", "facebook", "tiktok", "email", "website", "other"]);
    }
}
