// Static content of the page: channels, identity options, links, quotes.

/// Contact channels the minisite form can collect, in message order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SocialChannel {
    Instagram,
    Facebook,
    TikTok,
    Email,
    Website,
    Other,
}

pub struct ChannelOption {
    pub channel: SocialChannel,
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub placeholder: &'static str,
    pub input_type: &'static str,
}

pub static SOCIAL_OPTIONS: [ChannelOption; 6] = [
    ChannelOption {
        channel: SocialChannel::Instagram,
        id: "instagram",
        label: "Instagram",
        icon: "icon-instagram",
        placeholder: "seu_usuario",
        input_type: "text",
    },
    ChannelOption {
        channel: SocialChannel::Facebook,
        id: "facebook",
        label: "Facebook",
        icon: "icon-facebook",
        placeholder: "seu.usuario",
        input_type: "text",
    },
    ChannelOption {
        channel: SocialChannel::TikTok,
        id: "tiktok",
        label: "TikTok",
        icon: "icon-tiktok",
        placeholder: "@seu_usuario",
        input_type: "text",
    },
    ChannelOption {
        channel: SocialChannel::Email,
        id: "email",
        label: "Email",
        icon: "icon-email",
        placeholder: "contato@email.com",
        input_type: "email",
    },
    ChannelOption {
        channel: SocialChannel::Website,
        id: "website",
        label: "Site",
        icon: "icon-website",
        placeholder: "seusite.com.br",
        input_type: "text",
    },
    ChannelOption {
        channel: SocialChannel::Other,
        id: "other",
        label: "Outro Link",
        icon: "icon-link",
        placeholder: "Link do seu canal, etc.",
        input_type: "text",
    },
];

impl SocialChannel {
    pub fn option(self) -> &'static ChannelOption {
        // SOCIAL_OPTIONS is declared in variant order
        &SOCIAL_OPTIONS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.option().id
    }

    pub fn label(self) -> &'static str {
        self.option().label
    }

    /// Profile handles are written as `@user` in the message.
    pub fn is_handle(self) -> bool {
        matches!(self, SocialChannel::Instagram | SocialChannel::Facebook | SocialChannel::TikTok)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualIdentity {
    Logo,
    Slogan,
    Palette,
}

pub struct VisualIdentityOption {
    pub option: VisualIdentity,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static VISUAL_IDENTITY_OPTIONS: [VisualIdentityOption; 3] = [
    VisualIdentityOption { option: VisualIdentity::Logo, label: "Logotipo", icon: "icon-logo" },
    VisualIdentityOption { option: VisualIdentity::Slogan, label: "Slogan", icon: "icon-slogan" },
    VisualIdentityOption { option: VisualIdentity::Palette, label: "Paleta de Cores", icon: "icon-palette" },
];

/// What a link button does when it has no URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    OpenInstagram,
    OpenWhatsApp,
}

pub struct PageLink {
    pub text: &'static str,
    pub url: Option<&'static str>,
    pub action: Option<LinkAction>,
    pub icon: &'static str,
    pub brand_color: &'static str,
}

pub static LINKS: [PageLink; 5] = [
    PageLink {
        text: "InteligenciArte.IA",
        url: Some("https://inteligenciarteia.vercel.app"),
        action: None,
        icon: "icon-website",
        brand_color: "#00ffff",
    },
    PageLink {
        text: "Instagram",
        url: None,
        action: Some(LinkAction::OpenInstagram),
        icon: "icon-instagram",
        brand_color: "#E1306C",
    },
    PageLink {
        text: "WhatsApp",
        url: None,
        action: Some(LinkAction::OpenWhatsApp),
        icon: "icon-whatsapp",
        brand_color: "#25D366",
    },
    PageLink {
        text: "TikTok",
        url: Some("https://www.tiktok.com/@davicortelete"),
        action: None,
        icon: "icon-tiktok",
        brand_color: "#00f2ea",
    },
    PageLink {
        text: "LinkedIn",
        url: Some("https://www.linkedin.com/in/davicortelete"),
        action: None,
        icon: "icon-linkedin",
        brand_color: "#0A66C2",
    },
];

pub static INSTAGRAM_PROFILES: [PageLink; 2] = [
    PageLink {
        text: "InteligenciArte.IA",
        url: Some("https://www.instagram.com/inteligenciarte.ia"),
        action: None,
        icon: "icon-instagram",
        brand_color: "#E1306C",
    },
    PageLink {
        text: "Davi Cortelete",
        url: Some("https://www.instagram.com/davicortelete"),
        action: None,
        icon: "icon-instagram",
        brand_color: "#E1306C",
    },
];

pub const QUOTES: [&str; 20] = [
    "O Senhor é o meu pastor; nada me faltará. (Salmos 23:1)",
    "Tudo posso naquele que me fortalece. (Filipenses 4:13)",
    "O coração do homem planeja o seu caminho, mas o Senhor lhe dirige os passos. (Provérbios 16:9)",
    "Deleita-te também no Senhor, e te concederá os desejos do teu coração. (Salmos 37:4)",
    "Porque para Deus nada é impossível. (Lucas 1:37)",
    "O temor do Senhor é o princípio da sabedoria. (Provérbios 9:10)",
    "Lâmpada para os meus pés é tua palavra, e luz para o meu caminho. (Salmos 119:105)",
    "Porque a seus anjos dará ordem a teu respeito, para te guardarem em todos os teus caminhos. (Salmos 91:11)",
    "O choro pode durar uma noite, mas a alegria vem pela manhã. (Salmos 30:5)",
    "Confia no Senhor de todo o teu coração, e não te estribes no teu próprio entendimento. (Provérbios 3:5)",
    "Os céus declaram a glória de Deus e o firmamento anuncia a obra das suas mãos. (Salmos 19:1)",
    "Ainda que eu andasse pelo vale da sombra da morte, não temeria mal algum, porque tu estás comigo. (Salmos 23:4)",
    "O Senhor é a minha luz e a minha salvação; a quem temerei? (Salmos 27:1)",
    "Ensina-nos a contar os nossos dias, de tal maneira que alcancemos corações sábios. (Salmos 90:12)",
    "A resposta branda desvia o furor, mas a palavra dura suscita a ira. (Provérbios 15:1)",
    "Em todo tempo ama o amigo e para a hora da angústia nasce o irmão. (Provérbios 17:17)",
    "Como o ferro com o ferro se afia, assim o homem afia o rosto do seu amigo. (Provérbios 27:17)",
    "Porque sou eu que conheço os planos que tenho para vocês, diz o Senhor. (Jeremias 29:11)",
    "O cavalo prepara-se para o dia da batalha, porém do Senhor vem a vitória. (Provérbios 21:31)",
    "Mil poderão cair ao teu lado, e dez mil à tua direita, mas tu não serás atingido. (Salmos 91:7)",
];
