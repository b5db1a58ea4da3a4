use thiserror::Error;

/// Reasons a dialog refuses to hand off to WhatsApp.
///
/// The messages are shown to the visitor as-is, so they stay in Portuguese.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Informe sua idade para continuar.")]
    MissingAge,

    #[error("Menores de 14 anos não podem prosseguir (idade informada: {0}).")]
    Underage(i64),

    #[error("Por favor, digite seu nome.")]
    MissingName,

    #[error("Escolha um tipo de perfil antes de enviar.")]
    NothingToSubmit,

    #[error("Navegador indisponível.")]
    NoWindow,

    #[error("Não foi possível abrir o WhatsApp: {0}")]
    OpenFailed(String),
}
