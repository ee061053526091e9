use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // CALL THE RECEIPT API
    #[error("Url is incorrect.")]
    ParseUrlError,

    #[error("Url join path error.")]
    JoinUrlError,

    #[error("Failed to build the api http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    #[error("Failed to send request to the receipt api.")]
    SendRequestError(#[source] reqwest::Error),

    #[error("The receipt api responded with status {status}.")]
    UnexpectedStatus {
        status: u16,
        message: Option<String>,
    },

    #[error("Failed to decode the receipt api response.")]
    DecodeResponseError(#[source] reqwest::Error),

    // OTHER
    #[error("Failed to bind TcpListener.")]
    BindTcpListenerError(#[source] std::io::Error),

    #[error("Failed to listen TcpListener.")]
    ListenTcpListenerError(#[source] std::io::Error),

    #[error("Failed to read the bound address.")]
    LocalAddrError(#[source] std::io::Error),

    #[error("Failed to run server.")]
    RunServerError(#[source] std::io::Error),

    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl BizErrorEnum {
    /// The message the receipt api attached to a non-2xx response, if any.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            BizErrorEnum::UnexpectedStatus { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
