/// A chat message as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub channel: String,
    pub author_id: String,
    pub author_name: String,
    pub is_bot: bool,
    pub content: String,
}

/// A message for the transport to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outbound {
    pub channel: String,
    pub text: String,
}

impl Outbound {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    UnknownMember(String),
    Unavailable(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::UnknownMember(id) => write!(f, "unknown member {}", id),
            LookupError::Unavailable(reason) => write!(f, "member lookup unavailable: {}", reason),
        }
    }
}

impl std::error::Error for LookupError {}

/// Resolves participant identities to display names.
pub trait NameDirectory: Send + Sync {
    fn display_name(&self, identity: &str) -> Result<String, LookupError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectError {
    MissingCredential,
}

impl std::fmt::Display for ConnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectError::MissingCredential => write!(f, "transport credential is missing or blank"),
        }
    }
}

impl std::error::Error for ConnectError {}
