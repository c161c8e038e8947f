use crate::modules::credentials::HttpCredentialService;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub struct CommandContext<'a> {
    pub service: &'a mut HttpCredentialService,
    pub output: OutputMode,
}
