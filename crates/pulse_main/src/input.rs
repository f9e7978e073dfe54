use std::fmt;

use anyhow::{anyhow, Result};
use inquire::ui::{RenderConfig, Styled};
use inquire::{InquireError, Select};
use pulse_domain::{Client, ClientCode};
use strum_macros::{Display, EnumIter};

/// Entries of the dashboard menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Action {
    #[strum(to_string = "Запустить диагностику")]
    RunDiagnostics,
    #[strum(to_string = "Выбрать клиента")]
    SelectClient,
    #[strum(to_string = "Обновить список клиентов")]
    ReloadClients,
    #[strum(to_string = "Выход")]
    Quit,
}

/// Operator input. `None` means the prompt was dismissed.
#[async_trait::async_trait]
pub trait InputService: Send + Sync {
    async fn select_action(&self, actions: Vec<Action>) -> Result<Option<Action>>;

    async fn select_client(
        &self,
        clients: Vec<Client>,
        selected: Option<ClientCode>,
    ) -> Result<Option<ClientCode>>;
}

struct ClientOption(Client);

impl fmt::Display for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let client = &self.0;
        write!(
            f,
            "{} · {} · {} · {}",
            client.client_code, client.name, client.status, client.city
        )
    }
}

pub struct PulseInquire;

impl Default for PulseInquire {
    fn default() -> Self {
        Self::new()
    }
}

impl PulseInquire {
    pub fn new() -> Self {
        Self
    }

    fn render_config() -> RenderConfig {
        RenderConfig::default()
            .with_scroll_up_prefix(Styled::new("⇡"))
            .with_scroll_down_prefix(Styled::new("⇣"))
            .with_highlighted_option_prefix(Styled::new("➤"))
    }

    async fn prompt<T, F>(&self, f: F) -> Result<Option<T>>
    where
        F: FnOnce() -> std::result::Result<T, InquireError> + Send + 'static,
        T: Send + 'static,
    {
        let result = tokio::task::spawn_blocking(f).await?;

        match result {
            Ok(value) => Ok(Some(value)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(e) => Err(anyhow!(e)),
        }
    }
}

#[async_trait::async_trait]
impl InputService for PulseInquire {
    async fn select_action(&self, actions: Vec<Action>) -> Result<Option<Action>> {
        self.prompt(move || {
            Select::new("Действие:", actions)
                .with_render_config(Self::render_config())
                .with_help_message("Use arrow keys to navigate, Enter to select, ESC to cancel")
                .prompt()
        })
        .await
    }

    async fn select_client(
        &self,
        clients: Vec<Client>,
        selected: Option<ClientCode>,
    ) -> Result<Option<ClientCode>> {
        let starting_cursor = selected
            .and_then(|code| clients.iter().position(|client| client.code() == code))
            .unwrap_or(0);
        let options: Vec<ClientOption> = clients.into_iter().map(ClientOption).collect();

        let choice = self
            .prompt(move || {
                Select::new("Выберите клиента для диагностики:", options)
                    .with_render_config(Self::render_config())
                    .with_help_message("Type to filter, arrow keys to navigate, ESC to cancel")
                    .with_starting_cursor(starting_cursor)
                    .prompt()
            })
            .await?;

        Ok(choice.map(|option| option.0.code()))
    }
}
