use std::sync::Arc;

use anyhow::Result;
use pulse_display::{Category, ClientTable, RecommendationCard, RecommendationList, TitleFormat};
use pulse_domain::{ClientCode, DashboardService, Error as DomainError};
use pulse_progress::ProgressManager;
use strum::IntoEnumIterator;

use crate::banner;
use crate::cli::TopLevelCommand;
use crate::env::Environment;
use crate::input::{Action, InputService};
use crate::state::DashboardState;

/// Outcome of a diagnostics run, for the exit status of one-shot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Failed,
    Rejected,
}

pub struct UI<S, I> {
    state: DashboardState,
    service: Arc<S>,
    input: I,
    env: Environment,
    progress: ProgressManager,
    last_notice: Option<TitleFormat>,
}

impl<S: DashboardService, I: InputService> UI<S, I> {
    pub fn new(env: Environment, service: Arc<S>, input: I) -> Self {
        let progress = if env.animate { ProgressManager::new() } else { ProgressManager::hidden() };
        Self {
            state: DashboardState::default(),
            service,
            input,
            env,
            progress,
            last_notice: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The most recent notice shown to the operator.
    pub fn last_notice(&self) -> Option<&TitleFormat> {
        self.last_notice.as_ref()
    }

    /// Writes a line to the console output
    fn writeln<T: ToString>(&mut self, content: T) -> Result<()> {
        self.progress.write_ln(content)
    }

    /// Shows a notice. Errors go to stderr and take the progress bar down.
    fn notify(&mut self, notice: TitleFormat) -> Result<()> {
        if notice.category == Category::Error {
            self.progress.abandon()?;
            eprintln!("{notice}");
        } else {
            self.writeln(&notice)?;
        }
        self.last_notice = Some(notice);
        Ok(())
    }

    fn notify_error(&mut self, title: &str, error: &anyhow::Error) -> Result<()> {
        tracing::error!(error = ?error, "{title}");
        self.notify(TitleFormat::error(title).sub_title(format!("{error:#}")))
    }

    /// Runs `command`, or the interactive dashboard when there is none.
    /// Returns whether it succeeded.
    pub async fn run(&mut self, command: Option<TopLevelCommand>) -> bool {
        match self.run_inner(command).await {
            Ok(success) => success,
            Err(error) => {
                tracing::error!(error = ?error, "Dashboard stopped");
                let _ = self.notify(TitleFormat::error(format!("{error:#}")));
                false
            }
        }
    }

    async fn run_inner(&mut self, command: Option<TopLevelCommand>) -> Result<bool> {
        match command {
            Some(TopLevelCommand::Clients) => {
                let loaded = self.on_load_clients().await?;
                if loaded {
                    self.show_clients()?;
                }
                Ok(loaded)
            }
            Some(TopLevelCommand::Diagnose { client_code }) => {
                Ok(self.on_diagnose_code(client_code).await? == RunOutcome::Completed)
            }
            Some(TopLevelCommand::Info) => self.on_info().await,
            None => {
                self.run_interactive().await?;
                Ok(true)
            }
        }
    }

    async fn run_interactive(&mut self) -> Result<()> {
        banner::display()?;
        if self.on_load_clients().await? {
            self.show_clients()?;
        }

        loop {
            let Some(action) = self.input.select_action(self.available_actions()).await? else {
                return Ok(());
            };

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("User interrupted operation with Ctrl+C");
                    self.on_interrupt()?;
                }
                result = self.on_action(action) => {
                    if result? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Diagnostics is only offered once a client is selected.
    pub fn available_actions(&self) -> Vec<Action> {
        Action::iter()
            .filter(|action| match action {
                Action::RunDiagnostics => self.state.can_diagnose(),
                Action::SelectClient => !self.state.clients.is_empty(),
                Action::ReloadClients | Action::Quit => true,
            })
            .collect()
    }

    /// Returns `true` when the operator asked to leave.
    pub async fn on_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::RunDiagnostics => {
                self.on_diagnose().await?;
            }
            Action::SelectClient => {
                self.on_select_client().await?;
            }
            Action::ReloadClients => {
                if self.on_load_clients().await? {
                    self.show_clients()?;
                }
            }
            Action::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn on_interrupt(&mut self) -> Result<()> {
        self.progress.abandon()?;
        self.state.fail_run();
        self.notify(TitleFormat::info("Операция прервана"))
    }

    /// Fetches the client list. On failure the previous list stays and
    /// `false` is returned.
    pub async fn on_load_clients(&mut self) -> Result<bool> {
        match self.service.clients().await {
            Ok(list) => {
                self.state.load_clients(list);
                Ok(true)
            }
            Err(error) => {
                self.notify_error("Не удалось загрузить список клиентов", &error)?;
                Ok(false)
            }
        }
    }

    fn show_clients(&mut self) -> Result<()> {
        let table = ClientTable::new(&self.state.clients)
            .selected(self.state.selected_code())
            .format();
        self.notify(TitleFormat::action("Список клиентов").sub_title(format!(
            "{} клиентов",
            self.state.clients.len()
        )))?;
        self.writeln(table)
    }

    async fn on_select_client(&mut self) -> Result<()> {
        let clients = self.state.clients.clone();
        let selected = self.state.selected_code();
        if let Some(code) = self.input.select_client(clients, selected).await? {
            self.on_select(code)?;
        }
        Ok(())
    }

    pub fn on_select(&mut self, code: ClientCode) -> Result<()> {
        let client = self.state.select(code)?;
        let line = TitleFormat::info(format!("Выбран клиент {}", client.name))
            .sub_title(format!("{} • {}", client.client_code, client.city));
        self.notify(line)
    }

    async fn on_diagnose_code(&mut self, code: ClientCode) -> Result<RunOutcome> {
        if !self.on_load_clients().await? {
            return Ok(RunOutcome::Failed);
        }
        self.on_select(code)?;
        self.on_diagnose().await
    }

    /// One diagnostics run for the selected client.
    ///
    /// A failed request leaves the previous results in place.
    pub async fn on_diagnose(&mut self) -> Result<RunOutcome> {
        let client = match self.state.begin_run() {
            Ok(client) => client,
            Err(DomainError::NoClientSelected) => {
                self.notify(TitleFormat::error("Выберите клиента для диагностики"))?;
                return Ok(RunOutcome::Rejected);
            }
            Err(error) => return Err(error.into()),
        };

        self.notify(
            TitleFormat::action("Запуск диагностики...")
                .sub_title(format!("Анализ финансового поведения {}", client.name)),
        )?;
        if self.env.animate {
            self.progress.start("Анализ данных")?;
        }

        match self.service.diagnose(client.code()).await {
            Ok(report) => {
                self.progress.complete()?;
                if !self.env.reveal_delay.is_zero() {
                    tokio::time::sleep(self.env.reveal_delay).await;
                }
                self.progress.finish()?;

                let client_name = report.client_name.clone();
                let count = report.len();
                self.state.complete_run(report);
                self.show_results()?;
                self.notify(
                    TitleFormat::success("Диагностика завершена!")
                        .sub_title(format!("Найдено {count} рекомендаций для {client_name}")),
                )?;
                Ok(RunOutcome::Completed)
            }
            Err(error) => {
                self.state.fail_run();
                self.notify_error("Произошла ошибка при диагностике", &error)?;
                Ok(RunOutcome::Failed)
            }
        }
    }

    fn show_results(&mut self) -> Result<()> {
        if let Some(top) = &self.state.top {
            let card = RecommendationCard::new(top).format();
            self.writeln(card)?;
        }
        if !self.state.results.is_empty() {
            let list = RecommendationList::new(&self.state.results).format();
            self.writeln(list)?;
        }
        Ok(())
    }

    async fn on_info(&mut self) -> Result<bool> {
        let url = self.env.api_url.to_string();
        match self.service.info().await {
            Ok(info) => {
                self.notify(TitleFormat::success(info.message).sub_title(url))?;
                Ok(true)
            }
            Err(error) => {
                self.notify_error(&format!("Сервер недоступен: {url}"), &error)?;
                Ok(false)
            }
        }
    }
}
