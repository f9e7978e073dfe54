use pulse_domain::{
    top_recommendation, Client, ClientCode, ClientList, DiagnosticReport, Error, Recommendation,
    Result,
};

/// In-memory view state of the dashboard
#[derive(Default, Clone, Debug)]
pub struct DashboardState {
    pub clients: Vec<Client>,
    pub selected: Option<Client>,
    pub results: Vec<Recommendation>,
    pub top: Option<Recommendation>,
    pub is_loading: bool,
}

impl DashboardState {
    /// Replaces the client list. A selection that is no longer listed is
    /// dropped, one that is still listed picks up the fresh record.
    pub fn load_clients(&mut self, list: ClientList) {
        self.clients = list.clients;
        self.selected = self
            .selected
            .take()
            .and_then(|selected| self.find(selected.code()).cloned());
    }

    pub fn find(&self, code: ClientCode) -> Option<&Client> {
        self.clients.iter().find(|client| client.code() == code)
    }

    pub fn select(&mut self, code: ClientCode) -> Result<&Client> {
        let client = self.find(code).cloned().ok_or(Error::ClientNotFound(code))?;
        Ok(self.selected.insert(client))
    }

    pub fn selected_code(&self) -> Option<ClientCode> {
        self.selected.as_ref().map(Client::code)
    }

    pub fn can_diagnose(&self) -> bool {
        self.selected.is_some() && !self.is_loading
    }

    pub fn begin_run(&mut self) -> Result<Client> {
        let client = self.selected.clone().ok_or(Error::NoClientSelected)?;
        if self.is_loading {
            return Err(Error::DiagnosticsInProgress(client.code()));
        }
        self.is_loading = true;
        Ok(client)
    }

    pub fn complete_run(&mut self, report: DiagnosticReport) {
        self.top = top_recommendation(&report.recommendations).cloned();
        self.results = report.recommendations;
        self.is_loading = false;
    }

    pub fn fail_run(&mut self) {
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use pulse_domain::ClientStatus;

    use super::*;

    fn client(code: i64, name: &str) -> Client {
        Client {
            client_code: ClientCode::new(code),
            name: name.to_string(),
            product: "Кредитная карта".to_string(),
            status: ClientStatus::Standard,
            city: "Караганда".to_string(),
        }
    }

    fn fixture() -> DashboardState {
        let mut state = DashboardState::default();
        state.load_clients(ClientList { clients: vec![client(1, "Алия"), client(2, "Ерлан")] });
        state
    }

    fn report(recommendations: Vec<Recommendation>) -> DiagnosticReport {
        DiagnosticReport { client_name: "Алия".to_string(), recommendations }
    }

    #[test]
    fn test_selecting_a_client_enables_diagnostics() {
        let mut state = fixture();
        assert!(!state.can_diagnose());

        let actual = state.select(ClientCode::new(2)).unwrap().name.clone();

        assert_eq!(actual, "Ерлан");
        assert!(state.can_diagnose());
    }

    #[test]
    fn test_select_unknown_client() {
        let mut state = fixture();

        let actual = state.select(ClientCode::new(99));

        assert!(matches!(actual, Err(Error::ClientNotFound(code)) if code == ClientCode::new(99)));
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_begin_run_requires_selection() {
        let mut state = fixture();

        let actual = state.begin_run();

        assert!(matches!(actual, Err(Error::NoClientSelected)));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_run_in_flight_disables_diagnostics() {
        let mut state = fixture();
        state.select(ClientCode::new(1)).unwrap();

        state.begin_run().unwrap();

        assert!(state.is_loading);
        assert!(!state.can_diagnose());
        assert!(matches!(
            state.begin_run(),
            Err(Error::DiagnosticsInProgress(_))
        ));
    }

    #[test]
    fn test_complete_run_sets_results_and_top() {
        let mut state = fixture();
        state.select(ClientCode::new(1)).unwrap();
        state.begin_run().unwrap();

        state.complete_run(report(vec![
            Recommendation::new("Кредитная карта", "a", 85.0),
            Recommendation::new("Инвестиции", "b", 85.0),
        ]));

        assert!(!state.is_loading);
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.top.as_ref().map(|r| r.message.as_str()), Some("a"));
    }

    #[test]
    fn test_empty_run_shows_no_top() {
        let mut state = fixture();
        state.select(ClientCode::new(1)).unwrap();
        state.begin_run().unwrap();
        state.complete_run(report(vec![Recommendation::new("Инвестиции", "b", 70.0)]));

        state.begin_run().unwrap();
        state.complete_run(report(vec![]));

        assert!(state.results.is_empty());
        assert_eq!(state.top, None);
    }

    #[test]
    fn test_failed_run_keeps_previous_results() {
        let mut state = fixture();
        state.select(ClientCode::new(1)).unwrap();
        state.begin_run().unwrap();
        state.complete_run(report(vec![Recommendation::new("Инвестиции", "b", 70.0)]));
        let expected = state.results.clone();

        state.begin_run().unwrap();
        state.fail_run();

        assert!(!state.is_loading);
        assert_eq!(state.results, expected);
        assert_eq!(state.top, expected.first().cloned());
    }

    #[test]
    fn test_reload_keeps_listed_selection() {
        let mut state = fixture();
        state.select(ClientCode::new(2)).unwrap();

        state.load_clients(ClientList { clients: vec![client(2, "Ерлан Б.")] });

        assert_eq!(state.selected.map(|c| c.name), Some("Ерлан Б.".to_string()));
    }

    #[test]
    fn test_reload_drops_missing_selection() {
        let mut state = fixture();
        state.select(ClientCode::new(2)).unwrap();

        state.load_clients(ClientList { clients: vec![client(1, "Алия")] });

        assert_eq!(state.selected, None);
        assert!(!state.can_diagnose());
    }
}
