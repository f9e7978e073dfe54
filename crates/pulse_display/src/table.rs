use std::fmt::{self, Display, Formatter};

use colored::{ColoredString, Colorize};
use pulse_domain::{BadgeStyle, Client, ClientCode, ClientStatus};
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 5] = ["Код клиента", "Имя", "Продукт", "Статус", "Город"];
const GAP: &str = "  ";

/// Client list rendered as an aligned table, the selected row marked.
pub struct ClientTable<'a> {
    clients: &'a [Client],
    selected: Option<ClientCode>,
}

impl<'a> ClientTable<'a> {
    pub fn new(clients: &'a [Client]) -> Self {
        Self { clients, selected: None }
    }

    pub fn selected(mut self, selected: Option<ClientCode>) -> Self {
        self.selected = selected;
        self
    }

    fn cells(client: &Client) -> [String; 5] {
        [
            client.client_code.to_string(),
            client.name.clone(),
            client.product.clone(),
            client.status.to_string(),
            client.city.clone(),
        ]
    }

    fn widths(&self) -> [usize; 5] {
        let mut widths = HEADERS.map(UnicodeWidthStr::width);
        for client in self.clients {
            for (width, cell) in widths.iter_mut().zip(Self::cells(client)) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    fn pad(cell: &str, width: usize) -> String {
        let fill = width.saturating_sub(cell.width());
        format!("{cell}{}", " ".repeat(fill))
    }

    fn badge(status: &ClientStatus, padded: String) -> ColoredString {
        match status.badge() {
            BadgeStyle::Primary => padded.cyan().bold(),
            BadgeStyle::Secondary => padded.yellow(),
            BadgeStyle::Outline => padded.normal(),
        }
    }

    pub fn format(&self) -> String {
        if self.clients.is_empty() {
            return "Список клиентов пуст".dimmed().to_string();
        }

        let widths = self.widths();
        let mut lines = Vec::with_capacity(self.clients.len() + 2);

        let header: Vec<String> = HEADERS
            .iter()
            .zip(widths)
            .map(|(header, width)| Self::pad(header, width))
            .collect();
        lines.push(format!("  {}", header.join(GAP).bold()));

        let rule: Vec<String> = widths.iter().map(|width| "─".repeat(*width)).collect();
        lines.push(format!("  {}", rule.join(GAP).dimmed()));

        for client in self.clients {
            let is_selected = self.selected == Some(client.code());
            let cells = Self::cells(client);
            let row: Vec<String> = cells
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(column, (cell, width))| {
                    let padded = Self::pad(cell, width);
                    match column {
                        1 if is_selected => padded.bold().to_string(),
                        3 => Self::badge(&client.status, padded).to_string(),
                        _ => padded,
                    }
                })
                .collect();

            let marker = if is_selected { "▶".green().bold() } else { " ".normal() };
            lines.push(format!("{marker} {}", row.join(GAP).trim_end()));
        }

        lines.join("\n")
    }
}

impl Display for ClientTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
