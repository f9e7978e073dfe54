use std::fmt::{self, Display, Formatter};

use colored::Colorize;
use derive_setters::Setters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Action,
    Info,
    Success,
    Error,
}

/// A one line notice, the terminal counterpart of a toast.
#[derive(Clone, Setters)]
#[setters(into, strip_option)]
pub struct TitleFormat {
    pub title: String,
    pub sub_title: Option<String>,
    pub category: Category,
}

impl TitleFormat {
    fn new(title: impl Into<String>, category: Category) -> Self {
        Self { title: title.into(), sub_title: None, category }
    }

    pub fn action(title: impl Into<String>) -> Self {
        Self::new(title, Category::Action)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, Category::Info)
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Category::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, Category::Error)
    }

    pub fn format(&self) -> String {
        let mut buf = String::new();

        let (icon, title) = match self.category {
            Category::Action => ("⏺".blue(), self.title.white().bold()),
            Category::Info => ("⏺".white(), self.title.white()),
            Category::Success => ("✓".green(), self.title.green().bold()),
            Category::Error => ("✗".red(), self.title.red().bold()),
        };

        buf.push_str(&format!("{icon} {title}"));

        if let Some(ref sub_title) = self.sub_title {
            buf.push_str(&format!(" {}", sub_title.dimmed()));
        }

        buf
    }
}

impl Display for TitleFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
