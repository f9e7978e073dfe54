use strum_macros::{EnumIter, EnumString};

/// Product families the diagnostic service is known to recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum ProductKind {
    #[strum(serialize = "Карта для путешествий")]
    TravelCard,
    #[strum(serialize = "Премиальная карта")]
    PremiumCard,
    #[strum(serialize = "Кредитная карта")]
    CreditCard,
    #[strum(serialize = "Депозит накопительный", serialize = "Депозит сберегательный")]
    Deposit,
    #[strum(serialize = "Инвестиции")]
    Investments,
    #[strum(serialize = "Золотые слитки")]
    GoldBars,
    #[strum(serialize = "Обмен валют")]
    CurrencyExchange,
    #[strum(serialize = "Кредит наличными")]
    CashLoan,
    Other,
}

impl ProductKind {
    /// Resolves a product name as sent by the backend. Names outside the
    /// known catalogue map to [`ProductKind::Other`].
    pub fn from_product(name: &str) -> Self {
        name.trim().parse().unwrap_or(ProductKind::Other)
    }
}
