use std::fmt::{self, Display, Formatter};

use colored::{ColoredString, Colorize};
use pulse_domain::{ConfidenceTier, ProductKind, Recommendation};

pub fn glyph(kind: ProductKind) -> &'static str {
    match kind {
        ProductKind::TravelCard => "✈",
        ProductKind::PremiumCard => "♛",
        ProductKind::CreditCard | ProductKind::Other => "▭",
        ProductKind::Deposit => "◉",
        ProductKind::Investments => "↗",
        ProductKind::GoldBars => "◆",
        ProductKind::CurrencyExchange => "$",
        ProductKind::CashLoan => "₸",
    }
}

/// Tier used for list icons. Unlike the card badge, the bounds are exclusive.
fn list_tier(recommendation: &Recommendation) -> ConfidenceTier {
    let value = recommendation.confidence.value();
    if value > 90.0 {
        ConfidenceTier::High
    } else if value > 80.0 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

fn tier_badge(recommendation: &Recommendation) -> ColoredString {
    let label = format!("{} уверенность", recommendation.confidence);
    match recommendation.confidence.tier() {
        ConfidenceTier::High => label.green().bold(),
        ConfidenceTier::Medium => label.blue().bold(),
        ConfidenceTier::Low => label.yellow().bold(),
    }
}

/// Highlighted card for the best recommendation of a run.
pub struct RecommendationCard<'a> {
    recommendation: &'a Recommendation,
}

impl<'a> RecommendationCard<'a> {
    pub fn new(recommendation: &'a Recommendation) -> Self {
        Self { recommendation }
    }

    pub fn format(&self) -> String {
        let rec = self.recommendation;
        let mut buf = String::new();
        buf.push_str(&format!("{}\n", "Лучшая рекомендация:".bold()));
        buf.push_str(&format!(
            "  {} {}  {}\n",
            glyph(rec.kind()).cyan(),
            rec.product.blue().bold(),
            tier_badge(rec)
        ));
        buf.push_str(&format!("    {}", rec.message));
        buf
    }
}

impl Display for RecommendationCard<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Every recommendation of a run, in the order the service returned them.
pub struct RecommendationList<'a> {
    recommendations: &'a [Recommendation],
}

impl<'a> RecommendationList<'a> {
    pub fn new(recommendations: &'a [Recommendation]) -> Self {
        Self { recommendations }
    }

    pub fn format(&self) -> String {
        let mut lines = vec![format!("{}", "Все рекомендации:".bold())];
        for rec in self.recommendations {
            let icon = match list_tier(rec) {
                ConfidenceTier::High => glyph(rec.kind()).green(),
                ConfidenceTier::Medium => glyph(rec.kind()).blue(),
                ConfidenceTier::Low => glyph(rec.kind()).white(),
            };
            lines.push(format!("  {} {}", icon, rec.product.bold()));
            lines.push(format!("    {}", rec.message));
            lines.push(format!(
                "    {}",
                format!("Точность: {}", rec.confidence).dimmed()
            ));
        }
        lines.join("\n")
    }
}

impl Display for RecommendationList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
