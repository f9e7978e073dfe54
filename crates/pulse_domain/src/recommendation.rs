use serde::{Deserialize, Serialize};

use crate::{Confidence, ProductKind};

/// A scored product suggestion returned by the diagnostic service.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Recommendation {
    pub product: String,
    pub message: String,
    pub confidence: Confidence,
}

impl Recommendation {
    pub fn new(product: impl Into<String>, message: impl Into<String>, confidence: f64) -> Self {
        Self {
            product: product.into(),
            message: message.into(),
            confidence: Confidence::new(confidence),
        }
    }

    pub fn kind(&self) -> ProductKind {
        ProductKind::from_product(&self.product)
    }
}

/// Picks the recommendation with the highest confidence.
///
/// On ties the earliest entry wins. Returns `None` for an empty slice.
pub fn top_recommendation(recommendations: &[Recommendation]) -> Option<&Recommendation> {
    recommendations.iter().fold(None, |best, current| match best {
        Some(best) if best.confidence >= current.confidence => Some(best),
        // NaN never beats a real score, and a real score always beats NaN.
        Some(best) if current.confidence.value().is_nan() => Some(best),
        _ => Some(current),
    })
}
