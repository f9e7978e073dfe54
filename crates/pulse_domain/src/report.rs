use serde::{Deserialize, Serialize};

use crate::{top_recommendation, Client, ClientCode, Recommendation};

/// Body of `GET /api/clients`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ClientList {
    pub clients: Vec<Client>,
}

/// Body of `POST /api/diagnose`.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct DiagnoseRequest {
    pub client_code: ClientCode,
}

impl From<ClientCode> for DiagnoseRequest {
    fn from(client_code: ClientCode) -> Self {
        Self { client_code }
    }
}

/// Outcome of one diagnostic run.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DiagnosticReport {
    pub client_name: String,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl DiagnosticReport {
    pub fn top(&self) -> Option<&Recommendation> {
        top_recommendation(&self.recommendations)
    }

    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceInfo {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_diagnose_request_wire_shape() {
        let actual = serde_json::to_value(DiagnoseRequest::from(ClientCode::new(12))).unwrap();
        assert_eq!(actual, json!({"client_code": 12}));
    }

    #[test]
    fn test_report_without_recommendations_field() {
        let actual: DiagnosticReport =
            serde_json::from_value(json!({"client_name": "Данияр"})).unwrap();

        assert!(actual.is_empty());
        assert_eq!(actual.top(), None);
    }

    #[test]
    fn test_report_top() {
        let fixture: DiagnosticReport = serde_json::from_value(json!({
            "client_name": "Данияр",
            "recommendations": [
                {"product": "Кредитная карта", "message": "m1", "confidence": 81.2},
                {"product": "Депозит накопительный", "message": "m2", "confidence": 95}
            ]
        }))
        .unwrap();

        let actual = fixture.top().map(|r| r.product.clone());

        assert_eq!(fixture.len(), 2);
        assert_eq!(actual, Some("Депозит накопительный".to_string()));
    }
}
