//! Wire types for the answering service.

use serde::{Deserialize, Serialize};

use crate::session::{Answer, AnswerMeta};

/// Request body for `POST /api/ask`.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub question: &'a str,
}

/// Success response from the answering service.
///
/// Only `answer` is required. The optional fields are passed through to
/// rendering unmodified; absent fields render as empty. The aliases accept
/// the backend's Portuguese field names.
#[derive(Debug, Clone, Deserialize)]
pub struct AskResponse {
    #[serde(alias = "resposta")]
    pub answer: String,

    #[serde(default)]
    pub confidence: Option<f64>,

    #[serde(default, alias = "fontes")]
    pub sources: Vec<String>,

    #[serde(default, alias = "perguntas_faltantes")]
    pub follow_ups: Vec<String>,
}

impl From<AskResponse> for Answer {
    fn from(resp: AskResponse) -> Self {
        Answer {
            text: resp.answer,
            meta: AnswerMeta {
                confidence: resp.confidence,
                sources: resp.sources,
                follow_ups: resp.follow_ups,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_response() {
        let resp: AskResponse = serde_json::from_str(r#"{"answer":"Recebi sua pergunta."}"#)
            .unwrap();
        assert_eq!(resp.answer, "Recebi sua pergunta.");
        assert!(resp.confidence.is_none());
        assert!(resp.sources.is_empty());
        assert!(resp.follow_ups.is_empty());
    }

    #[test]
    fn test_deserialize_full_response() {
        let body = r#"{
            "answer": "Infração grave.",
            "confidence": 0.92,
            "sources": ["CTB art. 167"],
            "follow_ups": ["Qual o valor da multa?"]
        }"#;
        let resp: AskResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.confidence, Some(0.92));
        assert_eq!(resp.sources, vec!["CTB art. 167".to_string()]);
        assert_eq!(resp.follow_ups, vec!["Qual o valor da multa?".to_string()]);
    }

    #[test]
    fn test_deserialize_portuguese_aliases() {
        let body = r#"{
            "resposta": "Nulidades do AIT.",
            "fontes": ["art. 280"],
            "perguntas_faltantes": ["Qual o órgão autuador?"]
        }"#;
        let resp: AskResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.answer, "Nulidades do AIT.");
        assert_eq!(resp.sources, vec!["art. 280".to_string()]);
        assert_eq!(resp.follow_ups, vec!["Qual o órgão autuador?".to_string()]);
    }

    #[test]
    fn test_missing_answer_is_rejected() {
        let result = serde_json::from_str::<AskResponse>(r#"{"confidence": 0.5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_request() {
        let req = AskRequest { question: "O que é CTB?" };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"question":"O que é CTB?"}"#
        );
    }

    #[test]
    fn test_into_answer_carries_meta() {
        let resp = AskResponse {
            answer: "ok".to_string(),
            confidence: Some(0.5),
            sources: vec!["x".to_string()],
            follow_ups: vec![],
        };
        let answer: Answer = resp.into();
        assert_eq!(answer.text, "ok");
        assert_eq!(answer.meta.confidence, Some(0.5));
        assert!(!answer.meta.is_empty());
    }
}
