use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_answer(text: &str) -> serde_json::Value {
    serde_json::json!({ "answer": text })
}

#[tokio::test]
async fn test_chat_answers_and_exits_on_quit() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_answer(
            "O **CTB** é o Código de Trânsito Brasileiro.",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["chat"])
        .write_stdin("o que é o ctb?\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Babix está digitando..."))
        .stdout(predicate::str::contains("CTB"))
        .stdout(predicate::str::contains("é o Código de Trânsito Brasileiro."))
        .stdout(predicate::str::contains("**").not())
        .stdout(predicate::str::contains("Até logo!"));
}

#[tokio::test]
async fn test_chat_renders_service_metadata() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    let body = serde_json::json!({
        "answer": "Multa de R$ 293,47 e 7 pontos.",
        "confidence": 0.91,
        "fontes": ["CTB art. 165"],
        "perguntas_faltantes": ["Houve recusa ao bafômetro?"]
    });

    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["chat"])
        .write_stdin("dirigir alcoolizado\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Confiança: 0.91"))
        .stdout(predicate::str::contains("Fontes: CTB art. 165"))
        .stdout(predicate::str::contains("Perguntas faltantes:"))
        .stdout(predicate::str::contains("1. Houve recusa ao bafômetro?"));
}

#[tokio::test]
async fn test_chat_shows_fallback_on_server_error() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    // The session must stay usable after a failure.
    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["chat"])
        .write_stdin("olá\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Erro ao contatar o servidor."))
        .stdout(predicate::str::contains("Até logo!"));
}

#[tokio::test]
async fn test_chat_skips_empty_input() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_answer("Entendido.")))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Blank lines must not reach the service; only "teste" does.
    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["chat"])
        .write_stdin("\n   \nteste\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entendido."));
}

#[tokio::test]
async fn test_chat_quick_action_fills_then_empty_enter_submits() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .and(body_partial_json(
            serde_json::json!({ "question": "Consultar Artigo CTB" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_answer("Qual artigo?")))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["chat"])
        .write_stdin(":2\n\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Consultar Artigo CTB"))
        .stdout(predicate::str::contains("Qual artigo?"));
}

#[tokio::test]
async fn test_chat_new_conversation_notice() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["chat"])
        .write_stdin(":n\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nova conversa iniciada."));
}

#[tokio::test]
async fn test_chat_shows_welcome_message() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["chat"])
        .write_stdin(":q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Babix"))
        .stdout(predicate::str::contains(":q para sair"))
        .stdout(predicate::str::contains("Ações rápidas:"))
        .stdout(predicate::str::contains(":1 Analisar Auto de Infração"))
        .stdout(predicate::str::contains(":4 Buscar Jurisprudência"));
}

#[tokio::test]
async fn test_ask_prints_single_answer() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .and(body_partial_json(
            serde_json::json!({ "question": "o que é suspensão da CNH?" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_answer(
            "É a penalidade que impede a condução por um período.",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["ask", "o que é suspensão da CNH?"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "É a penalidade que impede a condução por um período.",
        ));
}

#[tokio::test]
async fn test_ask_fails_on_server_error() {
    let mock_server = MockServer::start().await;
    let home = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/ask"))
        .respond_with(ResponseTemplate::new(503).set_body_string("indisponível"))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("babix")
        .env("BABIX_HOME", home.path())
        .env("BABIX_BASE_URL", mock_server.uri())
        .args(["ask", "olá"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Erro ao contatar o servidor."));
}
