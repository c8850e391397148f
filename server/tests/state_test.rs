//! End-to-end tests for the backend state with the real engine.

use tokenlens_api::AppStateProvider;
use tokenlens_server::AppState;
use tokenlens_tokenization::default_catalog;
use tokenlens_values::{RequestValue, ResponseValue};

fn state() -> AppState {
    AppState::new(default_catalog(None))
}

#[tokio::test]
async fn tokenize_covers_all_backends_in_configured_order() {
    let response = state()
        .handle_request(RequestValue::tokenize("Hello, world!"))
        .await
        .unwrap();

    let ResponseValue::Tokenize(results) = response else {
        panic!("expected tokenize response");
    };

    let ids: Vec<&str> = results.results.keys().map(String::as_str).collect();
    assert_eq!(
        ids,
        ["gpt2", "gpt4", "sentencepiece", "wordpiece", "byte-pair-ids"]
    );

    for (id, result) in &results.results {
        assert!(!result.tokens.is_empty(), "backend {id} returned no tokens");
        assert_eq!(result.count, result.tokens.len(), "backend {id}");
        for token in &result.tokens {
            assert!(!token.text.is_empty());
            assert!(token.color.starts_with("rgb("), "backend {id}");
        }
    }
}

#[tokio::test]
async fn gpt2_tokens_reconstruct_the_input() {
    let response = state()
        .handle_request(RequestValue::tokenize("Hello, world!"))
        .await
        .unwrap();

    let ResponseValue::Tokenize(results) = response else {
        panic!("expected tokenize response");
    };

    let rebuilt: String = results.results["gpt2"]
        .tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(rebuilt, "Hello, world!");
}

#[tokio::test]
async fn unconfigured_sentencepiece_backend_uses_marker_fallback() {
    // No tokenizer dir configured, so the file-backed backend falls back to
    // the SentencePiece surrogate segmenter.
    let response = state()
        .handle_request(RequestValue::tokenize("Hello, world!"))
        .await
        .unwrap();

    let ResponseValue::Tokenize(results) = response else {
        panic!("expected tokenize response");
    };

    let texts: Vec<&str> = results.results["sentencepiece"]
        .tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(texts, ["\u{2581}Hello", ",", " ", "\u{2581}world", "!"]);
}

#[tokio::test]
async fn colors_are_fresh_on_every_call() {
    let state = state();
    let mut palettes = Vec::new();

    for _ in 0..2 {
        let response = state
            .handle_request(RequestValue::tokenize(
                "a somewhat longer input to make color collisions unlikely",
            ))
            .await
            .unwrap();
        let ResponseValue::Tokenize(results) = response else {
            panic!("expected tokenize response");
        };
        let colors: Vec<String> = results
            .results
            .values()
            .flat_map(|r| r.tokens.iter().map(|t| t.color.clone()))
            .collect();
        palettes.push(colors);
    }

    assert_ne!(palettes[0], palettes[1]);
}

#[tokio::test]
async fn list_backends_matches_catalog() {
    let response = state()
        .handle_request(RequestValue::ListBackends)
        .await
        .unwrap();

    let ResponseValue::Backends(backends) = response else {
        panic!("expected backends response");
    };
    assert_eq!(backends.len(), 5);
    assert_eq!(backends[0].id, "gpt2");
    assert_eq!(backends[0].name, "GPT-2");
}

#[tokio::test]
async fn health_reports_ok() {
    let response = state().handle_request(RequestValue::Health).await.unwrap();

    let ResponseValue::Health(status) = response else {
        panic!("expected health response");
    };
    assert_eq!(status.status, "ok");
    assert_eq!(status.service, "tokenlens-server");
}
