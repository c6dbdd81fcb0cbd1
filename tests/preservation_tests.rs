mod common;

use common::StubTransport;
use google_translate_api::{Format, TranslationRequest, Translator};
use serde_json::Value;
use tokio_test::{assert_err, assert_ok};

fn sent_text(params: &google_translate_api::Params) -> String {
    params["q"][0].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn identity_translation_round_trips() {
    let (stub, calls) = StubTransport::identity();
    let translator = Translator::with_transport(stub);

    let request = TranslationRequest::new("Contact Jane at HQ", "fr");
    let translations = assert_ok!(
        translator
            .translate_with_preservation(&request, "Jane|HQ")
            .await
    );

    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].translated_text, "Contact Jane at HQ");
    assert!(!translations[0].translated_text.contains("translate="));

    let calls = calls.lock().unwrap();
    let sent = sent_text(&calls[0].params);
    assert!(sent.contains("translate='no'>Jane</span>"));
    assert!(sent.contains("translate='no'>HQ</span>"));
}

#[tokio::test]
async fn preservation_forces_html_format() {
    let (stub, calls) = StubTransport::identity();
    let translator = Translator::with_transport(stub).with_default_format(Format::Text);

    let request = TranslationRequest::new("Call {user}", "de").format(Format::Text);
    assert_ok!(translator.translate_with_preservation(&request, r"\{\w+\}").await);

    assert_eq!(calls.lock().unwrap()[0].params["format"], "html");
}

#[tokio::test]
async fn preserved_text_survives_reordering() {
    // Moves the first wrapper to the end and translates the remaining words.
    let (stub, _calls) = StubTransport::new(|_, params| {
        Ok(common::echo_translations(params, |text| {
            let start = text.find("<span").unwrap_or(0);
            let end = text.find("</span>").map(|i| i + "</span>".len()).unwrap_or(0);
            let wrapper = &text[start..end];
            let rest = format!("{}{}", &text[..start], &text[end..]);
            format!("{} {}", rest.replace("Contact", "Contactez").replace(" at ", " au "), wrapper)
        }))
    });
    let translator = Translator::with_transport(stub);

    let request = TranslationRequest::new("Contact Jane at HQ", "fr");
    let translations = assert_ok!(
        translator
            .translate_with_preservation(&request, "Jane|HQ")
            .await
    );

    assert_eq!(translations[0].translated_text, "Contactez  au HQ Jane");
}

#[tokio::test]
async fn case_insensitive_matches_keep_original_case() {
    let (stub, _calls) = StubTransport::identity();
    let translator = Translator::with_transport(stub);

    let translations = assert_ok!(
        translator
            .translate_with_preservation(&TranslationRequest::new("ACME and acme", "it"), "Acme")
            .await
    );
    assert_eq!(translations[0].translated_text, "ACME and acme");
}

#[tokio::test]
async fn each_call_uses_a_fresh_marker() {
    let (stub, calls) = StubTransport::identity();
    let translator = Translator::with_transport(stub);
    let request = TranslationRequest::new("Jane", "es");

    assert_ok!(translator.translate_with_preservation(&request, "Jane").await);
    assert_ok!(translator.translate_with_preservation(&request, "Jane").await);

    let calls = calls.lock().unwrap();
    assert_ne!(sent_text(&calls[0].params), sent_text(&calls[1].params));
}

#[tokio::test]
async fn input_markup_from_other_markers_is_left_alone() {
    let (stub, _calls) = StubTransport::identity();
    let translator = Translator::with_transport(stub);

    let text = "<span id='gtp-old' translate='no'>kept</span> Jane";
    let translations = assert_ok!(
        translator
            .translate_with_preservation(&TranslationRequest::new(text, "es"), "Jane")
            .await
    );
    assert_eq!(translations[0].translated_text, text);
}

#[tokio::test]
async fn batch_preservation_keeps_order() {
    let (stub, _calls) = StubTransport::identity();
    let translator = Translator::with_transport(stub);

    let request = TranslationRequest::batch(["Hi Jane", "HQ calling", "nothing"], "fr");
    let translations = assert_ok!(
        translator
            .translate_with_preservation(&request, "Jane|HQ")
            .await
    );

    let texts: Vec<&str> = translations
        .iter()
        .map(|t| t.translated_text.as_str())
        .collect();
    assert_eq!(texts, vec!["Hi Jane", "HQ calling", "nothing"]);
}

#[tokio::test]
async fn malformed_pattern_fails_before_any_request() {
    let (stub, calls) = StubTransport::identity();
    let translator = Translator::with_transport(stub);

    let err = assert_err!(
        translator
            .translate_with_preservation(&TranslationRequest::new("text", "fr"), "(unclosed")
            .await
    );
    assert!(err.is_configuration());
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_translations_stay_empty() {
    let (stub, _calls) = StubTransport::fixed(Value::Object(Default::default()));
    let translator = Translator::with_transport(stub);

    let translations = assert_ok!(
        translator
            .translate_with_preservation(&TranslationRequest::new("Jane", "fr"), "Jane")
            .await
    );
    assert!(translations.is_empty());
}
