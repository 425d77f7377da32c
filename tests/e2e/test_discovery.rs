use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use shhelf_backend::domain::recommendation::CompletionProfile;
use test_context::test_context;

const ANALYSIS: &str = r#"```json
{
    "first_paragraph": "Mr. Jones, of the Manor Farm, had locked the hen-houses for the night.",
    "cefr_level": "B1",
    "estimated_vocabulary": 4500,
    "formal_models": ["political allegory", "satire"],
    "book_talk": "A short fable with a sharp bite."
}
```"#;

fn animal_farm() -> serde_json::Value {
    json!({ "book_title": "Animal Farm", "author": "George Orwell" })
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_discover_book_with_audio(ctx: &TestContext) {
    ctx.fakes.text_generator.set_completion(ANALYSIS);

    let response = ctx
        .client
        .post("/api/discover-book", &animal_farm())
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["cefr_level"], "B1");
    assert_eq!(body["estimated_vocabulary"], 4500);
    assert_eq!(body["formal_models"], json!(["political allegory", "satire"]));
    assert_eq!(body["book_talk_text"], "A short fable with a sharp bite.");

    let analysis_id = response.field("analysis_id").unwrap();
    assert_eq!(analysis_id.len(), 12);
    assert_eq!(
        body["sample_audio_url"],
        format!("http://api.test/audio/discovery_sample_{}.mp3", analysis_id).as_str()
    );
    assert!(ctx
        .audio_dir
        .path()
        .join(format!("discovery_talk_{}.mp3", analysis_id))
        .exists());

    let prompt = ctx.fakes.text_generator.last_prompt().unwrap();
    assert_eq!(prompt.profile, CompletionProfile::Analysis);
    assert!(prompt.instruction.contains("at B2 level"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_cached_discovery_without_regenerating(ctx: &TestContext) {
    ctx.fakes.text_generator.set_completion(ANALYSIS);

    let first = ctx
        .client
        .post("/api/discover-book", &animal_farm())
        .await
        .unwrap();
    first.assert_status(StatusCode::OK);
    let calls = ctx.fakes.multilingual_tts.calls() + ctx.fakes.fallback_tts.calls();

    // A different completion would show up if the analysis were redone
    ctx.fakes.text_generator.set_completion("not json at all");
    let second = ctx
        .client
        .post("/api/discover-book", &animal_farm())
        .await
        .unwrap();

    second.assert_status(StatusCode::OK);
    assert_eq!(first.body, second.body);
    assert_eq!(
        ctx.fakes.multilingual_tts.calls() + ctx.fakes.fallback_tts.calls(),
        calls
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_placeholder_analysis(ctx: &TestContext) {
    ctx.fakes
        .text_generator
        .set_completion("I am not able to analyze that book.");

    let response = ctx
        .client
        .post(
            "/api/discover-book",
            &json!({ "book_title": "Obscure Title", "author": "Nobody", "user_level": "C1" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["cefr_level"], "C1");
    assert_eq!(body["estimated_vocabulary"], 6000);
    assert!(response
        .field("first_paragraph")
        .unwrap()
        .starts_with("Sorry, could not retrieve the first paragraph of Obscure Title"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_failed_discovery(ctx: &TestContext) {
    ctx.fakes.text_generator.set_failing(true);

    let response = ctx
        .client
        .post("/api/discover-book", &animal_farm())
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Book discovery failed: Text generation failed");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_discovery_without_author(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/discover-book", &json!({ "book_title": "Animal Farm", "author": "" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Book title and author are required");
}
