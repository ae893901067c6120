//! End-to-end tests for set generation.

mod common;

use std::collections::BTreeSet;

use common::{fixtures, scripted, seeded, TestContext};
use mcq_core::{McqError, QuestionOrder};
use mcq_shuffle::{generate, CliError, OutputFormat};
use pretty_assertions::assert_eq;

#[test]
fn test_html_document_has_every_set() {
    let ctx = TestContext::new();
    let config = ctx.config(OutputFormat::Html, 2);

    let report = generate(&config, &mut scripted(""), &mut seeded(1)).unwrap();

    assert_eq!(report.sets, 2);
    assert_eq!(report.questions, 3);
    let html = ctx.read(&report.output);
    assert!(html.contains("<h1 class=\"set-title\">Set 1</h1>"));
    assert!(html.contains("<h1 class=\"set-title\">Set 2</h1>"));
    assert_eq!(html.matches("<div class=\"page-break\"></div>").count(), 2);
    assert_eq!(html.matches("Total marks: 5; Time: 6 minutes").count(), 2);
    assert!(html.contains("<b>Name:</b>"));
    assert!(html.contains("<p class=\"question\">3. Question 3?</p>"));
}

#[test]
fn test_json_options_keep_labels_and_texts() {
    let ctx = TestContext::new();
    let mut config = ctx.config(OutputFormat::Json, 5);
    config.question_order = Some(QuestionOrder::Shuffled);

    let report = generate(&config, &mut scripted(""), &mut seeded(7)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&ctx.read(&report.output)).unwrap();

    let mut labels = Vec::new();
    let mut texts = BTreeSet::new();
    let mut questions = 0;
    for block in value["blocks"].as_array().unwrap() {
        match block["kind"].as_str().unwrap() {
            "question" => {
                questions += 1;
                if !labels.is_empty() {
                    assert_eq!(labels, vec!["a", "b", "c", "d"]);
                }
                labels.clear();
            }
            "option" => {
                labels.push(block["label"].as_str().unwrap().to_string());
                texts.insert(block["text"].as_str().unwrap().to_string());
            }
            _ => {}
        }
    }
    assert_eq!(labels, vec!["a", "b", "c", "d"]);
    assert_eq!(questions, 15);
    // 3 questions x 4 options, no text lost or invented
    assert_eq!(texts.len(), 12);
    assert!(texts.contains("Answer 2c"));
}

#[test]
fn test_text_output_uses_form_feeds() {
    let ctx = TestContext::new();
    let config = ctx.config(OutputFormat::Text, 3);

    let report = generate(&config, &mut scripted(""), &mut seeded(3)).unwrap();
    let text = ctx.read(&report.output);

    assert_eq!(text.matches('\x0c').count(), 3);
    assert!(text.contains("1. Question 1?"));
    assert!(text.contains("   a. Answer 1"));
}

#[test]
fn test_missing_input_is_fatal() {
    let ctx = TestContext::new();
    ctx.remove("input.txt");
    let config = ctx.config(OutputFormat::Html, 1);

    let result = generate(&config, &mut scripted(""), &mut seeded(1));

    assert!(matches!(
        result,
        Err(CliError::Core(McqError::FileNotFound { .. }))
    ));
    assert!(!ctx.path("output").exists());
}

#[test]
fn test_missing_input_prompts_for_path() {
    let ctx = TestContext::new();
    ctx.remove("input.txt");
    let other = ctx.write("other.txt", &fixtures::sample_mcq_content(1, 2));
    let mut config = ctx.config(OutputFormat::Text, 1);
    config.interactive = true;

    let answers = format!("{}\n", other.display());
    let report = generate(&config, &mut scripted(&answers), &mut seeded(1)).unwrap();

    assert_eq!(report.questions, 1);
}

#[test]
fn test_prompts_for_order_and_count() {
    let ctx = TestContext::new();
    let mut config = ctx.config(OutputFormat::Text, 1);
    config.sets = None;
    config.question_order = None;
    config.interactive = true;

    let mut prompter = scripted("maybe\nno\n4\n");
    let report = generate(&config, &mut prompter, &mut seeded(1)).unwrap();

    assert_eq!(report.sets, 4);
}

#[test]
fn test_invalid_set_count_is_fatal() {
    let ctx = TestContext::new();
    let mut config = ctx.config(OutputFormat::Text, 1);
    config.sets = None;
    config.interactive = true;

    let result = generate(&config, &mut scripted("three\n"), &mut seeded(1));
    assert!(matches!(result, Err(CliError::InvalidSetCount(s)) if s == "three"));

    config.sets = Some(0);
    let result = generate(&config, &mut scripted(""), &mut seeded(1));
    assert!(matches!(result, Err(CliError::InvalidSetCount(_))));
}

#[test]
fn test_non_interactive_needs_set_count() {
    let ctx = TestContext::new();
    let mut config = ctx.config(OutputFormat::Text, 1);
    config.sets = None;

    let result = generate(&config, &mut scripted("2\n"), &mut seeded(1));
    assert!(matches!(result, Err(CliError::PromptDisabled(_))));
}

#[test]
fn test_boilerplate_retry_once() {
    let ctx = TestContext::new();
    ctx.remove("boilerplate.txt");
    let alternate = ctx.write("header.txt", "[B]Alternate header[/B]");
    let mut config = ctx.config(OutputFormat::Html, 1);
    config.interactive = true;

    let answers = format!("{}\n", alternate.display());
    let report = generate(&config, &mut scripted(&answers), &mut seeded(1)).unwrap();

    assert!(ctx.read(&report.output).contains("<b>Alternate header</b>"));
}

#[test]
fn test_boilerplate_second_miss_aborts() {
    let ctx = TestContext::new();
    ctx.remove("boilerplate.txt");
    let mut config = ctx.config(OutputFormat::Html, 1);
    config.interactive = true;

    let result = generate(&config, &mut scripted("nope.txt\n"), &mut seeded(1));

    assert!(matches!(
        result,
        Err(CliError::Core(McqError::FileNotFound { .. }))
    ));
    assert!(!ctx.path("output").exists());
}

#[test]
fn test_boilerplate_missing_non_interactive() {
    let ctx = TestContext::new();
    ctx.remove("boilerplate.txt");
    let config = ctx.config(OutputFormat::Html, 1);

    let result = generate(&config, &mut scripted(""), &mut seeded(1));
    assert!(matches!(
        result,
        Err(CliError::Core(McqError::FileNotFound { .. }))
    ));
}

#[test]
fn test_image_included_only_when_present() {
    let ctx = TestContext::new();
    let config = ctx.config(OutputFormat::Html, 2);

    let report = generate(&config, &mut scripted(""), &mut seeded(1)).unwrap();
    assert!(!ctx.read(&report.output).contains("<img"));

    ctx.write("set_image.jpg", "not really a jpeg");
    let report = generate(&config, &mut scripted(""), &mut seeded(1)).unwrap();
    assert_eq!(ctx.read(&report.output).matches("<img").count(), 2);
}

#[test]
fn test_ignored_lines_in_source() {
    let ctx = TestContext::new();
    ctx.write(
        "input.txt",
        "Quiz notes below\n\nQ1. Real question\na. one\nNotes: ignore this\nb. two\n",
    );
    let config = ctx.config(OutputFormat::Json, 1);

    let report = generate(&config, &mut scripted(""), &mut seeded(1)).unwrap();

    // "Quiz notes below" starts with Q and so opens a question of its own.
    assert_eq!(report.questions, 2);
    let value: serde_json::Value = serde_json::from_str(&ctx.read(&report.output)).unwrap();
    let options = value["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["kind"] == "option")
        .count();
    assert_eq!(options, 2);
}

#[test]
fn test_non_interactive_config_overrides_willing_prompter() {
    let ctx = TestContext::new();
    let other = ctx.write("other.txt", &fixtures::sample_mcq_content(1, 2));
    ctx.remove("input.txt");
    let config = ctx.config(OutputFormat::Text, 1);

    let answers = format!("{}\n", other.display());
    let result = generate(&config, &mut scripted(&answers), &mut seeded(1));
    assert!(matches!(
        result,
        Err(CliError::Core(McqError::FileNotFound { .. }))
    ));

    ctx.write("input.txt", &fixtures::sample_mcq_content(1, 2));
    let mut config = ctx.config(OutputFormat::Text, 1);
    config.question_order = None;
    let result = generate(&config, &mut scripted("yes\n"), &mut seeded(1));
    assert!(matches!(result, Err(CliError::PromptDisabled(_))));
}

#[test]
fn test_image_resolves_from_output_subdirectory() {
    let ctx = TestContext::new();
    std::fs::create_dir(ctx.path("assets")).unwrap();
    ctx.write("set_image.jpg", "not really a jpeg");
    let mut config = ctx.config(OutputFormat::Html, 1);
    config.image = ctx.path("assets").join("..").join("set_image.jpg");
    config.output = Some(ctx.path("out").join("sets.html"));

    let report = generate(&config, &mut scripted(""), &mut seeded(1)).unwrap();

    assert_eq!(report.output, ctx.path("out").join("sets.html"));
    let html = ctx.read(&report.output);
    let start = html.find("src=\"").expect("image tag") + "src=\"".len();
    let src = &html[start..start + html[start..].find('"').unwrap()];
    let src = std::path::Path::new(src);
    assert!(src.is_absolute());
    assert!(!src.components().any(|c| c == std::path::Component::ParentDir));
    assert!(src.is_file());
}
