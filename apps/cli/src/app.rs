//! The read → shuffle → render pipeline.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use mcq_core::{
    build_story, generate_sets, load_boilerplate, parse_file, Boilerplate, Permuter,
    QuestionOrder, StoryOptions,
};

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::prompt::Prompter;

const ASK_INPUT: &str = "Enter the name of the file containing the questions and answer options";
const ASK_SHUFFLE: &str = "Do you want to randomize the MCQs?";
const ASK_SET_COUNT: &str = "Enter the number of randomized question sets to generate";
const ASK_BOILERPLATE: &str = "Enter the name of the file containing the boilerplate text";

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub output: PathBuf,
    pub sets: usize,
    pub questions: usize,
}

/// Parse the source, build every set and write the rendered document.
pub fn generate<R, W, P>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
    permuter: &mut P,
) -> Result<Report>
where
    R: BufRead,
    W: Write,
    P: Permuter,
{
    let interactive = config.interactive && prompter.is_interactive();
    let input = resolve_input(&config.input, interactive, prompter)?;
    let questions = parse_file(&input)?;
    tracing::info!(path = %input.display(), questions = questions.len(), "loaded questions");
    if questions.is_empty() {
        tracing::warn!(path = %input.display(), "no questions found");
    }

    let order = match config.question_order {
        Some(order) => order,
        None if interactive => QuestionOrder::from_shuffle_flag(prompter.yes_no(ASK_SHUFFLE)?),
        None => return Err(CliError::PromptDisabled(ASK_SHUFFLE.to_string())),
    };
    let count = match config.sets {
        Some(0) => return Err(CliError::InvalidSetCount("0".to_string())),
        Some(count) => count,
        None if interactive => prompter.set_count(ASK_SET_COUNT)?,
        None => return Err(CliError::PromptDisabled(ASK_SET_COUNT.to_string())),
    };

    let boilerplate = load_boilerplate_with_retry(&config.boilerplate, interactive, prompter)?;
    // The document may be written elsewhere, so the image is referenced absolutely.
    let image = if config.image.is_file() {
        Some(fs::canonicalize(&config.image).unwrap_or_else(|_| config.image.clone()))
    } else {
        tracing::debug!(path = %config.image.display(), "no set image");
        None
    };

    tracing::info!(sets = count, order = ?order, "generating sets");
    let sets = generate_sets(&questions, count, order, permuter);
    let story = build_story(
        &sets,
        &StoryOptions {
            image,
            summary: config.summary.clone(),
            boilerplate,
        },
    );

    let renderer = config.format.renderer();
    let rendered = renderer.render(&story)?;
    let output = config.output_path(renderer.extension());
    write_output(&output, &rendered)?;
    tracing::info!(path = %output.display(), pages = story.page_count(), "wrote document");

    Ok(Report {
        output,
        sets: count,
        questions: questions.len(),
    })
}

/// Configured input path, or a prompted one when it does not exist.
fn resolve_input<R: BufRead, W: Write>(
    path: &Path,
    interactive: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf> {
    if path.is_file() || !interactive {
        return Ok(path.to_path_buf());
    }
    tracing::debug!(path = %path.display(), "default input missing, asking");
    prompter.path(ASK_INPUT)
}

/// Write the document, creating its parent directory if needed.
fn write_output(path: &Path, rendered: &str) -> Result<()> {
    let write = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write)?;
    }
    fs::write(path, rendered).map_err(write)
}

/// Load the boilerplate, allowing one alternate path if it is missing.
fn load_boilerplate_with_retry<R: BufRead, W: Write>(
    path: &Path,
    interactive: bool,
    prompter: &mut Prompter<R, W>,
) -> Result<Boilerplate> {
    match load_boilerplate(path) {
        Ok(boilerplate) => Ok(boilerplate),
        Err(e) if e.is_not_found() && interactive => {
            tracing::warn!(path = %path.display(), "boilerplate file not found");
            let alternate = prompter.path(ASK_BOILERPLATE)?;
            Ok(load_boilerplate(&alternate)?)
        }
        Err(e) => Err(e.into()),
    }
}
