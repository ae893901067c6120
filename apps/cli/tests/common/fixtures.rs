//! Test fixtures and factory functions for creating test data.

pub const SAMPLE_BOILERPLATE: &str =
    "<right>[B]Name:[/B] ____________</right>\nAnswer all questions.\n";

/// Generate MCQ source content.
///
/// # Arguments
/// * `num_questions` - Number of questions to generate
/// * `num_options` - Options per question, labelled from `a`
pub fn sample_mcq_content(num_questions: usize, num_options: usize) -> String {
    (1..=num_questions)
        .map(|q| {
            let options: String = (0..num_options)
                .map(|o| {
                    let label = (b'a' + o as u8) as char;
                    format!("{}. Answer {}{}\n", label, q, label)
                })
                .collect();
            format!("Q{}. Question {}?\n{}", q, q, options)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
