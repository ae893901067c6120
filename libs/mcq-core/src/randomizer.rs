//! Option and question-order randomization.
//!
//! Every set is derived from the parsed questions, which are never mutated,
//! so N sets are N independent shuffles rather than one cumulative one.

use crate::types::{McqOption, Question, QuestionSet};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Source of permutations used by the randomizer.
pub trait Permuter {
    /// Reorder `items` in place.
    fn permute<T>(&mut self, items: &mut [T]);
}

/// Uniform Fisher-Yates shuffle backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomPermuter<R> {
    rng: R,
}

impl<R: Rng> RandomPermuter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPermuter<StdRng> {
    /// Permuter seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Permuter for RandomPermuter<R> {
    fn permute<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Whether question order is shuffled within each set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionOrder {
    #[default]
    Original,
    Shuffled,
}

impl QuestionOrder {
    pub fn from_shuffle_flag(shuffle: bool) -> Self {
        if shuffle {
            Self::Shuffled
        } else {
            Self::Original
        }
    }
}

/// Shuffle a question's option texts and pair them with its labels sorted
/// ascending. The source question is left untouched.
pub fn shuffle_options<P: Permuter>(question: &Question, permuter: &mut P) -> Question {
    let mut labels = question.labels();
    labels.sort_unstable();

    let mut texts: Vec<String> = question.options.iter().map(|o| o.text.clone()).collect();
    permuter.permute(&mut texts);

    Question {
        position: question.position,
        number: question.number,
        text: question.text.clone(),
        options: labels
            .into_iter()
            .zip(texts)
            .map(|(label, text)| McqOption { label, text })
            .collect(),
    }
}

/// Shuffle the options of every question, keeping question order.
pub fn randomize<P: Permuter>(questions: &[Question], permuter: &mut P) -> Vec<Question> {
    questions
        .iter()
        .map(|q| shuffle_options(q, permuter))
        .collect()
}

/// Generate `count` independent sets numbered from 1.
pub fn generate_sets<P: Permuter>(
    questions: &[Question],
    count: usize,
    order: QuestionOrder,
    permuter: &mut P,
) -> Vec<QuestionSet> {
    (1..=count)
        .map(|number| {
            let mut shuffled = randomize(questions, permuter);
            if order == QuestionOrder::Shuffled {
                permuter.permute(&mut shuffled);
            }
            tracing::debug!(set = number, questions = shuffled.len(), "generated set");
            QuestionSet {
                number,
                questions: shuffled,
            }
        })
        .collect()
}
