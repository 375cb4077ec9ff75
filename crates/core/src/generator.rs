//! Question generation: distractor selection and option ordering.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Question, VocabularyEntry, OPTION_COUNT};

/// Distractors shown next to the correct definition.
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Option text used when the pool cannot supply enough real distractors.
///
/// A published constant so front ends can recognize and grey out the slot.
pub const NO_OPTION_PLACEHOLDER: &str = "(no option available)";

/// Builds a multiple-choice question for `target` out of `candidates`.
///
/// Distractors are drawn uniformly without replacement from the candidates
/// whose term differs from the target's. Definition equality is deliberately
/// not a filter: true synonyms stay eligible, so two options may carry the
/// same text (the correct index is tracked through the shuffle, so grading
/// is unaffected). When fewer than two real distractors exist, the remaining
/// slots are filled with [`NO_OPTION_PLACEHOLDER`].
///
/// # Examples
///
/// ```
/// use quiz_core::generator::generate;
/// use quiz_core::model::VocabularyEntry;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let pool = vec![
///     VocabularyEntry::new("dog", "犬", 1).unwrap(),
///     VocabularyEntry::new("cat", "猫", 1).unwrap(),
///     VocabularyEntry::new("bird", "鳥", 1).unwrap(),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
/// let question = generate(&pool[0], &pool, &mut rng);
/// assert_eq!(question.options().len(), 3);
/// assert_eq!(question.options()[question.correct_index()], "犬");
/// ```
pub fn generate(
    target: &VocabularyEntry,
    candidates: &[VocabularyEntry],
    rng: &mut impl Rng,
) -> Question {
    let mut eligible: Vec<&VocabularyEntry> = candidates
        .iter()
        .filter(|entry| entry.term() != target.term())
        .collect();

    // Truncated Fisher-Yates: a uniform 2-element pick without replacement.
    let (picked, _) = eligible.partial_shuffle(rng, DISTRACTOR_COUNT);

    let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
    options.push(target.definition().to_owned());
    options.extend(picked.iter().map(|entry| entry.definition().to_owned()));
    while options.len() < OPTION_COUNT {
        options.push(NO_OPTION_PLACEHOLDER.to_owned());
    }

    // Fisher-Yates over the options, tracking where the correct one (index 0
    // before the shuffle) lands. Tracking by position rather than by text
    // keeps grading sound when a distractor duplicates the definition.
    let mut correct_index = 0usize;
    for i in (1..options.len()).rev() {
        let j = rng.random_range(0..=i);
        options.swap(i, j);
        if correct_index == i {
            correct_index = j;
        } else if correct_index == j {
            correct_index = i;
        }
    }

    Question::from_parts(target.clone(), options, correct_index)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build_entry(term: &str, definition: &str) -> VocabularyEntry {
        VocabularyEntry::new(term, definition, 1).unwrap()
    }

    fn build_pool() -> Vec<VocabularyEntry> {
        vec![
            build_entry("dog", "犬"),
            build_entry("cat", "猫"),
            build_entry("bird", "鳥"),
            build_entry("fish", "魚"),
        ]
    }

    #[test]
    fn question_is_well_formed_across_seeds() {
        let pool = build_pool();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = generate(&pool[0], &pool, &mut rng);

            assert_eq!(question.options().len(), OPTION_COUNT);
            assert!(question.correct_index() < OPTION_COUNT);
            assert_eq!(question.options()[question.correct_index()], "犬");
        }
    }

    #[test]
    fn no_distractor_shares_the_target_term() {
        let pool = build_pool();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = generate(&pool[0], &pool, &mut rng);

            for (index, option) in question.options().iter().enumerate() {
                if index == question.correct_index() {
                    continue;
                }
                // "犬" belongs to the target only; a distractor carrying it
                // would have to come from the dog entry itself.
                assert_ne!(option, "犬");
            }
        }
    }

    #[test]
    fn distractors_are_distinct_entries() {
        let pool = build_pool();
        let mut rng = StdRng::seed_from_u64(3);
        let question = generate(&pool[0], &pool, &mut rng);

        let mut distractors: Vec<&String> = question
            .options()
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != question.correct_index())
            .map(|(_, option)| option)
            .collect();
        distractors.sort();
        distractors.dedup();
        assert_eq!(distractors.len(), DISTRACTOR_COUNT);
    }

    #[test]
    fn single_candidate_fills_with_placeholder() {
        let pool = vec![build_entry("dog", "犬"), build_entry("cat", "猫")];
        let mut rng = StdRng::seed_from_u64(1);
        let question = generate(&pool[0], &pool, &mut rng);

        assert_eq!(question.options().len(), OPTION_COUNT);
        let placeholders = question
            .options()
            .iter()
            .filter(|option| *option == NO_OPTION_PLACEHOLDER)
            .count();
        assert_eq!(placeholders, 1);
        assert!(question.options().contains(&"猫".to_string()));
    }

    #[test]
    fn lone_target_gets_two_placeholders() {
        let pool = vec![build_entry("dog", "犬")];
        let mut rng = StdRng::seed_from_u64(1);
        let question = generate(&pool[0], &pool, &mut rng);

        let placeholders = question
            .options()
            .iter()
            .filter(|option| *option == NO_OPTION_PLACEHOLDER)
            .count();
        assert_eq!(placeholders, 2);
        assert_eq!(question.options()[question.correct_index()], "犬");
    }

    #[test]
    fn synonym_definitions_stay_eligible_and_grading_holds() {
        // "hound" is a true synonym of the target: same definition text,
        // different term. It must not be filtered out, and the correct
        // index must still point at the target's own option.
        let pool = vec![
            build_entry("dog", "犬"),
            build_entry("hound", "犬"),
            build_entry("cat", "猫"),
        ];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = generate(&pool[0], &pool, &mut rng);

            assert_eq!(question.options()[question.correct_index()], "犬");
            assert_eq!(question.options().len(), OPTION_COUNT);
        }
    }

    #[test]
    fn same_seed_reproduces_the_question() {
        let pool = build_pool();
        let first = generate(&pool[0], &pool, &mut StdRng::seed_from_u64(11));
        let second = generate(&pool[0], &pool, &mut StdRng::seed_from_u64(11));
        assert_eq!(first, second);
    }
}
