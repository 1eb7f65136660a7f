use crate::results::*;

/// Lowercases a single letter. Letters whose lowercase form spans several characters keep the
/// first one.
fn fold_case(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}

/// Lowercases a word one letter at a time, so that it keeps one letter per letter of the input.
pub(crate) fn fold_word(word: &str) -> String {
    word.chars().map(fold_case).collect()
}

/// Determines the result of the given `guess` when applied to the given `objective`.
///
/// Letters are compared case-insensitively, and every letter of the guess gets a result: a letter
/// is in the word if it appears anywhere in the objective, and in the correct position if the
/// objective has the same letter at the same index. Repeated letters are not counted, so each
/// copy of a letter that occurs in the objective is marked as in the word.
///
/// The guess is expected to be as long as the objective. This is not checked here; a letter past
/// the end of the objective is never in the correct position.
///
/// ```
/// use wordle_game::*;
///
/// let attempt = evaluate("apple", "appla");
///
/// assert!(attempt.letters[..4].iter().all(|lr| lr.in_correct_position && lr.in_word));
/// assert!(attempt.letters[4].in_word);
/// assert!(!attempt.letters[4].in_correct_position);
/// ```
pub fn evaluate(objective: &str, guess: &str) -> Attempt {
    let objective: Vec<char> = objective.chars().map(fold_case).collect();
    Attempt {
        letters: guess
            .chars()
            .enumerate()
            .map(|(index, letter)| {
                let folded = fold_case(letter);
                LetterResult {
                    letter,
                    in_correct_position: objective.get(index) == Some(&folded),
                    in_word: objective.contains(&folded),
                }
            })
            .collect(),
    }
}

/// Returns `true` iff the guess is the objective word, ignoring case.
///
/// Case is folded the same way as in [`evaluate`], so a guess is complete exactly when every
/// letter is in its correct position.
pub fn is_complete(objective: &str, guess: &str) -> bool {
    fold_word(guess) == fold_word(objective)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_lowercases() {
        assert_eq!(fold_case('A'), 'a');
        assert_eq!(fold_case('a'), 'a');
        assert_eq!(fold_case('Ö'), 'ö');
    }

    #[test]
    fn fold_word_keeps_one_letter_per_letter() {
        assert_eq!(fold_word("İABC"), "iabc");
        assert_eq!(fold_word("İABC").chars().count(), 4);
    }

    #[test]
    fn is_complete_agrees_with_evaluate() {
        let pairs = [
            ("iabc", "İABC"),
            ("i\u{307}abc", "İabc"),
            ("apple", "APPLE"),
        ];
        for (objective, guess) in pairs {
            assert_eq!(
                is_complete(objective, guess),
                evaluate(objective, guess).is_complete(),
                "{} vs {}",
                objective,
                guess
            );
        }
        assert!(is_complete("iabc", "İABC"));
    }

    #[test]
    fn evaluate_counts_chars_not_bytes() {
        let attempt = evaluate("größe", "GRÖßE");

        assert_eq!(attempt.len(), 5);
        assert!(attempt.is_complete());
    }

    #[test]
    fn evaluate_longer_guess_is_never_correct_past_the_end() {
        let attempt = evaluate("abc", "abcc");

        assert_eq!(attempt.len(), 4);
        assert!(attempt.letters[3].in_word);
        assert!(!attempt.letters[3].in_correct_position);
    }
}
