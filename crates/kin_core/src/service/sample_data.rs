//! Synthetic field values for sample records.
//!
//! Every generator takes the caller's RNG so seeded runs are reproducible.

use chrono::{Duration, NaiveDate};
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use fake::Fake;
use rand::Rng;

/// Due dates fall within this many days from today, inclusive.
pub const DUE_DATE_WINDOW_DAYS: i64 = 30;

/// One lorem word in title case, e.g. `Voluptas`.
pub fn category_name<G: Rng>(rng: &mut G) -> String {
    let word: String = Word().fake_with_rng(rng);
    title_case(&word)
}

/// Short sentence (three to five words) without the trailing period.
pub fn task_title<G: Rng>(rng: &mut G) -> String {
    let sentence: String = Sentence(3..6).fake_with_rng(rng);
    strip_period(&sentence)
}

/// Two-sentence paragraph.
pub fn task_description<G: Rng>(rng: &mut G) -> String {
    Paragraph(2..3).fake_with_rng(rng)
}

/// Short sentence (four to six words) without the trailing period.
pub fn subtask_title<G: Rng>(rng: &mut G) -> String {
    let sentence: String = Sentence(4..7).fake_with_rng(rng);
    strip_period(&sentence)
}

/// Three-sentence paragraph.
pub fn note_content<G: Rng>(rng: &mut G) -> String {
    Paragraph(3..4).fake_with_rng(rng)
}

/// Uniform date in `[today, today + DUE_DATE_WINDOW_DAYS]`.
pub fn due_date<G: Rng>(rng: &mut G, today: NaiveDate) -> NaiveDate {
    today + Duration::days(rng.gen_range(0..=DUE_DATE_WINDOW_DAYS))
}

/// Uppercases the first character and lowercases the rest.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn strip_period(sentence: &str) -> String {
    let trimmed = sentence.trim().trim_end_matches('.');
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        category_name, due_date, note_content, strip_period, task_title, title_case,
        DUE_DATE_WINDOW_DAYS,
    };
    use chrono::{Duration, NaiveDate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn title_case_normalizes_single_words() {
        assert_eq!(title_case("voluptas"), "Voluptas");
        assert_eq!(title_case("QUIA"), "Quia");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn strip_period_drops_trailing_dot_and_capitalizes() {
        assert_eq!(strip_period("sint aut quia est."), "Sint aut quia est");
        assert_eq!(strip_period("Already fine"), "Already fine");
    }

    #[test]
    fn category_name_is_single_title_cased_word() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let name = category_name(&mut rng);
            assert!(!name.is_empty());
            assert!(!name.contains(char::is_whitespace), "`{name}` is not one word");
            assert_eq!(name, title_case(&name));
        }
    }

    #[test]
    fn task_title_has_no_trailing_period() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let title = task_title(&mut rng);
            assert!(!title.is_empty());
            assert!(!title.ends_with('.'));
        }
    }

    #[test]
    fn note_content_is_not_empty() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!note_content(&mut rng).trim().is_empty());
    }

    #[test]
    fn due_date_stays_within_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = NaiveDate::from_ymd_opt(2024, 2, 20).expect("valid date");
        let last = today + Duration::days(DUE_DATE_WINDOW_DAYS);
        for _ in 0..200 {
            let date = due_date(&mut rng, today);
            assert!(date >= today && date <= last, "{date} outside window");
        }
    }
}
