use std::collections::BTreeMap;

use rand::Rng;

use crate::errors::GenerationError;
use crate::sampling::uniform_int;

/// Placeholder text generator over one corpus per content language.
///
/// A single call slices every corpus at the same character offset and length,
/// so the "translations" of one attribute have correlated shape.
#[derive(Debug, Clone)]
pub struct ContentSynthesizer {
    corpora: Vec<LanguageCorpus>,
    legacy_first_char_drop: bool,
}

#[derive(Debug, Clone)]
struct LanguageCorpus {
    language: String,
    chars: Vec<char>,
}

/// One synthesized text and the language it is tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub text: String,
    pub language: String,
}

impl ContentSynthesizer {
    pub fn new(
        languages: &[String],
        corpus: &BTreeMap<String, String>,
        legacy_first_char_drop: bool,
    ) -> Result<Self, GenerationError> {
        if languages.is_empty() {
            return Err(GenerationError::InvalidConfig(
                "no content languages configured".to_string(),
            ));
        }

        let corpora = languages
            .iter()
            .map(|language| {
                let text = corpus.get(language).ok_or_else(|| {
                    GenerationError::InvalidConfig(format!(
                        "no corpus configured for language '{language}'"
                    ))
                })?;
                if text.chars().all(is_filler) {
                    return Err(GenerationError::InvalidConfig(format!(
                        "corpus for language '{language}' has no words"
                    )));
                }
                Ok(LanguageCorpus {
                    language: language.clone(),
                    chars: text.chars().collect(),
                })
            })
            .collect::<Result<Vec<_>, GenerationError>>()?;

        Ok(Self {
            corpora,
            legacy_first_char_drop,
        })
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.corpora.iter().map(|corpus| corpus.language.as_str())
    }

    /// One text per configured language, in configured order.
    ///
    /// Every text is between `min_len` and `max_len` characters long, never
    /// starts or ends on whitespace or punctuation, and is capitalized.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        min_len: u32,
        max_len: u32,
        rng: &mut R,
    ) -> Vec<LocalizedText> {
        let primary_len = self.corpora.first().map_or(0, |corpus| corpus.chars.len());
        let start = uniform_int(0, (primary_len / 2) as u32, rng) as usize;
        let length = uniform_int(min_len, max_len, rng) as usize;
        let bounds = (min_len.max(1) as usize, max_len as usize);

        self.corpora
            .iter()
            .map(|corpus| {
                let window = corpus.window(start, length, bounds, self.legacy_first_char_drop);
                LocalizedText {
                    text: capitalize(window),
                    language: corpus.language.clone(),
                }
            })
            .collect()
    }
}

impl LanguageCorpus {
    /// Characters of the first usable window at or after `start`, wrapping to
    /// the corpus head when the tail is too short.
    fn window(
        &self,
        start: usize,
        length: usize,
        bounds: (usize, usize),
        drop_first: bool,
    ) -> &[char] {
        let len = self.chars.len();
        let start = start.min(len);
        (start..len)
            .chain(0..start)
            .find_map(|from| self.window_at(from, length, bounds, drop_first))
            .map(|range| &self.chars[range])
            .unwrap_or_default()
    }

    /// Window that begins on the first word character at or after `from`.
    ///
    /// The end prefers `begin + length` and otherwise moves to the nearest
    /// word character that keeps the window inside `bounds`.
    fn window_at(
        &self,
        from: usize,
        length: usize,
        (min_len, max_len): (usize, usize),
        drop_first: bool,
    ) -> Option<std::ops::Range<usize>> {
        let mut begin = self.next_word_char(from)?;
        if drop_first {
            begin = self.next_word_char(begin + 1)?;
        }
        let preferred = begin + length.clamp(min_len, max_len.max(min_len));
        let ends_on_word =
            |end: &usize| *end <= self.chars.len() && !is_filler(self.chars[end - 1]);
        (begin + min_len..=preferred)
            .rev()
            .chain(preferred + 1..=begin + max_len)
            .find(ends_on_word)
            .map(|end| begin..end)
    }

    fn next_word_char(&self, from: usize) -> Option<usize> {
        (from..self.chars.len()).find(|&index| !is_filler(self.chars[index]))
    }
}

fn is_filler(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation()
}

/// Uppercase the first character when that keeps the character count.
fn capitalize(chars: &[char]) -> String {
    let Some((first, rest)) = chars.split_first() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => *first,
    };
    std::iter::once(head).chain(rest.iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    /// Languages and corpora of the shipped sample configuration.
    fn sample_corpora() -> (Vec<String>, BTreeMap<String, String>) {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../configs/sample.toml");
        let content = kgsynth_config::load_config(&path)
            .expect("sample config loads")
            .config
            .content;
        (content.languages, content.corpus)
    }

    fn assert_clean(text: &LocalizedText, min: usize, max: usize) {
        let len = text.text.chars().count();
        assert!(
            (min..=max).contains(&len),
            "{} text of length {len}: {:?}",
            text.language,
            text.text
        );
        let first = text.text.chars().next().expect("non-empty");
        let last = text.text.chars().last().expect("non-empty");
        assert!(!is_filler(first) && !is_filler(last), "{:?}", text.text);
    }

    #[test]
    fn sample_corpora_stay_within_bounds() {
        let (languages, corpus) = sample_corpora();
        let synthesizer = ContentSynthesizer::new(&languages, &corpus, false).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        for _ in 0..2000 {
            let texts = synthesizer.synthesize(10, 100, &mut rng);
            let tags: Vec<&str> = texts.iter().map(|t| t.language.as_str()).collect();
            assert_eq!(tags, vec!["en", "de", "fr"]);
            for text in &texts {
                assert_clean(text, 10, 100);
            }
        }
        for _ in 0..200 {
            for text in &synthesizer.synthesize(100, 1000, &mut rng) {
                assert_clean(text, 100, 1000);
            }
        }
    }

    #[test]
    fn exact_length_is_honoured_across_word_breaks() {
        let (languages, corpus) = sample_corpora();
        let synthesizer = ContentSynthesizer::new(&languages, &corpus, false).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(21);

        for _ in 0..500 {
            for text in &synthesizer.synthesize(12, 12, &mut rng) {
                assert_clean(text, 12, 12);
            }
        }
    }

    #[test]
    fn short_translation_corpus_is_never_empty() {
        let languages = vec!["en".to_string(), "de".to_string()];
        let corpus = BTreeMap::from([
            ("en".to_string(), "lorem ipsum dolor sit amet ".repeat(40)),
            ("de".to_string(), "kurzer Text hier".to_string()),
        ]);
        let synthesizer = ContentSynthesizer::new(&languages, &corpus, false).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..400 {
            let texts = synthesizer.synthesize(4, 10, &mut rng);
            assert_clean(&texts[0], 4, 10);
            assert_clean(&texts[1], 4, 10);
        }
    }

    #[test]
    fn translations_share_offset_and_length() {
        let languages = vec!["en".to_string(), "xx".to_string()];
        let corpus = BTreeMap::from([
            ("en".to_string(), "abcdefghij".repeat(100)),
            ("xx".to_string(), "ABCDEFGHIJ".repeat(100)),
        ]);
        let synthesizer = ContentSynthesizer::new(&languages, &corpus, false).expect("valid");
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let texts = synthesizer.synthesize(20, 40, &mut rng);
        assert_eq!(texts[0].text.to_uppercase(), texts[1].text);
    }

    #[test]
    fn legacy_mode_drops_first_character_and_keeps_bounds() {
        let languages = vec!["en".to_string()];
        let corpus = BTreeMap::from([("en".to_string(), "abcdefghij".repeat(50))]);
        let modern = ContentSynthesizer::new(&languages, &corpus, false).expect("valid");
        let legacy = ContentSynthesizer::new(&languages, &corpus, true).expect("valid");

        for seed in 0..20 {
            let text = modern.synthesize(5, 5, &mut ChaCha8Rng::seed_from_u64(seed));
            let dropped = legacy.synthesize(5, 5, &mut ChaCha8Rng::seed_from_u64(seed));
            assert_clean(&dropped[0], 5, 5);
            let shifted: String = text[0].text.to_lowercase().chars().skip(1).collect();
            assert!(dropped[0].text.to_lowercase().starts_with(&shifted));
        }
    }

    #[test]
    fn capitalize_keeps_character_count() {
        let chars = |text: &str| text.chars().collect::<Vec<char>>();
        assert_eq!(capitalize(&chars("lorem ipsum")), "Lorem ipsum");
        assert_eq!(capitalize(&chars("élan vital")), "Élan vital");
        assert_eq!(capitalize(&chars("ßtraße")), "ßtraße");
        assert_eq!(capitalize(&[]), "");
    }

    #[test]
    fn missing_corpus_is_a_configuration_error() {
        let languages = vec!["en".to_string(), "de".to_string()];
        let corpus = BTreeMap::from([("en".to_string(), "text".to_string())]);
        let result = ContentSynthesizer::new(&languages, &corpus, false);
        assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
    }

    #[test]
    fn punctuation_only_corpus_is_a_configuration_error() {
        let languages = vec!["en".to_string()];
        let corpus = BTreeMap::from([("en".to_string(), " ... , ".to_string())]);
        let result = ContentSynthesizer::new(&languages, &corpus, false);
        assert!(matches!(result, Err(GenerationError::InvalidConfig(_))));
    }
}
