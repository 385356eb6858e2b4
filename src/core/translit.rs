// src/core/translit.rs
use thiserror::Error;

const HALANTA: char = '\u{094d}';

#[derive(Debug, Error)]
pub enum TranslitError {
    #[error("transliteration engine rejected input: {0}")]
    EngineFailure(String),
}

/// The transliteration capability the search engine depends on.
/// Injected so tests can substitute a deterministic (or failing) fake
/// for the rule-based engine.
pub trait Transliterator {
    fn transliterate(&self, romanized: &str) -> Result<String, TranslitError>;
}

/// Preview call site: an engine failure renders as no preview.
pub fn to_devanagari_preview(engine: &dyn Transliterator, romanized: &str) -> String {
    engine.transliterate(romanized).unwrap_or_default()
}

/// Search-term call site: an engine failure falls back to the raw
/// input so the catalog scan still has something to match.
pub fn to_devanagari_or_raw(engine: &dyn Transliterator, romanized: &str) -> String {
    match engine.transliterate(romanized) {
        Ok(devanagari) => devanagari,
        Err(_) => romanized.to_string(),
    }
}

/// Rule-based ITRANS-like to Devanagari converter.
///
/// Walks the roman string once, tracking whether the previous symbol
/// was a consonant: consonants are emitted with a halanta that the
/// following vowel consumes (the inherent `a` removes it, other vowels
/// replace it with their matra). A halanta left between two consonants
/// forms the conjunct, and one left at the end of the string keeps a
/// final bare consonant (`sham` → शम्). Characters outside the rule
/// table pass through unchanged.
pub struct ItransEngine;

impl ItransEngine {
    pub fn new() -> Self {
        Self
    }

    fn convert(&self, roman: &str) -> String {
        let mut result = String::new();
        let mut chars = roman.chars().peekable();
        let mut last_was_consonant = false;

        while let Some(c) = chars.next() {
            match c {
                'a' => {
                    let (independent, matra) = match chars.peek() {
                        Some('a') => {
                            chars.next();
                            ('आ', Some('ा'))
                        }
                        Some('i') => {
                            chars.next();
                            ('ऐ', Some('ै'))
                        }
                        Some('u') => {
                            chars.next();
                            ('औ', Some('ौ'))
                        }
                        _ => ('अ', None),
                    };
                    self.push_vowel(&mut result, last_was_consonant, independent, matra);
                    last_was_consonant = false;
                }
                'i' => {
                    let long = chars.peek() == Some(&'i');
                    if long {
                        chars.next();
                    }
                    let (independent, matra) = if long {
                        ('ई', Some('ी'))
                    } else {
                        ('इ', Some('ि'))
                    };
                    self.push_vowel(&mut result, last_was_consonant, independent, matra);
                    last_was_consonant = false;
                }
                'u' => {
                    let long = chars.peek() == Some(&'u');
                    if long {
                        chars.next();
                    }
                    let (independent, matra) = if long {
                        ('ऊ', Some('ू'))
                    } else {
                        ('उ', Some('ु'))
                    };
                    self.push_vowel(&mut result, last_was_consonant, independent, matra);
                    last_was_consonant = false;
                }
                'A' => {
                    self.push_vowel(&mut result, last_was_consonant, 'आ', Some('ा'));
                    last_was_consonant = false;
                }
                'I' => {
                    self.push_vowel(&mut result, last_was_consonant, 'ई', Some('ी'));
                    last_was_consonant = false;
                }
                'U' => {
                    self.push_vowel(&mut result, last_was_consonant, 'ऊ', Some('ू'));
                    last_was_consonant = false;
                }
                'e' => {
                    self.push_vowel(&mut result, last_was_consonant, 'ए', Some('े'));
                    last_was_consonant = false;
                }
                'o' => {
                    self.push_vowel(&mut result, last_was_consonant, 'ओ', Some('ो'));
                    last_was_consonant = false;
                }
                'M' => {
                    result.push('ं');
                    last_was_consonant = false;
                }
                'H' => {
                    result.push('ः');
                    last_was_consonant = false;
                }
                'k' | 'g' | 'c' | 'j' | 'T' | 'D' | 'N' | 't' | 'd' | 'n' | 'p' | 'b' | 'm'
                | 'y' | 'r' | 'l' | 'v' | 'w' | 's' | 'S' | 'h' | 'ṅ' => {
                    let mut cons = c.to_string();
                    if chars.peek() == Some(&'h')
                        && matches!(c, 'k' | 'g' | 'c' | 'j' | 'T' | 'D' | 't' | 'd' | 'p' | 'b' | 's' | 'S')
                    {
                        cons.push('h');
                        chars.next();
                        // chh is the aspirated palatal
                        if cons == "ch" && chars.peek() == Some(&'h') {
                            cons.push('h');
                            chars.next();
                        }
                    }

                    if let Some(dev) = self.consonant(&cons) {
                        result.push(dev);
                        result.push(HALANTA);
                        last_was_consonant = true;
                    } else {
                        if result.ends_with(HALANTA) {
                            result.pop();
                        }
                        result.push_str(&cons);
                        last_was_consonant = false;
                    }
                }
                _ => {
                    if result.ends_with(HALANTA) {
                        result.pop();
                    }
                    result.push(c);
                    last_was_consonant = false;
                }
            }
        }

        result
    }

    fn push_vowel(
        &self,
        result: &mut String,
        after_consonant: bool,
        independent: char,
        matra: Option<char>,
    ) {
        if after_consonant {
            if result.ends_with(HALANTA) {
                result.pop();
            }
            // the inherent `a` has no matra
            if let Some(m) = matra {
                result.push(m);
            }
        } else {
            result.push(independent);
        }
    }

    fn consonant(&self, s: &str) -> Option<char> {
        match s {
            "k" => Some('क'),
            "kh" => Some('ख'),
            "g" => Some('ग'),
            "gh" => Some('घ'),
            "ṅ" => Some('ङ'),
            "c" | "ch" => Some('च'),
            "chh" => Some('छ'),
            "j" => Some('ज'),
            "jh" => Some('झ'),
            "T" => Some('ट'),
            "Th" => Some('ठ'),
            "D" => Some('ड'),
            "Dh" => Some('ढ'),
            "N" => Some('ण'),
            "t" => Some('त'),
            "th" => Some('थ'),
            "d" => Some('द'),
            "dh" => Some('ध'),
            "n" => Some('न'),
            "p" => Some('प'),
            "ph" => Some('फ'),
            "b" => Some('ब'),
            "bh" => Some('भ'),
            "m" => Some('म'),
            "y" => Some('य'),
            "r" => Some('र'),
            "l" => Some('ल'),
            "v" | "w" => Some('व'),
            "s" => Some('स'),
            "sh" => Some('श'),
            "Sh" => Some('ष'),
            "h" => Some('ह'),
            _ => None,
        }
    }
}

impl Default for ItransEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator for ItransEngine {
    fn transliterate(&self, romanized: &str) -> Result<String, TranslitError> {
        Ok(self.convert(romanized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(s: &str) -> String {
        ItransEngine::new().transliterate(s).unwrap()
    }

    #[test]
    fn simple_syllables() {
        assert_eq!(convert("raghu"), "रघु");
        assert_eq!(convert("mama"), "मम");
        assert_eq!(convert("guru"), "गुरु");
    }

    #[test]
    fn conjuncts_keep_the_halanta() {
        assert_eq!(convert("shloka"), "श्लोक");
        assert_eq!(convert("krama"), "क्रम");
    }

    #[test]
    fn final_bare_consonant_keeps_the_halanta() {
        assert_eq!(convert("sham"), "शम्");
        assert_eq!(convert("raghuvaMsham"), "रघुवंशम्");
    }

    #[test]
    fn anusvara_and_visarga_marks() {
        assert_eq!(convert("shlokaM"), "श्लोकं");
        assert_eq!(convert("namaH"), "नमः");
    }

    #[test]
    fn long_vowels_and_diphthongs() {
        assert_eq!(convert("maataa"), "माता");
        assert_eq!(convert("mAtA"), "माता");
        assert_eq!(convert("gauri"), "गौरि");
        assert_eq!(convert("aikya"), "ऐक्य");
        assert_eq!(convert("viiNA"), "वीणा");
    }

    #[test]
    fn independent_vowels_open_a_word() {
        assert_eq!(convert("atra"), "अत्र");
        assert_eq!(convert("iha"), "इह");
        assert_eq!(convert("eva"), "एव");
    }

    #[test]
    fn retroflex_series_is_case_sensitive() {
        assert_eq!(convert("Tiikaa"), "टीका");
        assert_eq!(convert("gaNa"), "गण");
        assert_eq!(convert("ShaT"), "षट्");
    }

    #[test]
    fn velar_nasal_symbol_from_the_normalizer() {
        assert_eq!(convert("gaṅgaa"), "गङ्गा");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(convert("zzz"), "zzz");
        assert_eq!(convert(""), "");
    }

    #[test]
    fn preview_fallback_is_empty_on_failure() {
        struct Failing;
        impl Transliterator for Failing {
            fn transliterate(&self, _: &str) -> Result<String, TranslitError> {
                Err(TranslitError::EngineFailure("boom".into()))
            }
        }
        assert_eq!(to_devanagari_preview(&Failing, "raghu"), "");
        assert_eq!(to_devanagari_or_raw(&Failing, "raghu"), "raghu");
    }
}
