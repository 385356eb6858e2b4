// src/core/normalizer.rs

/// Anusvāra marker in the ITRANS-like notation the transliterator accepts.
const ANUSVARA: char = 'M';
/// Velar nasal (ङ) in the same notation.
const VELAR_NASAL: char = 'ṅ';

/// Rewrites casual English phonetic spelling into the ITRANS-like
/// notation the transliterator expects, so users can type
/// Google-IME style ("raghuvamsham") without knowing diacritic
/// conventions.
///
/// Ordered rewrite passes, each one left-to-right sweep over the whole
/// string. Matching is case-insensitive; characters no rule touches
/// keep their original case.
///
/// The contract is the net mapping, fixed by the original rule table:
/// aspirate digraphs survive intact (lowercased), `ng` becomes `ṅ`,
/// and any word-final `m` becomes `M` with a preceding a/u/i/o vowel
/// preserved.
pub fn normalize_phonetic(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let pass1 = rewrite_digraphs(input);
    let pass2 = rewrite_velar_nasal(&pass1);
    let pass3 = rewrite_trailing_m(pass2);
    rewrite_word_final_anusvara(&pass3)
}

/// Pass 1: `sh ch kh gh th dh ph bh` pass through as their lowercase
/// selves. Identity rules in ITRANS terms, but they must run as
/// digraphs so a later per-letter stage cannot mis-split them.
fn rewrite_digraphs(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len() {
            let first = chars[i].to_ascii_lowercase();
            let second = chars[i + 1].to_ascii_lowercase();
            if second == 'h' && matches!(first, 's' | 'c' | 'k' | 'g' | 't' | 'd' | 'p' | 'b') {
                out.push(first);
                out.push('h');
                i += 2;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Pass 2: `ng` collapses to the single velar-nasal symbol.
fn rewrite_velar_nasal(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        if i + 1 < chars.len()
            && chars[i].to_ascii_lowercase() == 'n'
            && chars[i + 1].to_ascii_lowercase() == 'g'
        {
            out.push(VELAR_NASAL);
            i += 2;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Pass 3: a bare `m` at the very end of the string is the anusvāra.
fn rewrite_trailing_m(mut input: String) -> String {
    if input.ends_with('m') {
        input.pop();
        input.push(ANUSVARA);
    }
    input
}

/// Pass 4: word-final `am um im om` (boundary = end of string or a
/// non-word character) keep the vowel and turn the `m` into anusvāra.
/// The `m` is matched case-insensitively, so this also re-covers the
/// end-of-string case pass 3 already rewrote; the net result is the
/// same either way.
fn rewrite_word_final_anusvara(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < chars.len() {
        let vowel = chars[i].to_ascii_lowercase();
        let at_boundary = chars.get(i + 2).map_or(true, |c| !is_word_char(*c));
        if matches!(vowel, 'a' | 'u' | 'i' | 'o')
            && i + 1 < chars.len()
            && chars[i + 1].to_ascii_lowercase() == 'm'
            && at_boundary
        {
            out.push(vowel);
            out.push(ANUSVARA);
            i += 2;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

// Word characters as the original's \b saw them: ASCII alphanumerics
// and underscore. Devanagari counts as a boundary.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_phonetic(""), "");
    }

    #[test]
    fn no_matching_pattern_is_identity() {
        assert_eq!(normalize_phonetic("moksha"), "moksha");
        assert_eq!(normalize_phonetic("guru"), "guru");
    }

    #[test]
    fn digraphs_survive_per_letter_splitting() {
        assert_eq!(normalize_phonetic("shiva"), "shiva");
        assert_eq!(normalize_phonetic("bhakti"), "bhakti");
        assert_eq!(normalize_phonetic("khaga"), "khaga");
    }

    #[test]
    fn mixed_case_digraphs_lowercase_where_the_rule_fires() {
        assert_eq!(normalize_phonetic("SHiva"), "shiva");
        assert_eq!(normalize_phonetic("bHakti"), "bhakti");
        // untouched letters keep their case
        assert_eq!(normalize_phonetic("SHivA"), "shivA");
    }

    #[test]
    fn velar_nasal_collapses() {
        assert_eq!(normalize_phonetic("ganga"), "gaṅa");
        assert_eq!(normalize_phonetic("saNGam"), "saṅaM");
    }

    #[test]
    fn word_final_m_becomes_anusvara_with_vowel_preserved() {
        assert_eq!(normalize_phonetic("shlokam"), "shlokaM");
        assert_eq!(normalize_phonetic("ansham"), "anshaM");
        assert_eq!(normalize_phonetic("gurum"), "guruM");
        assert_eq!(normalize_phonetic("harim"), "hariM");
        assert_eq!(normalize_phonetic("om"), "oM");
        assert_eq!(normalize_phonetic("kim"), "kiM");
        assert_eq!(normalize_phonetic("tvam"), "tvaM");
    }

    #[test]
    fn raghuvamsham_ends_with_anusvara() {
        let normalized = normalize_phonetic("raghuvamsham");
        assert_eq!(normalized, "raghuvamshaM");
        assert!(normalized.ends_with(ANUSVARA));
    }

    #[test]
    fn interior_word_boundaries_count() {
        assert_eq!(normalize_phonetic("om shanti"), "oM shanti");
        assert_eq!(normalize_phonetic("gurum,namah"), "guruM,namah");
    }

    #[test]
    fn interior_m_is_untouched() {
        // only word-final m is anusvāra; "vam" mid-word keeps its m
        assert_eq!(normalize_phonetic("ramayana"), "ramayana");
        assert_eq!(normalize_phonetic("kamala"), "kamala");
    }

    #[test]
    fn trailing_m_without_qualifying_vowel_still_rewrites() {
        // consonant before the final m: the bare-m rule alone fires
        assert_eq!(normalize_phonetic("harm"), "harM");
    }

    #[test]
    fn uppercase_final_sequences_normalize() {
        assert_eq!(normalize_phonetic("SHLOKAM"), "shLOKaM");
    }
}
