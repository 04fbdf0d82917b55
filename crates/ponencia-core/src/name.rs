//! Signature normalisation for ponente matching.
//!
//! Converts a raw author signature as it appears in a decision
//! ("REYES , J.B.L, Acting C.J.", "AVANCEÑA, J.", "Ynares_Santiago") into a
//! comparable key ("reyes, j.b.l.", "avancena", "ynares-santiago"). Registry
//! surnames and aliases are passed through the same function, so matching is
//! plain string equality on keys.
//!
//! # Algorithm
//!
//! 1. Remove asterisk markers (`*`, `[*]`, `**`).
//! 2. Transliterate to ASCII (NFKD, combining marks dropped) and lowercase.
//! 3. Drop apostrophes; collapse underscores and spaced hyphens to a single `-`.
//! 4. Split into words on anything that is not `[a-z0-9-]`.
//! 5. Strip role designations (`J.`, `JJ.`, `C.J.`, `Justice`, `Chief Justice`,
//!    optionally preceded by `Acting`/`Actg.`). Roles before the name are
//!    dropped; the first role after the name ends the signature.
//! 6. Render: name words space-separated, initials as `, x.y.`, `jr`/`sr`
//!    suffixes as ` jr.`.
//! 7. Apply the known-variant rewrite table (first match wins).
//!
//! The function is total and idempotent: every rendered key re-tokenizes to
//! the same words, and every rewrite target is a fixed point.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static ASTERISKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[?\*+\]?").expect("valid asterisk regex"));

static HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]*[-_][\s_-]*").expect("valid hyphen regex"));

static WORD_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").expect("valid word split regex"));

const MODIFIERS: &[&str] = &["acting", "actg", "act"];
const SUFFIXES: &[&str] = &["jr", "sr"];

/// Normalise a raw signature into a lookup key.
///
/// Empty, whitespace-only, and role-only inputs ("J.", "Acting C.J.") yield
/// an empty key, which callers treat as "no signature".
pub fn normalize(raw: &str) -> String {
    let unmarked = ASTERISKS.replace_all(raw, "");
    let lower = transliterate(&unmarked)
        .to_ascii_lowercase()
        .replace('\'', "");
    let hyphenated = HYPHENS.replace_all(&lower, "-");
    let words: Vec<&str> = WORD_SPLIT
        .split(&hyphenated)
        .map(|w| w.trim_matches('-'))
        .filter(|w| !w.is_empty())
        .collect();
    let kept = strip_roles(&words);
    rewrite(render(&kept))
}

/// Map extended Latin characters to their ASCII base form.
///
/// Characters with no ASCII decomposition are dropped.
pub fn transliterate(s: &str) -> String {
    s.nfkd().filter(char::is_ascii).collect()
}

// ── Role stripping ──

fn is_initial(word: &str) -> bool {
    word.len() == 1 && word.as_bytes()[0].is_ascii_alphabetic()
}

fn is_suffix(word: &str) -> bool {
    SUFFIXES.contains(&word)
}

fn is_name(word: &str) -> bool {
    !is_initial(word) && !is_suffix(word)
}

/// A lone `j` is a role unless it opens a run of initials ("j. b. l.").
fn is_role_j(words: &[&str], k: usize) -> bool {
    if words.get(k) != Some(&"j") {
        return false;
    }
    match words.get(k + 1) {
        Some(next) => !(is_initial(next) && role_at(words, k + 1).is_none()),
        None => true,
    }
}

/// Number of words taken by a role designation starting at `i`, if any.
fn role_at(words: &[&str], i: usize) -> Option<usize> {
    let modifier = usize::from(MODIFIERS.contains(words.get(i)?));
    let at = i + modifier;
    let core = match (words.get(at).copied(), words.get(at + 1).copied()) {
        (Some("chief" | "associate"), Some("justice")) => 2,
        (Some("justice" | "cj" | "jj"), _) => 1,
        (Some("c"), Some("j")) if is_role_j(words, at + 1) => 2,
        (Some("j"), _) if is_role_j(words, at) => 1,
        _ => 0,
    };
    match modifier + core {
        0 => None,
        n => Some(n),
    }
}

fn strip_roles<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut kept: Vec<&str> = Vec::with_capacity(words.len());
    let mut i = 0;
    while i < words.len() {
        if let Some(len) = role_at(words, i) {
            if kept.iter().any(|w| is_name(w)) {
                break;
            }
            i += len;
            continue;
        }
        kept.push(words[i]);
        i += 1;
    }
    kept
}

// ── Rendering ──

#[derive(Clone, Copy, PartialEq)]
enum Last {
    Nothing,
    Name,
    Initial,
    Suffix,
}

fn render(words: &[&str]) -> String {
    let mut key = String::new();
    let mut last = Last::Nothing;
    for &word in words {
        if is_initial(word) {
            if matches!(last, Last::Name | Last::Suffix) {
                key.push_str(", ");
            }
            key.push_str(word);
            key.push('.');
            last = Last::Initial;
        } else {
            if last != Last::Nothing {
                key.push(' ');
            }
            key.push_str(word);
            if is_suffix(word) {
                key.push('.');
                last = Last::Suffix;
            } else {
                last = Last::Name;
            }
        }
    }
    key
}

// ── Known variants ──

/// A deterministic whole-key rewrite for a recurring spelling variant.
pub struct Rewrite {
    pattern: Regex,
    canonical: &'static str,
}

impl Rewrite {
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    pub fn matches(&self, key: &str) -> bool {
        self.pattern.is_match(key)
    }
}

/// Ordered variant table: compound surnames written with spaces, OCR
/// misspellings that recur across the corpus, and surnames signed with
/// trailing initials or suffixes.
static REWRITES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    [
        (r"^avan?ce[na]a\b", "avancena"),
        (r"^gonzaga[- ]reyes\b", "gonzaga-reyes"),
        (r"^melencio[- ]her", "melencio-herrera"),
        (r"^conce(?:pc|cp)ion jr\b", "concepcion jr."),
        (r"gri[nr]o[- ]a?quino", "grino-aquino"),
        (r"carpio[- ]morales", "carpio-morales"),
        (r"ynares[- ]san?tiago", "ynares-santiago"),
        (r"chico[- ]nazario", "chico-nazario"),
        (r"leonardo[- ]de[- ]castro", "leonardo-de castro"),
        (r"austria[- ]martinez", "austria-martinez"),
        (r"perlas[- ]bernabe", "perlas-bernabe"),
        (r"^sandoval[- ]gutierrez", "sandoval-gutierrez"),
        (r"^bengzon[,\s]+j\W+p\W+", "bengzon"),
        (r"^teehankee", "teehankee"),
        (r"^callejo", "callejo"),
        (r"^makasiar", "makasiar"),
        (r"^brion", "brion"),
        (r"^hermosisima", "hermosisima"),
        (r"^caguioa", "caguioa"),
        (r"^francisco", "francisco"),
        (r"^cruz\.?$", "cruz"),
        (r"^yulo\.?$", "yulo"),
        (r"^zalameda", "zalameda"),
        (r"^zaldivar", "zaldivar"),
        (r"^j\.b\.l\. reyes$", "reyes, j.b.l."),
        (r"^a\. reyes jr\.$", "reyes, a. jr."),
        (r"^del[- ]castillo\b", "del castillo"),
        (r"^bautista[- ]a[nu]gelo\b", "bautista angelo"),
        (r"^bellosi?illo\b", "bellosillo"),
        (r"^ma?kalintal\b", "makalintal"),
        (r"^v[il]tug\b", "vitug"),
        (r"^v[il]llamor\b", "villamor"),
        (r"^padilll?a\b", "padilla"),
        (r"^(?:willl?ard|wlllard)\b", "willard"),
        (r"^arr?ell?ano\b", "arellano"),
        (r"^villa[- ]?real\b", "villa-real"),
        (r"^gaerlan, s\.$", "gaerlan"),
        (r"^pablo, m\.$", "pablo"),
        (r"^horrilleno, m\.$", "horrilleno"),
        (r"^diokno, m\.$", "diokno"),
    ]
    .into_iter()
    .map(|(pattern, canonical)| Rewrite {
        pattern: Regex::new(pattern).expect("valid rewrite regex"),
        canonical,
    })
    .collect()
});

/// The built-in variant table, in match order.
pub fn rewrites() -> &'static [Rewrite] {
    &REWRITES
}

fn rewrite(key: String) -> String {
    match REWRITES.iter().find(|r| r.matches(&key)) {
        Some(r) => r.canonical.to_string(),
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("REYES , J.B.L, Acting C.J.")]
    #[case("REYES, J, B. L. J.")]
    #[case("REYES, J. B. L., Actg. C.J.")]
    #[case("Reyes, J. B. L. J.")]
    #[case("REYES, J. B. L., .J.")]
    #[case("REYES, J, B. L., J.")]
    #[case("REYES, J.B.L., Actg. C.J.")]
    fn jbl_reyes_variants(#[case] raw: &str) {
        assert_eq!(normalize(raw), "reyes, j.b.l.");
    }

    #[rstest]
    #[case("AVACEÑA, J.")]
    #[case("AVANCEÑA J., with whom concurs MALCOLM, J.")]
    #[case("AVANCEÑA, J.")]
    #[case("AVANCEÃ'A, C.J.")]
    #[case("AVANCEÃ'A, J.")]
    fn avancena_variants(#[case] raw: &str) {
        assert_eq!(normalize(raw), "avancena");
    }

    #[rstest]
    #[case("MELENCIO HERRERA, J.")]
    #[case("MELENCIO-HERRERA. J.")]
    #[case("MELENCIO-HERRRERA, J.")]
    #[case("MELENCIO-HERERRA, J.")]
    #[case("MELENCIO-HERERA, J.")]
    fn melencio_herrera_variants(#[case] raw: &str) {
        assert_eq!(normalize(raw), "melencio-herrera");
    }

    #[rstest]
    #[case("Ynares-Santiago")]
    #[case("Ynares-Santiago, J.")]
    #[case("Ynares-Satiago")]
    #[case("Ynares_Santiago")]
    #[case("YNARES - SANTIAGO, J.")]
    fn ynares_santiago_variants(#[case] raw: &str) {
        assert_eq!(normalize(raw), "ynares-santiago");
    }

    #[rstest]
    #[case("ZALAMEDA, R.V., J.", "zalameda")]
    #[case("ZALDIVAR, J.", "zaldivar")]
    #[case("CAGUIOA, A., J.", "caguioa")]
    #[case("FRANCISCO, R., J.", "francisco")]
    #[case("FRANCISCO, J.", "francisco")]
    #[case("BENGZON, J.P., J.", "bengzon")]
    #[case("BENGZON, J. P., J.", "bengzon")]
    #[case("TEEHANKEE, C.J.", "teehankee")]
    #[case("CALLEJO, SR., J.", "callejo")]
    #[case("MAKASIAR, J.", "makasiar")]
    #[case("BRION, J.", "brion")]
    #[case("HERMOSISIMA, JR., J.", "hermosisima")]
    #[case("CRUZ, J.", "cruz")]
    #[case("YULO, J.", "yulo")]
    fn trailing_initials_collapse_to_surname(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize(raw), expected);
    }

    #[test]
    fn anchored_surname_rules_leave_compounds_alone() {
        assert_eq!(normalize("DE LA CRUZ, J."), "de la cruz");
        assert_eq!(normalize("CRUZ-ANGELES"), "cruz-angeles");
        assert_eq!(normalize("BENGZON, C.J."), "bengzon");
    }

    #[test]
    fn role_only_inputs_are_empty() {
        for raw in ["", "   ", "J.", "C.J.", "Acting C.J.", "Chief Justice", "JJ.", "*"] {
            assert_eq!(normalize(raw), "", "input {raw:?}");
        }
    }

    #[test]
    fn leading_roles_are_stripped() {
        assert_eq!(normalize("Chief Justice Panganiban"), "panganiban");
        assert_eq!(normalize("Associate Justice Carpio"), "carpio");
        assert_eq!(normalize("J. Bersamin"), "bersamin");
    }

    #[test]
    fn suffixes_render_with_period() {
        assert_eq!(normalize("VELASCO, JR., J."), "velasco jr.");
        assert_eq!(normalize("DE LEON, JR., J."), "de leon jr.");
        assert_eq!(normalize("A. Reyes, Jr., J."), "reyes, a. jr.");
        assert_eq!(normalize("REYES, A., JR., J."), "reyes, a. jr.");
    }

    #[test]
    fn asterisks_and_accents_removed() {
        assert_eq!(normalize("BERSAMIN, J.*"), "bersamin");
        assert_eq!(normalize("PEÑA, [*] J."), "pena");
        assert_eq!(normalize("Muñoz Palma, J."), "munoz palma");
    }

    #[test]
    fn old_style_magistrado_suffix() {
        assert_eq!(normalize("PABLO, M."), "pablo");
        assert_eq!(normalize("DIOKNO, M. J."), "diokno");
    }

    #[test]
    fn rewrite_targets_are_fixed_points() {
        for rule in rewrites() {
            assert_eq!(normalize(rule.canonical()), rule.canonical());
        }
    }

    #[test]
    fn idempotent_on_samples() {
        for raw in [
            "REYES , J.B.L, Acting C.J.",
            "j. b. acting c.j. reyes",
            "c. j. j.",
            "reyes, j. j.",
            "Leonardo-De Castro, J.",
            "x - - y",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "input {raw:?}");
        }
    }
}
