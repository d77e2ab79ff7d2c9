//! Whitespace, casing, and name normalization.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::patterns::WHITESPACE_RUN;

/// Punctuation kept by [`clean_text`] besides letters, digits, and whitespace.
const KEPT_PUNCTUATION: &str = ".,;:-_/#&()'\"@%+°ºª$";

lazy_static! {
    /// Folded country spelling -> canonical display form.
    static ref COUNTRY_ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        for (aliases, canonical) in [
            (&["mexico", "mex", "mx"][..], "México"),
            (&["china", "republica popular china", "rpc", "cn"][..], "China"),
            (&["colombia", "co"][..], "Colombia"),
            (&["peru", "pe"][..], "Perú"),
            (&["chile", "cl"][..], "Chile"),
            (&["ecuador", "ec"][..], "Ecuador"),
            (&["panama", "pa"][..], "Panamá"),
            (&["guatemala"][..], "Guatemala"),
            (&["costa rica"][..], "Costa Rica"),
            (&["republica dominicana"][..], "República Dominicana"),
            (&["brasil", "brazil"][..], "Brasil"),
            (&["argentina"][..], "Argentina"),
            (&["estados unidos", "eeuu", "ee uu", "usa", "us", "united states"][..], "Estados Unidos"),
            (&["canada"][..], "Canadá"),
            (&["espana", "spain"][..], "España"),
            (&["alemania", "germany"][..], "Alemania"),
            (&["italia", "italy"][..], "Italia"),
            (&["turquia", "turkey"][..], "Turquía"),
            (&["india"][..], "India"),
            (&["vietnam", "viet nam"][..], "Vietnam"),
            (&["japon", "japan"][..], "Japón"),
            (&["corea del sur", "corea", "south korea"][..], "Corea del Sur"),
            (&["taiwan"][..], "Taiwán"),
            (&["hong kong"][..], "Hong Kong"),
        ] {
            for alias in aliases {
                m.insert(*alias, canonical);
            }
        }
        m
    };
}

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Strip characters outside letters, digits, whitespace, and address punctuation.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Title-case every whitespace-delimited word, keeping the separators.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}

/// Keep letters (accented included), digits, and spaces; collapse whitespace.
pub fn sanitize_name(name: &str) -> String {
    let kept: String = name
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .filter(|c| c.is_alphabetic() || c.is_ascii_digit() || *c == ' ')
        .collect();
    normalize_whitespace(&kept)
}

/// Map known country spellings to their display form, title-case the rest.
pub fn normalize_country_name(country_name: &str) -> String {
    let trimmed = normalize_whitespace(country_name);
    if trimmed.is_empty() {
        return trimmed;
    }

    let key = fold(&trimmed.replace('.', ""));
    match COUNTRY_ALIASES.get(key.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => capitalize_words(&trimmed),
    }
}

/// Lowercase and drop Spanish diacritics for lookups.
pub(crate) fn fold(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  MALE \n\t S.A.  "), "MALE S.A.");
        assert_eq!(normalize_whitespace("\r\n"), "");
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("**Av. Reforma #123, Piso 4** | CDMX ~"),
            "Av. Reforma #123, Piso 4  CDMX"
        );
        assert_eq!(clean_text("Ñandú & Cía."), "Ñandú & Cía.");
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("zhejiang CHOUZHOU bank"), "Zhejiang Chouzhou Bank");
        assert_eq!(capitalize_words("méxico  df"), "México  Df");
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  José*  Pérez\n(MALE) 2 "), "José Pérez MALE 2");
    }

    #[test]
    fn test_normalize_country_name() {
        assert_eq!(normalize_country_name("méxico"), "México");
        assert_eq!(normalize_country_name("MEXICO"), "México");
        assert_eq!(normalize_country_name(" CHINA "), "China");
        assert_eq!(normalize_country_name("EE.UU."), "Estados Unidos");
        assert_eq!(normalize_country_name("nueva zelanda"), "Nueva Zelanda");
        assert_eq!(normalize_country_name(""), "");
    }
}
