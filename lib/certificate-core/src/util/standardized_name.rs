//! Name standardisation following the ICAO Doc 9303 transliteration rules used
//! for the `fnt`/`gnt` payload fields.

const MAX_STANDARDIZED_NAME_LENGTH: usize = 80;
const FILLER: char = '<';

pub fn standardize_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());

    for c in name.trim().chars().flat_map(char::to_uppercase) {
        match c {
            'A'..='Z' => result.push(c),
            ' ' | '-' => {
                if !result.is_empty() && !result.ends_with(FILLER) {
                    result.push(FILLER);
                }
            }
            other => {
                if let Some(transliterated) = transliterate(other) {
                    result.push_str(transliterated);
                }
            }
        }
    }

    let mut result: String = result.chars().take(MAX_STANDARDIZED_NAME_LENGTH).collect();
    while result.ends_with(FILLER) {
        result.pop();
    }

    result
}

fn transliterate(c: char) -> Option<&'static str> {
    let value = match c {
        'Ä' | 'Æ' => "AE",
        'Å' => "AA",
        'Ö' | 'Ø' | 'Œ' => "OE",
        'Ü' => "UE",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ā' | 'Ă' | 'Ą' => "A",
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'Ď' | 'Đ' | 'Ð' => "D",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'Ĥ' | 'Ħ' => "H",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => "I",
        'Ĳ' => "IJ",
        'Ĵ' => "J",
        'Ķ' => "K",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => "L",
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => "N",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'Ŕ' | 'Ŗ' | 'Ř' => "R",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'Ţ' | 'Ť' | 'Ŧ' => "T",
        'Þ' => "TH",
        'Ù' | 'Ú' | 'Û' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'Ŵ' => "W",
        'Ý' | 'Ÿ' | 'Ŷ' => "Y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        _ => return None,
    };
    Some(value)
}
