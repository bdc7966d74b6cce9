// ABOUTME: Accent folding transform mapping accented Latin letters to ASCII
// ABOUTME: Keeps rendered text printable on devices without extended glyph sets

/// Replace accented Latin letters with their closest ASCII equivalents.
///
/// Characters without a mapping (including non-Latin scripts) pass through
/// unchanged.
pub fn fold_accents(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match fold_char(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

fn fold_char(c: char) -> Option<&'static str> {
    let folded = match c {
        // Polish
        'ą' => "a",
        'ć' => "c",
        'ę' => "e",
        'ł' => "l",
        'ń' => "n",
        'ś' => "s",
        'ź' | 'ż' => "z",
        'Ą' => "A",
        'Ć' => "C",
        'Ę' => "E",
        'Ł' => "L",
        'Ń' => "N",
        'Ś' => "S",
        'Ź' | 'Ż' => "Z",
        // Western European
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'ý' | 'ÿ' => "y",
        'ç' => "c",
        'ñ' => "n",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'Ý' => "Y",
        'Ç' => "C",
        'Ñ' => "N",
        'Æ' => "AE",
        'Œ' => "OE",
        // Czech and Slovak
        'č' => "c",
        'ď' => "d",
        'ě' => "e",
        'ň' => "n",
        'ř' => "r",
        'š' => "s",
        'ť' => "t",
        'ů' => "u",
        'ž' => "z",
        'Č' => "C",
        'Ď' => "D",
        'Ě' => "E",
        'Ň' => "N",
        'Ř' => "R",
        'Š' => "S",
        'Ť' => "T",
        'Ů' => "U",
        'Ž' => "Z",
        _ => return None,
    };
    Some(folded)
}
