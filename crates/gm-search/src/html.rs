const NO_BREAK_SPACE: char = '\u{a0}';

/// Escapes `text` for inclusion in a search script.
///
/// Markup characters become entities, and the no-break space separating a signature from its
/// header file becomes `&#160;`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            NO_BREAK_SPACE => escaped.push_str("&#160;"),
            other => escaped.push(other),
        }
    }

    escaped
}

/// Reverts [escape_html]. Unknown entities are kept verbatim.
pub fn unescape_html(text: &str) -> String {
    let mut unescaped = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        unescaped.push_str(&rest[..start]);
        rest = &rest[start..];

        let entity = [
            ("&amp;", '&'),
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&#160;", NO_BREAK_SPACE),
        ]
        .into_iter()
        .find(|(entity, _)| rest.starts_with(entity));

        match entity {
            Some((entity, character)) => {
                unescaped.push(character);
                rest = &rest[entity.len()..];
            }
            None => {
                unescaped.push('&');
                rest = &rest[1..];
            }
        }
    }

    unescaped.push_str(rest);
    unescaped
}

/// Scope of a function overload: its signature and the header declaring it.
pub fn member_scope(signature: &str, header: &str) -> String {
    format!("{signature}:{NO_BREAK_SPACE}{header}")
}
