use serde_json::Value;

use crate::{escape_html, unescape_html, SearchEntry, SearchIndexError, SearchRef};

const SCRIPT_PREFIX: &str = "var searchData=";

/// Renders entries as a search script assigning the `searchData` array.
///
/// Each row reads `['key',['Label',['anchor',1,'scope'],...]]`, labels and scopes being
/// HTML-escaped. A missing scope renders as an empty string.
pub fn entries_to_script<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a SearchEntry>,
{
    let rows: Vec<String> = entries
        .into_iter()
        .map(|entry| {
            let refs: Vec<String> = entry
                .refs
                .iter()
                .map(|search_ref| {
                    let scope = search_ref.scope.as_deref().unwrap_or_default();
                    format!(
                        "[{},1,{}]",
                        quote(&search_ref.anchor),
                        quote(&escape_html(scope))
                    )
                })
                .collect();
            format!(
                "  [{},[{},{}]]",
                quote(&entry.key),
                quote(&escape_html(&entry.label)),
                refs.join(",")
            )
        })
        .collect();

    format!("{SCRIPT_PREFIX}\n[\n{}\n];\n", rows.join(",\n"))
}

/// Parses the entries of a search script, in script order.
///
/// Entries are not validated, see [crate::SearchIndex::from_entries].
pub fn entries_from_script(script: &str) -> Result<Vec<SearchEntry>, SearchIndexError> {
    let body = script
        .trim()
        .strip_prefix(SCRIPT_PREFIX)
        .ok_or_else(|| SearchIndexError::InvalidScript(format!("Missing `{SCRIPT_PREFIX}`")))?
        .trim_end_matches(';');

    let rows: Vec<Value> = serde_json::from_str(&quotes_to_json(body)?)?;
    rows.iter().map(parse_row).collect()
}

fn parse_row(row: &Value) -> Result<SearchEntry, SearchIndexError> {
    let invalid = || SearchIndexError::InvalidScript(format!("Malformed row {row}"));

    let [key, content] = row.as_array().map(Vec::as_slice).ok_or_else(invalid)? else {
        return Err(invalid());
    };
    let key = key.as_str().ok_or_else(invalid)?;
    let (label, refs) = content
        .as_array()
        .and_then(|content| content.split_first())
        .ok_or_else(invalid)?;
    let label = label.as_str().ok_or_else(invalid)?;

    let refs = refs
        .iter()
        .map(|search_ref| {
            let [anchor, _, scope] = search_ref.as_array().map(Vec::as_slice).ok_or_else(invalid)?
            else {
                return Err(invalid());
            };
            let anchor = anchor.as_str().ok_or_else(invalid)?;
            let scope = scope.as_str().ok_or_else(invalid)?;
            let scope = (!scope.is_empty()).then(|| unescape_html(scope));
            Ok(SearchRef::new(anchor.to_string(), scope))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SearchEntry {
        key: key.to_string(),
        label: unescape_html(label),
        refs,
    })
}

/// Single-quoted script string. Control characters are escaped so that each row stays on
/// one line.
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for character in text.chars() {
        match character {
            '\'' | '\\' => {
                quoted.push('\\');
                quoted.push(character);
            }
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            control if control.is_control() || matches!(control, '\u{2028}' | '\u{2029}') => {
                quoted.push_str(&format!("\\u{:04x}", u32::from(control)));
            }
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}

fn unicode_escape(characters: &mut core::str::Chars) -> Result<char, SearchIndexError> {
    let digits: String = characters.take(4).collect();
    u32::from_str_radix(&digits, 16)
        .ok()
        .filter(|_| digits.len() == 4)
        .and_then(char::from_u32)
        .ok_or_else(|| SearchIndexError::InvalidScript(format!("Invalid escape \\u{digits}")))
}

/// Rewrites the single-quoted strings of `body` as JSON strings.
fn quotes_to_json(body: &str) -> Result<String, SearchIndexError> {
    let mut json = String::with_capacity(body.len());
    let mut characters = body.chars();

    while let Some(character) = characters.next() {
        if character != '\'' {
            json.push(character);
            continue;
        }

        let mut text = String::new();
        loop {
            match characters.next() {
                Some('\'') => break,
                Some('\\') => match characters.next() {
                    Some('n') => text.push('\n'),
                    Some('r') => text.push('\r'),
                    Some('t') => text.push('\t'),
                    Some('u') => text.push(unicode_escape(&mut characters)?),
                    Some(escaped) => text.push(escaped),
                    None => {
                        return Err(SearchIndexError::InvalidScript(
                            "Dangling escape at end of script".to_string(),
                        ))
                    }
                },
                Some(other) => text.push(other),
                None => {
                    return Err(SearchIndexError::InvalidScript(format!(
                        "Unterminated string '{text}"
                    )))
                }
            }
        }
        json.push_str(&serde_json::to_string(&text)?);
    }

    Ok(json)
}
