//! Raw BibTeX entry scanning
//!
//! This is deliberately not a full BibTeX grammar. It recognizes:
//! - The `@type{key,` header (first match anywhere in the text)
//! - The first `title = {...}` assignment (case-insensitive)
//! - The outermost `{ ... }` body, split into fields at depth-zero commas
//!
//! Field text is never decoded, so whatever the resolver sent (quoted values,
//! bare macros like `month=sep`, LaTeX escapes) is carried through verbatim.

use nom::{
    bytes::complete::{tag_no_case, take_while, take_while1},
    character::complete::char,
    IResult,
};

use super::entry::RawEntry;
use super::error::FormatError;

/// Parse a single raw entry into header, title and field fragments
pub fn parse_raw_entry(raw: &str) -> Result<RawEntry, FormatError> {
    if raw.is_empty() {
        return Err(FormatError::InvalidInput);
    }

    // Trimming also drops blank lines some resolvers send before the `@`
    let text = raw.trim();

    let (entry_type, cite_key) = parse_header(text)?;

    let mut entry = RawEntry::new(entry_type, cite_key);
    entry.title = find_title(text).map(str::to_string);
    entry.fields = split_fields(fields_content(entry_body(text)));

    Ok(entry)
}

/// Find the first `@type{key,` header and return `(type, key)`
pub fn parse_header(text: &str) -> Result<(&str, &str), FormatError> {
    text.match_indices('@')
        .find_map(|(pos, _)| entry_header(&text[pos..]).ok())
        .map(|(_, header)| header)
        .ok_or(FormatError::Parse)
}

/// Find the content of the first `title = {...}` assignment.
///
/// Matching is case-insensitive and stops at the first closing brace, so a
/// title like `{The {DNA} story}` yields `The {DNA`. Names ending in `title`
/// (`booktitle`, `subtitle`) match too when they come first.
pub fn find_title(text: &str) -> Option<&str> {
    // ASCII lowering keeps byte offsets aligned with `text`
    let lowered = text.to_ascii_lowercase();
    let title = lowered
        .match_indices("title")
        .find_map(|(pos, _)| title_assignment(&text[pos..]).ok())
        .map(|(_, content)| content);
    title
}

/// Text between the first `{` and the last `}`.
///
/// When no `}` follows the first `{`, the body runs to the end of the text.
pub fn entry_body(text: &str) -> &str {
    let open = match text.find('{') {
        Some(pos) => pos,
        None => return "",
    };
    let inner = &text[open + 1..];
    match inner.rfind('}') {
        Some(close) => &inner[..close],
        None => inner,
    }
}

/// Drop the cite key (everything up to and including the first comma)
pub fn fields_content(body: &str) -> &str {
    match body.find(',') {
        Some(pos) => body[pos + 1..].trim(),
        None => body.trim(),
    }
}

/// Split entry content into fields at commas outside braces.
///
/// Single left-to-right scan with a depth counter. Braces are kept in the
/// field text; only separating commas are dropped. Fields are trimmed and
/// empty ones (trailing commas) are skipped. Quotes are not tracked, so a
/// comma inside `"..."` at depth zero does split.
pub fn split_fields(content: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;

    for c in content.chars() {
        match c {
            '{' => depth += 1,
            '}' => depth -= 1,
            ',' if depth == 0 => {
                push_field(&mut fields, &current);
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }

    push_field(&mut fields, &current);
    fields
}

fn push_field(fields: &mut Vec<String>, raw: &str) {
    let field = raw.trim();
    if !field.is_empty() {
        fields.push(field.to_string());
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `@type{key,`
fn entry_header(input: &str) -> IResult<&str, (&str, &str)> {
    let (rest, _) = char('@')(input)?;
    let (rest, entry_type) = take_while1(is_word_char)(rest)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, cite_key) = take_while1(|c: char| c != ',')(rest)?;
    let (rest, _) = char(',')(rest)?;

    Ok((rest, (entry_type, cite_key)))
}

/// `title = {content}`
fn title_assignment(input: &str) -> IResult<&str, &str> {
    let (rest, _) = tag_no_case("title")(input)?;
    let (rest, _) = take_while(char::is_whitespace)(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = take_while(char::is_whitespace)(rest)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, content) = take_while1(|c: char| c != '}')(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, content))
}
