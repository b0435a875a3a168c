//! BibTeX normalization integration tests

use doi2bib_bibtex::{format_bibtex, parse_raw_entry, split_fields, FormatError};
use rstest::rstest;

const CAN2014: &str = " @article{Can2014, title={A planar parallel 3-RRR robot with synchronously driven cranks}, volume={79}, ISSN={0094-114X}, url={http://dx.doi.org/10.1016/j.mechmachtheory.2014.04.001}, DOI={10.1016/j.mechmachtheory.2014.04.001}, journal={Mechanism and Machine Theory}, publisher={Elsevier BV}, author={Can, Engin and Stachel, Hellmuth}, year={2014}, month=sep, pages={29–45} }";

// A crossref-style response: leading blank line, one field per line
const CROSSREF_STYLE: &str = "\n @article{Po_tulka2025, title={Safety Assessment of Autonomous Vehicles}, volume={13}, ISSN={2169-3536}, url={http://dx.doi.org/10.1109/ACCESS.2025.3646349}, DOI={10.1109/access.2025.3646349}, journal={IEEE Access}, publisher={Institute of Electrical and Electronics Engineers (IEEE)}, author={Pošťulka, Jan and Novák, Petr}, year={2025}, pages={1–1} }\n";

// === Layout ===

#[test]
fn test_removes_leading_whitespace_before_at() {
    let result = format_bibtex("  @article{key, title={Test}}").unwrap();
    assert!(result.starts_with("@article"));
}

#[test]
fn test_fields_on_separate_indented_lines() {
    let result = format_bibtex(CAN2014).unwrap();
    let lines: Vec<&str> = result.lines().collect();

    assert_eq!(lines[0], "@article{Can2014_Aplanar,");
    assert!(lines[1].starts_with("  title="));
    assert!(lines[2].starts_with("  volume="));
    assert_eq!(lines[lines.len() - 2], "  pages={29–45}");
    assert_eq!(lines[lines.len() - 1], "}");
}

#[test]
fn test_every_field_but_last_has_trailing_comma() {
    let result = format_bibtex(CAN2014).unwrap();
    let lines: Vec<&str> = result.lines().collect();
    let field_lines = &lines[1..lines.len() - 1];

    assert_eq!(field_lines.len(), 11);
    for line in &field_lines[..field_lines.len() - 1] {
        assert!(line.ends_with(','), "missing comma: {}", line);
    }
    assert!(!field_lines[field_lines.len() - 1].ends_with(','));
}

#[test]
fn test_bare_values_survive() {
    let result = format_bibtex(CAN2014).unwrap();
    assert!(result.contains("\n  month=sep,\n"));
}

// === Field content ===

#[test]
fn test_preserves_commas_within_braces() {
    let result = format_bibtex("@article{key, author={Smith, John and Doe, Jane}}").unwrap();
    assert!(result.contains("  author={Smith, John and Doe, Jane}"));
}

#[test]
fn test_preserves_non_ascii_field_content() {
    let result = format_bibtex(CROSSREF_STYLE).unwrap();
    assert!(result.contains("author={Pošťulka, Jan and Novák, Petr}"));
    assert!(result.starts_with("@article{Po_tulka2025_SafetyA,\n"));
}

#[test]
fn test_field_order_matches_source() {
    let entry = parse_raw_entry(CAN2014).unwrap();
    assert_eq!(
        entry.field_names(),
        vec![
            "title", "volume", "ISSN", "url", "DOI", "journal", "publisher", "author", "year",
            "month", "pages"
        ]
    );
}

// === Cite keys ===

#[rstest]
#[case("@article{key, title={Re-thinking: AI & ML}}", "@article{key_Rethink,")]
#[case("@article{key, title={AI}}", "@article{key_AI,")]
#[case("@article{key, Title = {Deep Learning}}", "@article{key_DeepLea,")]
#[case("@misc{key, year={2025}, note={No title}}", "@misc{key,")]
#[case("@misc{key, title={???}}", "@misc{key,")]
fn test_cite_key_derivation(#[case] input: &str, #[case] first_line: &str) {
    let result = format_bibtex(input).unwrap();
    assert_eq!(result.lines().next(), Some(first_line));
}

#[test]
fn test_reformatting_appends_second_suffix() {
    let once = format_bibtex("@article{key, title={AI}}").unwrap();
    let twice = format_bibtex(&once).unwrap();
    assert!(twice.starts_with("@article{key_AI_AI,"));
}

// === Errors ===

#[test]
fn test_error_for_invalid_bibtex() {
    let err = format_bibtex("not a bibtex entry").unwrap_err();
    assert_eq!(err, FormatError::Parse);
    assert_eq!(err.to_string(), "Could not parse BibTeX entry");
}

#[test]
fn test_error_for_empty_input() {
    let err = format_bibtex("").unwrap_err();
    assert_eq!(err, FormatError::InvalidInput);
    assert_eq!(err.to_string(), "Invalid BibTeX input");
}

// === Tokenizer ===

#[rstest]
#[case("a={1}, b={2}", &["a={1}", "b={2}"])]
#[case("a={x, y}", &["a={x, y}"])]
#[case("a={{x}, {y, z}}, b=3,", &["a={{x}, {y, z}}", "b=3"])]
#[case("", &[])]
fn test_split_fields_cases(#[case] content: &str, #[case] expected: &[&str]) {
    assert_eq!(split_fields(content), expected);
}
