// Hidden message overlay: layout, padding and recovery.
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use swatchline_lib::{normalize, reveal, seal, sink, transform, CssHex, SwatchConfig};

fn config(cell_text_width: usize) -> SwatchConfig {
    SwatchConfig {
        cell_text_width,
        ..SwatchConfig::default()
    }
}

fn payloads(lines: &[swatchline_lib::StyledLine]) -> String {
    lines
        .iter()
        .flat_map(|line| line.cells().map(|(text, _)| text).collect::<Vec<_>>())
        .collect()
}

#[test]
fn message_flows_across_rows() {
    let buffer = vec![255u8; 3 * 2 * 4];
    let swatch = transform(&buffer, 3, 2, &config(2), Some("hello  world\n!"), &CssHex).unwrap();
    let templates: Vec<&str> = swatch.lines.iter().map(|l| l.template()).collect();
    assert_eq!(templates, vec!["%che%cll%co ", "%cwo%crl%cd!"]);
}

#[test]
fn empty_message_fills_cells_with_spaces() {
    let buffer = vec![0u8; 2 * 2 * 4];
    let swatch = transform(&buffer, 2, 2, &config(3), Some(" \n "), &CssHex).unwrap();
    assert_eq!(payloads(&swatch.lines), " ".repeat(12));
}

#[test]
fn overlong_message_is_cut_at_grid_capacity() {
    let buffer = vec![0u8; 2 * 4];
    let swatch = transform(&buffer, 2, 1, &config(2), Some("abcdefgh"), &CssHex).unwrap();
    assert_eq!(payloads(&swatch.lines), "abcd");
    assert_eq!(reveal::capacity(&swatch.grid, 2), 4);
}

#[test]
fn percent_signs_do_not_add_directives() {
    let buffer = vec![0u8; 4 * 4];
    let swatch = transform(&buffer, 4, 1, &config(2), Some("%c%c%%"), &CssHex).unwrap();
    assert_eq!(swatch.lines[0].directive_count(), 4);
    assert_eq!(reveal::recover_from_lines(&swatch.lines), "%c%c%%");
}

#[test]
fn sealed_message_survives_json_round_trip() {
    let token = seal::seal("the eagle has landed", "pw").unwrap();
    let buffer = vec![42u8; 16 * 8 * 4];
    let swatch = transform(&buffer, 16, 8, &config(2), Some(token.as_str()), &CssHex).unwrap();

    let json = sink::to_json(&swatch.lines).unwrap();
    let lines = sink::from_json(&json).unwrap();
    let hidden = reveal::recover_message(lines.iter().map(|l| l.template.as_str()));
    assert_eq!(hidden, token);
    assert_eq!(seal::open(&hidden, "pw").unwrap(), "the eagle has landed");
}

proptest! {
    #[test]
    fn payloads_are_message_padded_to_capacity(
        width in 1usize..6,
        height in 1usize..6,
        cell in 1usize..4,
        raw in "[a-z %\n]{0,80}",
    ) {
        let buffer = vec![9u8; width * height * 4];
        let swatch = transform(&buffer, width, height, &config(cell), Some(raw.as_str()), &CssHex).unwrap();

        let capacity = width * height * cell;
        let mut expected: String = normalize(&raw).as_string().chars().take(capacity).collect();
        let pad = capacity - expected.chars().count();
        expected.push_str(&" ".repeat(pad));

        prop_assert_eq!(payloads(&swatch.lines), expected);
    }
}
