//! Heading-column boundaries: first, last, both, and neither.

use trellis::{Options, Table};

fn base() -> Table {
    Table::new()
        .header(["#", "G", "H", "R", "S"])
        .body([["1", "30", "40", "35", "30"], ["2", "30", "40", "35", "30"]])
        .footer(["SUM", "130", "140", "135", "130"])
}

#[test]
fn first_column_heading() {
    let text = base()
        .options(Options::new().first_col_heading(true))
        .render()
        .unwrap();
    let expected = concat!(
        "╔═════╦═══════════════════════╗\n",
        "║  #  ║  G     H     R     S  ║\n",
        "╟─────╫───────────────────────╢\n",
        "║  1  ║ 30    40    35    30  ║\n",
        "║  2  ║ 30    40    35    30  ║\n",
        "╟─────╫───────────────────────╢\n",
        "║ SUM ║ 130   140   135   130 ║\n",
        "╚═════╩═══════════════════════╝",
    );
    assert_eq!(text, expected);
}

#[test]
fn first_column_heading_body_only() {
    let text = Table::new()
        .body([["1", "30", "40", "35", "30"], ["2", "30", "40", "35", "30"]])
        .options(Options::new().first_col_heading(true))
        .render()
        .unwrap();
    let expected = concat!(
        "╔═══╦═══════════════════╗\n",
        "║ 1 ║ 30   40   35   30 ║\n",
        "║ 2 ║ 30   40   35   30 ║\n",
        "╚═══╩═══════════════════╝",
    );
    assert_eq!(text, expected);
}

#[test]
fn last_column_heading() {
    let text = base()
        .options(Options::new().last_col_heading(true))
        .render()
        .unwrap();
    let expected = concat!(
        "╔═══════════════════════╦═════╗\n",
        "║  #     G     H     R  ║  S  ║\n",
        "╟───────────────────────╫─────╢\n",
        "║  1    30    40    35  ║ 30  ║\n",
        "║  2    30    40    35  ║ 30  ║\n",
        "╟───────────────────────╫─────╢\n",
        "║ SUM   130   140   135 ║ 130 ║\n",
        "╚═══════════════════════╩═════╝",
    );
    assert_eq!(text, expected);
}

#[test]
fn last_column_heading_body_only() {
    let text = Table::new()
        .body([["1", "30", "40", "35", "30"], ["2", "30", "40", "35", "30"]])
        .options(Options::new().last_col_heading(true))
        .render()
        .unwrap();
    let expected = concat!(
        "╔══════════════════╦════╗\n",
        "║ 1   30   40   35 ║ 30 ║\n",
        "║ 2   30   40   35 ║ 30 ║\n",
        "╚══════════════════╩════╝",
    );
    assert_eq!(text, expected);
}

#[test]
fn both_column_headings() {
    let text = base()
        .options(Options::new().first_col_heading(true).last_col_heading(true))
        .render()
        .unwrap();
    let expected = concat!(
        "╔═════╦═════════════════╦═════╗\n",
        "║  #  ║  G     H     R  ║  S  ║\n",
        "╟─────╫─────────────────╫─────╢\n",
        "║  1  ║ 30    40    35  ║ 30  ║\n",
        "║  2  ║ 30    40    35  ║ 30  ║\n",
        "╟─────╫─────────────────╫─────╢\n",
        "║ SUM ║ 130   140   135 ║ 130 ║\n",
        "╚═════╩═════════════════╩═════╝",
    );
    assert_eq!(text, expected);
}

#[test]
fn neither_column_heading() {
    let text = base().options(Options::new()).render().unwrap();
    let expected = concat!(
        "╔═════════════════════════════╗\n",
        "║  #     G     H     R     S  ║\n",
        "╟─────────────────────────────╢\n",
        "║  1    30    40    35    30  ║\n",
        "║  2    30    40    35    30  ║\n",
        "╟─────────────────────────────╢\n",
        "║ SUM   130   140   135   130 ║\n",
        "╚═════════════════════════════╝",
    );
    assert_eq!(text, expected);
}
