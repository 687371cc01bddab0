use itertools::Itertools;
use pretty_assertions::assert_eq;
use proptab::error::Error;
use proptab::truth_table::{generate, Row, TruthTable};

fn table_rows(table: &TruthTable) -> &[Row] {
    match table {
        TruthTable::Table { rows, .. } => rows,
        TruthTable::Equivalence { .. } => panic!("expected a full table"),
    }
}

fn row(bits: &[u8], result: u8) -> Row {
    Row {
        assignment: bits.iter().map(|&b| b == 1).collect(),
        result: result == 1,
    }
}

#[test]
fn xor_truth_table() {
    let table = generate("a + b").expect("generation failed");

    assert_eq!(
        table,
        TruthTable::Table {
            columns: vec!["a".to_string(), "b".to_string()],
            rows: vec![
                row(&[1, 1], 0),
                row(&[1, 0], 1),
                row(&[0, 1], 1),
                row(&[0, 0], 0),
            ],
        }
    );
}

#[test]
fn conditional_truth_table() {
    let table = generate("p -> q").expect("generation failed");

    assert_eq!(
        table_rows(&table),
        &[
            row(&[1, 1], 1),
            row(&[1, 0], 0),
            row(&[0, 1], 1),
            row(&[0, 0], 1),
        ]
    );
}

#[test]
fn biconditional_default_row() {
    let table = generate("(p -> q) <-> p").expect("generation failed");
    assert_eq!(table_rows(&table)[0], row(&[1, 1], 1));
}

#[test]
fn single_variable_table() {
    let table = generate("a").expect("generation failed");
    assert_eq!(table_rows(&table), &[row(&[1], 1), row(&[0], 0)]);
}

#[test]
fn row_count_is_two_to_the_n() {
    let table = generate("a v b ^ c").expect("generation failed");
    let rows = table_rows(&table);

    assert_eq!(rows.len(), 8);
    // every assignment appears exactly once
    assert_eq!(rows.iter().map(|r| &r.assignment).unique().count(), 8);
}

#[test]
fn column_order_follows_first_mention() {
    let table = generate("q ^ p").expect("generation failed");
    match table {
        TruthTable::Table { columns, .. } => {
            assert_eq!(columns, vec!["q".to_string(), "p".to_string()]);
        }
        TruthTable::Equivalence { .. } => panic!("expected a full table"),
    }
}

#[test]
fn regeneration_is_deterministic() {
    let first = generate("((a v b) ^ ~c) + d").expect("generation failed");
    let second = generate("((a v b) ^ ~c) + d").expect("generation failed");
    assert_eq!(first, second);
}

#[test]
fn equivalence_check_yields_single_verdict() {
    assert_eq!(
        generate("a ^ b <=> b ^ a").expect("generation failed"),
        TruthTable::Equivalence { equal: true }
    );
    assert_eq!(
        generate("a <=> ~a").expect("generation failed"),
        TruthTable::Equivalence { equal: false }
    );
}

#[test]
fn colliding_names_enumerate_independently() {
    // regression against the legacy direct-address symbol table: "cB" and
    // "q" share a bucket under h = 7877*h + c mod 256
    let table = generate("cB ^ q").expect("generation failed");

    assert_eq!(
        table_rows(&table),
        &[
            row(&[1, 1], 1),
            row(&[1, 0], 0),
            row(&[0, 1], 0),
            row(&[0, 0], 0),
        ]
    );
}

#[test]
fn unbalanced_parens_error_out() {
    assert!(matches!(generate("(a v b"), Err(Error::Syntax(_))));
}

#[test]
fn too_many_variables_for_enumeration() {
    let expr = (0..70)
        .map(|i| {
            format!(
                "{}{}",
                char::from(b'a' + (i / 26) as u8),
                char::from(b'a' + (i % 26) as u8)
            )
        })
        .join(" ^ ");

    assert_eq!(
        generate(&expr),
        Err(Error::TooManyVariables { count: 70 })
    );
}

#[test]
fn rendered_table_layout() {
    let table = generate("a + b").expect("generation failed");

    assert_eq!(
        table.to_string(),
        "a b | Result\n\
         1 1 |      0\n\
         1 0 |      1\n\
         0 1 |      1\n\
         0 0 |      0\n"
    );
}

#[test]
fn rendered_equivalence_verdict() {
    let table = generate("p <=> p").expect("generation failed");
    assert_eq!(table.to_string(), "equivalent: 1\n");
}
