//! Box-drawn reference table, -40 °C to 100 °C in steps of ten.

use std::io::{self, Write};

use crate::core::{
    constants::{TABLE_COLUMN_WIDTH as W, TABLE_PRECISION},
    scale::Scale,
};

// Box-drawing glyphs
const TL: &str = "╔";
const TM: &str = "╦";
const TR: &str = "╗";
const ML: &str = "╠";
const MM: &str = "╬";
const MR: &str = "╣";
const BL: &str = "╚";
const BM: &str = "╩";
const BR: &str = "╝";
const H: &str = "═";
const V: &str = "║";

const COLUMNS: [Scale; 5] = [
    Scale::Celsius,
    Scale::Fahrenheit,
    Scale::Kelvin,
    Scale::Rankine,
    Scale::Reaumur,
];

/// Rows run from `FIRST_ROW * 10` to `LAST_ROW * 10` degrees Celsius.
const FIRST_ROW: i32 = -4;
const LAST_ROW: i32 = 10;

/// One horizontal rule; each cell is the column plus one space either side.
fn rule(left: &str, mid: &str, right: &str) -> String {
    let cell = H.repeat(W + 2);
    let mut s = String::from(left);
    for i in 0..COLUMNS.len() {
        if i > 0 {
            s.push_str(mid);
        }
        s.push_str(&cell);
    }
    s.push_str(right);
    s
}

fn row<I: IntoIterator<Item = String>>(cells: I) -> String {
    let mut s = String::from(V);
    for c in cells {
        s.push(' ');
        s.push_str(&c);
        s.push(' ');
        s.push_str(V);
    }
    s
}

/// Celsius values of the table rows.
pub fn table_rows() -> impl Iterator<Item = f64> {
    (FIRST_ROW..=LAST_ROW).map(|i| f64::from(i) * 10.0)
}

pub fn render_table<Out: Write>(out: &mut Out) -> io::Result<()> {
    writeln!(out, "{}", rule(TL, TM, TR))?;
    writeln!(
        out,
        "{}",
        row(COLUMNS.iter().map(|s| format!("{:<W$}", s.name())))
    )?;
    writeln!(
        out,
        "{}",
        row(COLUMNS.iter().map(|s| format!("{:<W$}", s.symbol())))
    )?;
    writeln!(out, "{}", rule(ML, MM, MR))?;

    for c in table_rows() {
        let cells = COLUMNS
            .iter()
            .map(|s| format!("{:>W$.TABLE_PRECISION$}", s.from_celsius(c)));
        writeln!(out, "{}", row(cells))?;
    }

    writeln!(out, "{}", rule(BL, BM, BR))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> String {
        let mut buf = Vec::new();
        render_table(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_shape() {
        let text = rendered();
        let lines: Vec<_> = text.lines().collect();
        // top, two header rows, separator, 15 data rows, bottom
        assert_eq!(lines.len(), 1 + 2 + 1 + 15 + 1);
        assert!(lines[0].starts_with(TL) && lines[0].ends_with(TR));
        assert!(lines[3].starts_with(ML));
        assert!(lines.last().unwrap().starts_with(BL));

        let width = lines[0].chars().count();
        assert_eq!(width, 1 + COLUMNS.len() * (W + 3));
        for l in &lines {
            assert_eq!(l.chars().count(), width, "misaligned: {l}");
        }
    }

    fn cells(line: &str) -> Vec<&str> {
        line.split(V)
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }

    #[test]
    fn test_header_and_values() {
        let text = rendered();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            cells(lines[1]),
            ["Celsius", "Fahrenheit", "Kelvin", "Rankine", "Réaumur"]
        );
        assert_eq!(cells(lines[2]), ["°C", "°F", "K", "°R", "°Ré"]);

        let first = cells(lines[4]);
        assert_eq!(first[0], "-40.0");
        assert_eq!(first[1], "-40.0");
        assert!(first[2].starts_with("233."));
        assert_eq!(first[3], "419.7");
        assert_eq!(first[4], "-32.0");

        let zero = cells(lines[8]);
        assert_eq!(zero[0], "0.0");
        assert_eq!(zero[1], "32.0");
        assert_eq!(zero[3], "491.7");

        let last = cells(lines[18]);
        assert_eq!(last[0], "100.0");
        assert_eq!(last[1], "212.0");
        assert_eq!(last[3], "671.7");
        assert_eq!(last[4], "80.0");
    }

    #[test]
    fn test_rows_step_by_ten() {
        let rows: Vec<_> = table_rows().collect();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0], -40.0);
        assert_eq!(rows[14], 100.0);
    }
}
