//! Columnar comparison chart with a proportional `#` bar per sample.

use std::io::{self, Write};

use terminal_size::Width;

use crate::core::{
    constants::TABLE_PRECISION as P,
    geometry::{bar_len, bar_width},
    scale::Scale,
};

const TITLE: &str = "Temperature chart by scale";
const TITLE_RULE_WIDTH: usize = 79;

/// Sampled range in degrees Celsius.
pub const GRAPH_RANGE: (f64, f64) = (-20.0, 100.0);
const STEP: f64 = 10.0;

const COLUMNS: [Scale; 4] = [
    Scale::Celsius,
    Scale::Fahrenheit,
    Scale::Kelvin,
    Scale::Rankine,
];

const SEPARATOR: &str = "----------------|------------|------------|------------|------------|";

const NOTES: [&str; 3] = [
    "• Freezing point of water: 0°C = 32°F = 273.15K = 491.67°R",
    "• Boiling point of water: 100°C = 212°F = 373.15K = 671.67°R",
    "• Absolute zero: -273.15°C = -459.67°F = 0K = 0°R",
];

/// Celsius sample points, low to high.
pub fn graph_points() -> impl Iterator<Item = f64> {
    let (lo, hi) = GRAPH_RANGE;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = ((hi - lo) / STEP) as usize + 1;
    (0..n).map(move |i| {
        #[allow(clippy::cast_precision_loss)]
        let offset = i as f64 * STEP;
        lo + offset
    })
}

fn header<I: IntoIterator<Item = String>>(first: &str, rest: I) -> String {
    let mut s = format!("{first:<15} |");
    for cell in rest {
        s.push_str(&format!(" {cell:<10} |"));
    }
    s
}

/// Print the chart. `term` decides how long the bars may grow; without a
/// terminal the rows carry no bars at all.
pub fn render_graph<Out: Write>(out: &mut Out, term: Option<Width>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "═".repeat(TITLE_RULE_WIDTH))?;
    writeln!(out)?;

    writeln!(
        out,
        "{}",
        header("Temperature", COLUMNS.iter().map(|s| s.name().to_owned()))
    )?;
    writeln!(
        out,
        "{}",
        header("(°C)", COLUMNS.iter().map(|s| format!("({})", s.symbol())))
    )?;
    writeln!(out, "{SEPARATOR}")?;

    let bar_room = term.map_or(0, |w| bar_width(w, SEPARATOR.len() + 1));
    for c in graph_points() {
        let mut line = format!("{c:7.P$}°C       |");
        for scale in COLUMNS {
            line.push_str(&format!(" {:7.P$}    |", scale.from_celsius(c)));
        }
        let bar = bar_len(c, GRAPH_RANGE, bar_room);
        if bar > 0 {
            line.push(' ');
            line.push_str(&"#".repeat(bar));
        }
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out)?;
    writeln!(out, "Notes:")?;
    for note in NOTES {
        writeln!(out, "{note}")?;
    }
    writeln!(out)?;
    out.flush()
}
