use std::{
    io::{stdin, stdout},
    time::Instant,
};

use crate::{
    core::{
        config::RunConfig,
        error::GradusError,
        geometry::terminal_width,
        stream::{Emitter, process_item, process_lines},
    },
    render::{render_graph, render_table},
};

use super::parse::Cli;

pub fn table() -> Result<(), GradusError> {
    render_table(&mut stdout().lock())?;
    Ok(())
}

pub fn graph() -> Result<(), GradusError> {
    render_graph(&mut stdout().lock(), terminal_width())?;
    Ok(())
}

/// Convert positional values, or stdin lines when there are none.
pub fn convert(cli: Cli) -> Result<(), GradusError> {
    let cfg = RunConfig::builder()
        .source_opt(cli.source.as_deref())
        .target_opt(cli.target.as_deref())
        .array(cli.array)
        .in_sep(cli.in_sep)
        .out_sep(cli.out_sep)
        .debug(cli.debug)
        .build()?;

    let t_start = Instant::now();
    let mut out = Emitter::new(stdout().lock(), cfg.out_sep.clone());

    let items = if cli.values.is_empty() {
        process_lines(stdin().lock(), &cfg, &mut out)?
    } else {
        let mut n = 0usize;
        for item in &cli.values {
            n += process_item(item, &cfg, &mut out)?;
        }
        n
    };
    let written = out.written();
    out.finish()?;

    if cfg.debug {
        eprintln!(
            "{} → {}: converted {items} values ({written} written) in {} µs",
            cfg.source.token(),
            cfg.target.token(),
            t_start.elapsed().as_micros()
        );
    }
    Ok(())
}
