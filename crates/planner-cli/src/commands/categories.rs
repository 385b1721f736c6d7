//! Categories command for listing the configured category set.

use std::io::Write;

use anyhow::Result;

use planner_core::CategoryRegistry;

pub fn run<W: Write>(writer: &mut W, registry: &CategoryRegistry) -> Result<()> {
    if registry.is_empty() {
        writeln!(writer, "No categories configured.")?;
        return Ok(());
    }

    let width = registry
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    writeln!(writer, "{:<width$}  {:<8} COUNTED", "NAME", "COLOR")?;
    for category in registry.iter() {
        let counted = if category.counts_toward_total { "yes" } else { "no" };
        writeln!(
            writer,
            "{:<width$}  {:<8} {counted}",
            category.name, category.color
        )?;
    }
    Ok(())
}
