//! Report formatting and printing utilities.
//!
//! Kept apart from the core so the library can be used without printing
//! side effects. Each `print_*` function has a `*_to` variant taking a writer.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{FormElement, ReferenceableEntities, ResolutionContext, SelectOptions};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// How an option key is shown: the empty key would otherwise be invisible.
fn display_key(key: &str) -> String {
    if key.is_empty() {
        "\"\"".to_string()
    } else {
        key.to_string()
    }
}

fn key_width<'a>(keys: impl Iterator<Item = &'a str>) -> usize {
    keys.map(|k| display_key(k).len()).max().unwrap_or(0)
}

pub fn print_options(options: &SelectOptions, selected: Option<&str>) -> io::Result<()> {
    print_options_to(options, selected, &mut io::stdout().lock())
}

/// One option per line, key column padded. The selected option is marked.
pub fn print_options_to<W: Write>(
    options: &SelectOptions,
    selected: Option<&str>,
    writer: &mut W,
) -> io::Result<()> {
    let width = key_width(options.keys());
    for option in options.iter() {
        let marker = if selected == Some(option.key.as_str()) {
            "*".green().bold().to_string()
        } else {
            " ".to_string()
        };
        writeln!(
            writer,
            "{} {:<width$}  {}",
            marker,
            display_key(&option.key).cyan(),
            option.label,
            width = width
        )?;
    }
    Ok(())
}

pub fn print_form(form: &[FormElement]) -> io::Result<()> {
    print_form_to(form, &mut io::stdout().lock())
}

pub fn print_form_to<W: Write>(form: &[FormElement], writer: &mut W) -> io::Result<()> {
    for (i, element) in form.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        let (kind, selected): (&str, Vec<&str>) = match element {
            FormElement::Select { default_value, .. } => ("select", vec![default_value.as_str()]),
            FormElement::Checkboxes { default_value, .. } => (
                "checkboxes",
                default_value.iter().map(String::as_str).collect(),
            ),
        };
        writeln!(
            writer,
            "{} {}  {}",
            element.title().bold(),
            format!("[{}]", element.name()).dimmed(),
            kind.dimmed()
        )?;

        let width = key_width(element.options().keys());
        for option in element.options().iter() {
            let marker = if selected.contains(&option.key.as_str()) {
                "*".green().bold().to_string()
            } else {
                " ".to_string()
            };
            writeln!(
                writer,
                "  {} {:<width$}  {}",
                marker,
                display_key(&option.key).cyan(),
                option.label,
                width = width
            )?;
        }
    }
    Ok(())
}

pub fn print_resolution(
    restriction: &str,
    langcode: &str,
    ctx: &ResolutionContext,
    verbose: bool,
) -> io::Result<()> {
    print_resolution_to(restriction, langcode, ctx, verbose, &mut io::stdout().lock())
}

pub fn print_resolution_to<W: Write>(
    restriction: &str,
    langcode: &str,
    ctx: &ResolutionContext,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    if verbose {
        writeln!(writer, "interface language: {}", ctx.current_interface_langcode)?;
        writeln!(writer, "site default language: {}", ctx.site_default_langcode)?;
        writeln!(
            writer,
            "preferred language: {}",
            display_key(&ctx.acting_user_preferred_langcode)
        )?;
    }
    writeln!(writer, "restriction: {}", display_key(restriction))?;
    if langcode.is_empty() {
        writeln!(writer, "{} no language filter", SUCCESS_MARK.green())
    } else {
        writeln!(
            writer,
            "{} language: {}",
            SUCCESS_MARK.green(),
            langcode.bold()
        )
    }
}

pub fn print_referenceable(
    entities: &ReferenceableEntities,
    total: usize,
    langcode: &str,
) -> io::Result<()> {
    print_referenceable_to(entities, total, langcode, &mut io::stdout().lock())
}

/// Entities grouped under their bundle, then a one-line summary.
pub fn print_referenceable_to<W: Write>(
    entities: &ReferenceableEntities,
    total: usize,
    langcode: &str,
    writer: &mut W,
) -> io::Result<()> {
    let width = entities
        .bundles()
        .iter()
        .flat_map(|group| group.entities.iter().map(|e| e.id.len()))
        .max()
        .unwrap_or(0);

    for group in entities.bundles() {
        writeln!(writer, "{}", group.bundle.bold())?;
        for entity in &group.entities {
            writeln!(
                writer,
                "  {:>width$}  {}",
                entity.id.blue(),
                entity.label,
                width = width
            )?;
        }
    }

    let language = if langcode.is_empty() {
        "any language".to_string()
    } else {
        format!("language: {}", langcode)
    };
    let shown = entities.len();
    let summary = if shown < total {
        format!("{} of {} referenceable entities ({})", shown, total, language)
    } else {
        format!("{} referenceable entities ({})", total, language)
    };

    if total == 0 {
        writeln!(writer, "{} {}", FAILURE_MARK.yellow(), summary)
    } else {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), summary)
    }
}

pub fn print_validation(ids: &[String], accepted: &[String]) -> io::Result<()> {
    print_validation_to(ids, accepted, &mut io::stdout().lock())
}

pub fn print_validation_to<W: Write>(
    ids: &[String],
    accepted: &[String],
    writer: &mut W,
) -> io::Result<()> {
    for id in ids {
        if accepted.contains(id) {
            writeln!(writer, "{} {}", SUCCESS_MARK.green(), id)?;
        } else {
            writeln!(
                writer,
                "{} {} {}",
                FAILURE_MARK.red(),
                id,
                "is not referenceable".red()
            )?;
        }
    }
    Ok(())
}
