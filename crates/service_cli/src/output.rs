//! Plan rendering for the terminal
//!
//! Tables use the display strings from `sizing_core::display`; JSON and CSV
//! carry full-precision values.

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use sizing_core::advice::{best_practices, HEADING};
use sizing_core::display::FormattedPlan;
use sizing_core::types::{RiskInput, RiskPlan};

use crate::{CliError, Result};

/// Output format for the `plan` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            ))),
        }
    }
}

/// Input and plan serialised together for JSON output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanReport<'a> {
    input: &'a RiskInput,
    plan: &'a RiskPlan,
}

/// Render `plan` in the requested format
pub fn write_plan<W: Write>(
    out: &mut W,
    format: OutputFormat,
    input: &RiskInput,
    plan: &RiskPlan,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_table(out, input, plan),
        OutputFormat::Json => write_json(out, input, plan),
        OutputFormat::Csv => write_csv(out, plan),
    }
}

const LABEL_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 14;
const COLUMN_WIDTH: usize = 10;

/// Summary block followed by the per-trade table
pub fn write_table<W: Write>(out: &mut W, input: &RiskInput, plan: &RiskPlan) -> Result<()> {
    let formatted = FormattedPlan::from_plan(plan);

    writeln!(out, "{}", formatted.suggestion)?;
    if !input.notes.is_empty() {
        writeln!(out, "Notes: {}", input.notes)?;
    }

    let label_rule = "─".repeat(LABEL_WIDTH + 2);
    let value_rule = "─".repeat(VALUE_WIDTH + 2);
    writeln!(out)?;
    writeln!(out, "┌{}┬{}┐", label_rule, value_rule)?;
    for row in &formatted.summary {
        writeln!(
            out,
            "│ {:<lw$} │ {:>vw$} │",
            row.label,
            row.value,
            lw = LABEL_WIDTH,
            vw = VALUE_WIDTH
        )?;
    }
    writeln!(out, "└{}┴{}┘", label_rule, value_rule)?;

    let rule = "─".repeat(COLUMN_WIDTH + 2);
    let headers = ["Trade", "Risk", "SL (pips)", "TP (pips)", "Reward"];
    writeln!(out)?;
    writeln!(out, "┌{}┐", [rule.as_str(); 5].join("┬"))?;
    writeln!(out, "{}", table_row(&headers))?;
    writeln!(out, "├{}┤", [rule.as_str(); 5].join("┼"))?;
    for line in &formatted.trades {
        writeln!(
            out,
            "{}",
            table_row(&[
                line.trade.as_str(),
                line.risk_amount.as_str(),
                line.sl_pips.as_str(),
                line.tp_pips.as_str(),
                line.reward_amount.as_str(),
            ])
        )?;
    }
    writeln!(out, "└{}┘", [rule.as_str(); 5].join("┴"))?;
    Ok(())
}

fn table_row(cells: &[&str]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            if i == 0 {
                format!(" {:<w$} ", cell, w = COLUMN_WIDTH)
            } else {
                format!(" {:>w$} ", cell, w = COLUMN_WIDTH)
            }
        })
        .collect();
    format!("│{}│", cells.join("│"))
}

/// Pretty JSON of the input and plan
pub fn write_json<W: Write>(out: &mut W, input: &RiskInput, plan: &RiskPlan) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &PlanReport { input, plan })?;
    writeln!(out)?;
    Ok(())
}

/// The per-trade schedule as CSV with a header row
pub fn write_csv<W: Write>(out: &mut W, plan: &RiskPlan) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for line in &plan.trade_lines {
        writer.serialize(line)?;
    }
    writer.flush()?;
    Ok(())
}

/// The best-practice list, numbered
pub fn write_advice<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", HEADING)?;
    for (i, practice) in best_practices().iter().enumerate() {
        writeln!(out, "{:>2}. {}", i + 1, practice)?;
    }
    Ok(())
}
