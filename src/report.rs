//! Plain-text report tables.
//!
//! One column per player-count configuration: a turns table, a captures
//! table, and the most popular squares.

use std::fmt::{self, Write};

use crate::board::Board;
use crate::core::config::SimulationConfig;
use crate::sim::TrialSummary;
use crate::stats::StatSummary;

const COLUMN: usize = 10;
const RULE: &str = "---------";

/// Format an integer with `,` thousands separators.
///
/// ```
/// use nellie_sim::report::group_digits;
///
/// assert_eq!(group_digits(1_048_576), "1,048,576");
/// assert_eq!(group_digits(999), "999");
/// ```
#[must_use]
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Render the full report to a string.
#[must_use]
pub fn render(board: &Board, summaries: &[TrialSummary], config: &SimulationConfig) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, board, summaries, config);
    out
}

/// Write the full report.
///
/// `config` supplies the popular-squares row count and the give-up bound
/// named in clamp notes.
pub fn write_report<W: Write>(
    out: &mut W,
    board: &Board,
    summaries: &[TrialSummary],
    config: &SimulationConfig,
) -> fmt::Result {
    for s in summaries {
        writeln!(
            out,
            "{} games with {} players took {} turns ({:.3} avg, {:.3} stdev)",
            group_digits(s.total_games),
            s.players,
            group_digits(s.total_turns),
            s.turns.mean,
            s.turns.std_dev,
        )?;
        if s.clamped_turns > 0 || s.clamped_captures > 0 {
            writeln!(
                out,
                "    clamped at {}: {} winner turn counts, {} capture counts",
                config.give_up_bound,
                group_digits(s.clamped_turns),
                group_digits(s.clamped_captures),
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "turns")?;
    write_stat_table(out, summaries, |s| &s.turns)?;

    writeln!(out)?;
    writeln!(out, "captures")?;
    write_stat_table(out, summaries, |s| &s.captures)?;

    writeln!(out)?;
    writeln!(out, "most popular squares")?;
    write_popularity(out, board, summaries, config.top_squares)
}

fn write_stat_table<W, F>(out: &mut W, summaries: &[TrialSummary], select: F) -> fmt::Result
where
    W: Write,
    F: Fn(&TrialSummary) -> &StatSummary,
{
    write!(out, "{:9}", "")?;
    for s in summaries {
        write!(out, " {:>3} player", s.players)?;
    }
    writeln!(out)?;
    write!(out, "{}", RULE)?;
    for _ in summaries {
        write!(out, " {}-", RULE)?;
    }
    writeln!(out)?;

    let row = |out: &mut W, label: &str, value: &dyn Fn(&StatSummary) -> String| -> fmt::Result {
        write!(out, "{:<9}", label)?;
        for s in summaries {
            write!(out, " {:>width$}", value(select(s)), width = COLUMN)?;
        }
        writeln!(out)
    };

    row(out, "Min:", &|st: &StatSummary| st.min.to_string())?;
    for (ix, (label, _)) in StatSummary::default().percentiles().iter().enumerate() {
        row(out, &format!("{}:", label), &|st: &StatSummary| st.percentiles()[ix].1.to_string())?;
    }
    row(out, "Max:", &|st: &StatSummary| st.max.to_string())?;
    row(out, "Mean:", &|st: &StatSummary| format!("{:.3}", st.mean))?;
    row(out, "Stdev:", &|st: &StatSummary| format!("{:.3}", st.std_dev))
}

fn write_popularity<W: Write>(out: &mut W, board: &Board, summaries: &[TrialSummary], top: usize) -> fmt::Result {
    write!(out, "   ")?;
    for s in summaries {
        write!(out, " {:<40}", format!("{} player", s.players))?;
    }
    writeln!(out)?;
    write!(out, "   ")?;
    for _ in summaries {
        write!(out, " {:<40}", format!("{:>11} {:>3} {:<20} {:>3}", "cnt", "loc", "name", "ofs"))?;
    }
    writeln!(out)?;
    write!(out, "   ")?;
    for _ in summaries {
        write!(out, " ----------- --- -------------------- ---")?;
    }
    writeln!(out)?;

    let rows = summaries.iter().map(|s| s.popular.len()).min().unwrap_or(0).min(top);
    for rank in 0..rows {
        write!(out, "{:<2} ", rank + 1)?;
        for s in summaries {
            let entry = s.popular[rank];
            let space = &board[entry.square];
            write!(
                out,
                " {:>11} {:>3} {:<20.20} {:>+3}",
                group_digits(entry.count),
                space.day,
                space.name,
                space.offset,
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}
