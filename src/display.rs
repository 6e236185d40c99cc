use std::io::{self, Write};

use crate::condition::SearchCondition;
use crate::search::SearchResult;

const SEPARATOR: &str = "--------------------------------------";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";

/// Writes the summary line followed by one block per result.
pub fn print_report<W: Write>(
    out: &mut W,
    condition: &SearchCondition,
    results: &[SearchResult],
) -> io::Result<()> {
    writeln!(out, "{}", summary_line(condition, results.len()))?;

    for (i, result) in results.iter().enumerate() {
        print_result(out, i + 1, result)?;
    }

    Ok(())
}

pub fn summary_line(condition: &SearchCondition, count: usize) -> String {
    let period = format!("{} ~ {}", or_dash(&condition.from), or_dash(&condition.to));
    let who = if condition.username.is_empty() {
        "everyone"
    } else {
        condition.username.as_str()
    };

    match (condition.has_search_word(), condition.has_reaction()) {
        (true, true) => format!(
            "{}: {} said \"{}\" and got {} on {} messages.",
            period, who, condition.search_word, condition.reaction, count
        ),
        (true, false) => format!(
            "{}: {} said \"{}\" {} times.",
            period, who, condition.search_word, count
        ),
        (false, true) => format!(
            "{}: {} got {} on {} messages.",
            period, who, condition.reaction, count
        ),
        (false, false) => format!("{}: {} messages matched.", period, count),
    }
}

pub fn print_result<W: Write>(out: &mut W, index: usize, result: &SearchResult) -> io::Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(
        out,
        "No: {} {} in {}",
        index,
        result.datetime.format(DATETIME_FORMAT),
        result.channel
    )?;
    writeln!(out, "link: {}", result.permalink)?;
    writeln!(out, "{}", neutralize_code_fences(&result.text))?;
    writeln!(out)
}

/// Replaces literal triple backticks with `---`.
pub fn neutralize_code_fences(text: &str) -> String {
    text.replace("```", "---")
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
