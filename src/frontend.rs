//! output/error reporting and formatting

use std::fmt;
use std::iter;
use std::fmt::Formatter;
use crate::utils;
use crate::lexer::Span;
use crate::parser::ParserError;


pub fn render_parser_error<'a>(error: &'a ParserError, source_text: &'a str) -> impl fmt::Display + 'a {
    utils::delegate_fmt(move |fmt| fmt_parser_error(fmt, error, source_text))
}

pub fn fmt_parser_error(fmt: &mut Formatter<'_>, error: &ParserError, source_text: &str) -> fmt::Result {
    // Write error message
    let message = utils::title_case_string(&error.to_string());
    write!(fmt, "{}.\n\n", message)?;

    // Write source line
    fmt_source_lines(fmt, error.span(), source_text)
}

pub fn print_source_errors(source_text: &str, errors: &[ParserError]) {
    for error in errors.iter() {
        println!("{}", render_parser_error(error, source_text));
    }
}


// spans count chars, not bytes
fn fmt_source_lines(fmt: &mut Formatter<'_>, span: &Span, source_text: &str) -> fmt::Result {
    let mut start_idx = 0;
    for (num, raw_line) in source_text.split_inclusive('\n').enumerate() {
        let line_len = raw_line.chars().count();
        let end_index = start_idx + line_len; // of current line

        let in_span =
            span.index < end_index && span.end() > start_idx
            // zero-length spans (EOF) are shown at the end of the last line
            || span.length == 0 && span.index >= start_idx && span.index <= end_index;

        if in_span {
            let margin = format!("{: >3}", num + 1);
            let source_line = raw_line.trim_end();
            let line_width = source_line.chars().count();

            let start_col = span.index.saturating_sub(start_idx).min(line_width);
            let end_col = (span.end() - start_idx).min(line_width).max(start_col + 1);

            let mut marker = String::new();
            marker.extend(iter::repeat(' ').take(margin.len()));
            marker.push_str("     ");

            marker.extend(iter::repeat(' ').take(start_col));
            marker.extend(iter::repeat('^').take(end_col - start_col));

            writeln!(fmt, "{}|    {}", margin, source_line)?;
            writeln!(fmt, "{}", marker)?;
        }

        start_idx = end_index;
    }

    Ok(())
}
