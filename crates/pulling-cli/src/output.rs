use serde::Serialize;

/// Maneuver descriptions run to several sentences; the last column wraps here.
pub const WRAP_WIDTH: usize = 72;

const GAP: &str = "  ";

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    print!("{}", render_table(headers, &rows, WRAP_WIDTH));
}

/// Lay out `rows` under `headers`. Widths are counted in characters, since
/// element names carry accents. The last column is word-wrapped to `wrap`
/// characters, continuation lines indented under it.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], wrap: usize) -> String {
    let last = headers.len().saturating_sub(1);

    let mut widths: Vec<usize> = headers.iter().map(|h| chars(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(last) {
            widths[i] = widths[i].max(chars(cell));
        }
    }
    let indent: usize = widths[..last].iter().map(|w| w + GAP.len()).sum();

    let mut out = String::new();
    push_line(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    push_line(&mut out, widths.iter().map(|&w| "-".repeat(w.max(1))), &widths);

    for row in rows {
        let lead = row.iter().take(last).cloned();
        let text = row.get(last).map(String::as_str).unwrap_or("");
        let mut lines = wrap_words(text, wrap).into_iter();
        push_line(
            &mut out,
            lead.chain(std::iter::once(lines.next().unwrap_or_default())),
            &widths,
        );
        for rest in lines {
            out.push_str(&" ".repeat(indent));
            out.push_str(&rest);
            out.push('\n');
        }
    }
    out
}

fn chars(s: &str) -> usize {
    s.chars().count()
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .enumerate()
        .map(|(i, cell)| {
            let w = widths.get(i).copied().unwrap_or(0);
            format!("{cell:w$}")
        })
        .collect();
    out.push_str(padded.join(GAP).trim_end());
    out.push('\n');
}

/// Greedy word wrap. A single word longer than `width` gets a line of its own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && chars(&line) + 1 + chars(word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
