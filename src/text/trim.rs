/// Strip trailing spaces from every line. Tabs and line breaks are kept.
pub fn trim_trailing_spaces_per_line(s: &str) -> String {
    s.split('\n')
        .map(|line| line.trim_end_matches(' '))
        .collect::<Vec<_>>()
        .join("\n")
}
