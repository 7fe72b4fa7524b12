use std::collections::HashSet;

/// Drop repeated report lines, keeping the first occurrence of each.
///
/// Lines are compared by exact text, so lines that differ only in trailing
/// whitespace are both kept. Each survivor carries its 1-based position in
/// the original report.
pub fn unique_lines<'a, I>(lines: I) -> Vec<(usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| seen.insert(*line))
        .map(|(idx, line)| (idx + 1, line))
        .collect()
}
