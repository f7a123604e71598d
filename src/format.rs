/// Render rows as an aligned text table: header, dashed separator, one line per row.
///
/// Each column is as wide as its widest cell, header included. Cells are
/// left-aligned and padded, so every line of the output has the same width.
pub fn format_table<S: AsRef<str>>(columns: &[S], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.as_ref().chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.chars().count();
            match widths.get_mut(i) {
                Some(max) => *max = (*max).max(w),
                None => widths.push(w),
            }
        }
    }

    let render = |cells: &[&str]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(i, &w)| format!("{:<w$}", cells.get(i).copied().unwrap_or("")))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header: Vec<&str> = columns.iter().map(|c| c.as_ref()).collect();
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(render(&header));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(render(&cells));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn header_only_when_no_rows() {
        let out = format_table(&["id", "name"], &[]);
        assert_eq!(out, "id | name\n---+-----");
    }

    #[test]
    fn widths_follow_the_widest_cell() {
        let rows = vec![
            row(&["1", "Bako Tumi", "34", "$45,000", "03/14/2011"]),
            row(&["10", "Ri Lo", "5", "$150,000", "12/01/2020"]),
        ];
        let out = format_table(&["id", "name", "age", "salary", "hire_date"], &rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id | name      | age | salary   | hire_date ");
        assert_eq!(lines[1], "---+-----------+-----+----------+-----------");
        assert_eq!(lines[2], "1  | Bako Tumi | 34  | $45,000  | 03/14/2011");
        assert_eq!(lines[3], "10 | Ri Lo     | 5   | $150,000 | 12/01/2020");
    }

    #[test]
    fn all_lines_share_one_width() {
        let rows = vec![row(&["1", "Ämelie Ørsted"]), row(&["200", "Al"])];
        let out = format_table(&["id", "name"], &rows);
        let widths: Vec<usize> = out.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{widths:?}");
    }

    #[test]
    fn deterministic_for_same_input() {
        let rows = vec![row(&["1", "x"])];
        assert_eq!(format_table(&["a", "b"], &rows), format_table(&["a", "b"], &rows));
    }
}
