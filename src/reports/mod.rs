use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stylogram::scorer::{AuthorLabel, LabelCounts, Segment, WindowReport};

fn label_cell(label: AuthorLabel) -> Cell {
    let cell = Cell::new(label.to_string());
    match label {
        AuthorLabel::CandidateA => cell.fg(Color::Green),
        AuthorLabel::CandidateB => cell.fg(Color::Red),
        AuthorLabel::Neither => cell.fg(Color::DarkGrey),
    }
}

pub fn print_window_report(windows: &[WindowReport], limit: usize) {
    println!("\n=== Sliding window report ===");
    if windows.is_empty() {
        println!("(No windows produced: accused text is too short.)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Window").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Label"),
        Cell::new("Snippet"),
    ]);

    for report in windows.iter().take(limit) {
        table.add_row(vec![
            Cell::new(format!("[{}:{})", report.start, report.end)),
            Cell::new(format!("{:7.3}", report.score)).set_alignment(CellAlignment::Right),
            label_cell(report.label),
            Cell::new(&report.snippet),
        ]);
    }
    println!("{}", table);

    if windows.len() > limit {
        println!("... ({} more windows)", windows.len() - limit);
    }
}

pub fn print_word_labels(tokens: &[String], labels: &[AuthorLabel], per_line: usize) {
    println!("\n=== Word-level labels ===");
    if tokens.is_empty() {
        println!("(No tokens.)");
        return;
    }

    let per_line = per_line.max(1);
    for (chunk_words, chunk_labels) in tokens.chunks(per_line).zip(labels.chunks(per_line)) {
        let line: Vec<String> = chunk_words
            .iter()
            .zip(chunk_labels)
            .map(|(word, label)| format!("{}({})", word, label.short()))
            .collect();
        println!("{}", line.join("  "));
    }
}

pub fn print_segment_report(segments: &[Segment]) {
    println!("\n=== Detected segments ===");
    if segments.is_empty() {
        println!("(No segments.)");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Words"),
        Cell::new("Text"),
    ]);

    for seg in segments {
        table.add_row(vec![
            label_cell(seg.label),
            Cell::new(format!("[{}:{})", seg.start, seg.end)),
            Cell::new(&seg.text),
        ]);
    }
    println!("{}", table);
}

pub fn print_summary(window_counts: &LabelCounts, word_counts: &LabelCounts) {
    println!("\n=== Summary ===");

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("").add_attribute(Attribute::Bold),
        Cell::new("A").fg(Color::Green),
        Cell::new("B").fg(Color::Red),
        Cell::new("NEITHER").fg(Color::DarkGrey),
        Cell::new("Total").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Windows"),
        Cell::new(window_counts.candidate_a),
        Cell::new(window_counts.candidate_b),
        Cell::new(window_counts.neither),
        Cell::new(window_counts.total()),
    ]);
    table.add_row(vec![
        Cell::new("Words"),
        Cell::new(word_counts.candidate_a),
        Cell::new(word_counts.candidate_b),
        Cell::new(word_counts.neither),
        Cell::new(word_counts.total()),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", table);
}
