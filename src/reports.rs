use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use corpusforge::comparator::Verdict;
use corpusforge::config::GenParams;
use corpusforge::table::FrequencyTable;

pub fn print_generation_summary(table: &FrequencyTable, params: &GenParams) {
    let mut summary = Table::new();
    summary
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    summary.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan),
    ]);
    summary.add_row(vec![Cell::new("Items emitted"), Cell::new(table.total())]);
    summary.add_row(vec![Cell::new("Distinct forms"), Cell::new(table.len())]);
    summary.add_row(vec![
        Cell::new("Token vocab"),
        Cell::new(params.token_vocab_size),
    ]);
    summary.add_row(vec![
        Cell::new("Phrase vocab"),
        Cell::new(params.phrase_vocab_size),
    ]);
    summary.add_row(vec![
        Cell::new("Line-break chance"),
        Cell::new(format!("1/{}", params.line_break_denominator)),
    ]);

    if let Some(col) = summary.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", summary);

    // Heaviest forms first, to eyeball the skew shape.
    let mut entries = table.sorted_entries();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut top = Table::new();
    top.load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    top.add_row(vec![
        Cell::new("Top Form").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
    ]);
    for (form, count) in entries.into_iter().take(10) {
        top.add_row(vec![Cell::new(form), Cell::new(count)]);
    }
    if let Some(col) = top.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("{}", top);
}

pub fn print_verdict(verdict: &Verdict) {
    match verdict {
        Verdict::Pass => println!("\n✅ PASS"),
        fail => println!("\n❌ {}", fail),
    }
}
