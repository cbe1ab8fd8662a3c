use cellsort_core::session::{Phase, Session};
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    zero: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            zero: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Per-label crop counts and the output folder, printed when the run ends.
pub fn print_session_summary(session: &Session) {
    let s = Styles::new();
    let heading = match session.phase() {
        Phase::Terminating => "Session ended early",
        _ => "Session complete",
    };

    println!();
    println!("  {}", s.title.apply_to(heading));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(heading.chars().count())));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Images"),
        s.value.apply_to(session.image_count())
    );
    for (label, count) in session.counters().iter() {
        let style = if count == 0 { &s.zero } else { &s.value };
        println!("  {:<14}{}", s.label.apply_to(label), style.apply_to(count));
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Total"),
        s.value.apply_to(session.counters().total())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(session.output().root().display())
    );
    println!();
}
