use numerals::{ParseReport, RewriteStep, RunTrace};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_report(report: &ParseReport, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", report.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Runs ━━━", ansi::GRAY));
    if report.runs.is_empty() {
        println!("{}", palette.dim("  No numeric runs found"));
    } else {
        for (idx, run) in report.runs.iter().enumerate() {
            print_run(idx, run, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&report.output, ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let reduce_total: std::time::Duration = report.runs.iter().map(|run| run.duration).sum();
    println!(
        "  Total: {}  │  Reduction: {}",
        palette.paint(format!("{:?}", report.elapsed), ansi::GREEN),
        palette.paint(format!("{:?}", reduce_total), ansi::CYAN),
    );
    println!();
}

fn print_run(idx: usize, run: &RunTrace, palette: &ansi::Palette) {
    println!(
        "  {} {} {} {}",
        palette.paint(format!("[{}]", idx), ansi::GRAY),
        palette.paint(run.tokens.join(" "), ansi::BLUE),
        palette.dim("│"),
        palette.paint(&run.pattern, ansi::YELLOW),
    );

    for step in &run.steps {
        println!("      {}", fmt_step(step, palette));
    }

    println!("      {} {}", palette.dim("=>"), palette.bold(palette.paint(run.output.join(" "), ansi::GREEN)));
}

fn fmt_step(step: &RewriteStep, palette: &ansi::Palette) -> String {
    let overflow = if step.overflowed { palette.paint(" (overflow, marked done)", ansi::YELLOW) } else { String::new() };
    format!(
        "{} {} {} {} {}{}",
        palette.paint(format!("{:<8}", step.before), ansi::YELLOW),
        palette.dim(format!("{}@{}", step.matched, step.index)),
        palette.paint(step.combinator.name(), ansi::CYAN),
        palette.dim("→"),
        palette.paint(&step.after, ansi::YELLOW),
        overflow,
    )
}
