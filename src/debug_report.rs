use parsstem::{Stage, StemTrace};

/// SGR parameters, named by what they mark in the report.
mod sgr {
    pub const BOLD: u8 = 1;
    pub const DIM: u8 = 2;
    pub const STEM: u8 = 32;
    pub const NOTE: u8 = 33;
    pub const COUNT: u8 = 34;
    pub const TITLE: u8 = 36;
    pub const RULE: u8 = 90;
}

struct Palette {
    enabled: bool,
}

impl Palette {
    fn paint(&self, s: impl AsRef<str>, params: &[u8]) -> String {
        if !self.enabled || params.is_empty() {
            return s.as_ref().to_string();
        }
        let params: Vec<String> = params.iter().map(u8::to_string).collect();
        format!("\x1b[{}m{}\x1b[0m", params.join(";"), s.as_ref())
    }

    fn section(&self, name: &str) -> String {
        self.paint(format!("━━━ {name} ━━━"), &[sgr::RULE])
    }
}

pub fn print_trace(trace: &StemTrace, color: bool) {
    let palette = Palette { enabled: color };
    println!("\n{}", palette.paint(format!("⚙  Stemming: \"{}\"", trace.input), &[sgr::BOLD, sgr::TITLE]));
    if trace.normalized != trace.input {
        println!("  {} \"{}\"", palette.paint("normalized:", &[sgr::DIM]), trace.normalized);
    }

    println!("\n{}", palette.section("Decision"));
    println!(
        "  {} {}  {} {}",
        palette.paint(&trace.stem, &[sgr::BOLD, sgr::STEM]),
        palette.paint("│ stage:", &[sgr::DIM]),
        palette.paint(trace.stage.as_str(), &[stage_param(trace.stage)]),
        if trace.terminated { palette.paint("(terminal rule)", &[sgr::NOTE]) } else { String::new() },
    );

    if !trace.candidates.is_empty() {
        println!("\n{}", palette.section("Candidates"));
        for (idx, candidate) in trace.candidates.iter().enumerate() {
            let marker =
                if *candidate == trace.stem { palette.paint("✓", &[sgr::STEM]) } else { palette.paint("·", &[sgr::DIM]) };
            println!("  {} {} {}", palette.paint(format!("[{idx}]"), &[sgr::RULE]), marker, candidate);
        }
    }

    let metrics = &trace.metrics;
    if metrics.rules_considered > 0 {
        println!("\n{}", palette.section("Rules"));
        println!(
            "  Considered: {}  │  Matched: {}  │  Alternatives: {}",
            palette.paint(metrics.rules_considered.to_string(), &[sgr::COUNT]),
            palette.paint(metrics.rules_matched.to_string(), &[sgr::NOTE]),
            palette.paint(metrics.alternatives_tried.to_string(), &[sgr::DIM]),
        );
    }

    println!("\n{}", palette.section("Timing"));
    println!("  Total: {}", palette.paint(format!("{:?}", trace.elapsed), &[sgr::STEM]));
    println!();
}

fn stage_param(stage: Stage) -> u8 {
    match stage {
        Stage::Empty | Stage::Passthrough | Stage::Unresolved => sgr::RULE,
        Stage::Cache => sgr::TITLE,
        Stage::Lexicon | Stage::BrokenPlural | Stage::Fallback => sgr::COUNT,
        Stage::Rules | Stage::Verb | Stage::Disambiguated => sgr::NOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_palette_leaves_text_alone() {
        let palette = Palette { enabled: false };
        assert_eq!(palette.paint("کتاب", &[sgr::BOLD, sgr::STEM]), "کتاب");
        assert_eq!(palette.section("Rules"), "━━━ Rules ━━━");
    }

    #[test]
    fn enabled_palette_joins_parameters() {
        let palette = Palette { enabled: true };
        assert_eq!(palette.paint("کتاب", &[sgr::BOLD, sgr::STEM]), "\x1b[1;32mکتاب\x1b[0m");
        assert_eq!(palette.paint("x", &[]), "x");
    }
}
