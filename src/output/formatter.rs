//! Output formatters for scores and rankings

use crate::config::OutputFormat;
use crate::error::Result;
use crate::processing::analyzer::{BatchRanking, ScoreReport};
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;

/// Trait for rendering screening results
pub trait OutputFormatter {
    fn format_score(&self, name: &str, report: &ScoreReport) -> Result<String>;
    fn format_ranking(&self, ranking: &BatchRanking) -> Result<String>;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    pretty: bool,
}

/// A single score tagged with the document it belongs to
#[derive(Serialize)]
struct NamedReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    report: &'a ScoreReport,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".blue().bold(), title.blue().bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_score_badge(&self, score: f64) -> String {
        let (badge, color) = match score {
            s if s >= 90.0 => ("EXCELLENT", Color::Green),
            s if s >= 75.0 => ("STRONG", Color::BrightGreen),
            s if s >= 50.0 => ("PARTIAL", Color::Yellow),
            s if s >= 25.0 => ("WEAK", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_component(label: &str, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("  • {}: {:.1}%\n", label, v * 100.0),
            None => format!("  • {}: not required\n", label),
        }
    }

    fn format_list(items: &[String]) -> String {
        if items.is_empty() {
            "none".to_string()
        } else {
            items.join(", ")
        }
    }

    fn format_details(&self, report: &ScoreReport) -> String {
        let mut output = String::new();
        output.push_str(&format!("  • Skills: {}\n", Self::format_list(&report.skills)));
        output.push_str(&format!("  • Experience: {} years\n", report.experience));
        output.push_str(&format!("  • Education: {}\n", Self::format_list(&report.education)));

        if self.detailed {
            let breakdown = &report.breakdown;
            output.push_str(&Self::format_component("Skill match", Some(breakdown.skill_score)));
            output.push_str(&Self::format_component("Experience match", breakdown.experience_score));
            output.push_str(&Self::format_component("Education match", breakdown.education_score));
            output.push_str(&format!(
                "  • Matched skills: {}\n",
                self.colorize(&Self::format_list(&breakdown.matched_skills), Color::Green)
            ));
            output.push_str(&format!(
                "  • Missing skills: {}\n",
                self.colorize(&Self::format_list(&breakdown.missing_skills), Color::Red)
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_score(&self, name: &str, report: &ScoreReport) -> Result<String> {
        let mut output = self.format_header("RESUME MATCH");
        output.push_str(&format!(
            "{}: {:.2}% {}\n",
            name,
            report.score,
            self.format_score_badge(report.score)
        ));
        output.push_str(&self.format_details(report));
        Ok(output)
    }

    fn format_ranking(&self, ranking: &BatchRanking) -> Result<String> {
        let mut output = self.format_header("RESUME RANKING");

        if ranking.ranked.is_empty() {
            output.push_str("No resumes could be scored.\n");
        }

        for (position, entry) in ranking.ranked.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} {:.2}% {}\n",
                position + 1,
                entry.name,
                entry.report.score,
                self.format_score_badge(entry.report.score)
            ));
            if self.detailed {
                output.push_str(&self.format_details(&entry.report));
            }
        }

        if !ranking.failed.is_empty() {
            output.push_str(&format!("\n{}\n", self.colorize("Not scored:", Color::Yellow)));
            for failure in &ranking.failed {
                output.push_str(&format!("  • {}: {}\n", failure.name, failure.error));
            }
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_score(&self, name: &str, report: &ScoreReport) -> Result<String> {
        self.to_json(&NamedReport { name, report })
    }

    fn format_ranking(&self, ranking: &BatchRanking) -> Result<String> {
        self.to_json(ranking)
    }
}

/// Picks the formatter for the requested output format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
        }
    }

    pub fn score_report(
        &self,
        name: &str,
        report: &ScoreReport,
        format: OutputFormat,
    ) -> Result<String> {
        self.formatter(format).format_score(name, report)
    }

    pub fn ranking_report(&self, ranking: &BatchRanking, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_ranking(ranking)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
