//! CLI command for the moonlight analysis report
//!
//! Builds a profile from the arguments, falling back to the configured
//! default profile for anything left out, and prints the templated report.

use clap::Args;
use tracing::info;

use crate::config::settings::Settings;
use crate::display::format_analysis;
use crate::error::LedgerResult;
use crate::models::profile::{MAX_AGE, MIN_AGE};
use crate::models::{Gender, Major, Profile};
use crate::session::Session;

/// Arguments for `moonlight report`
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Gender (男/女/其他 or male/female/other)
    #[arg(short, long)]
    pub gender: Option<Gender>,

    /// Age, 18 to 40
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(i64::from(MIN_AGE)..=i64::from(MAX_AGE)))]
    pub age: Option<u8>,

    /// Major (理工/文史/经管/艺术/其他 or science/humanities/business/arts/other)
    #[arg(short, long)]
    pub major: Option<Major>,

    /// Uses a budgeting tool
    #[arg(long)]
    pub budgeting: bool,

    /// Keeps spending records
    #[arg(long)]
    pub records: bool,

    /// Print with markdown emphasis
    #[arg(long)]
    pub markdown: bool,
}

impl ReportArgs {
    /// Resolve the profile the report is generated for
    pub fn profile(&self, defaults: &Profile) -> Profile {
        Profile::new(
            self.gender.unwrap_or(defaults.gender),
            self.age.unwrap_or(defaults.age),
            self.major.unwrap_or(defaults.major),
        )
        .with_habits(self.budgeting, self.records)
    }
}

/// Render the report text for the given arguments
pub fn render_report(args: &ReportArgs, settings: &Settings) -> String {
    let session = Session::new(args.profile(&settings.default_profile));
    let report = session.analysis_report();
    format_analysis(&report, args.markdown)
}

/// Handle `moonlight report`
pub fn handle_report_command(args: ReportArgs, settings: &Settings) -> LedgerResult<()> {
    let text = render_report(&args, settings);
    info!(markdown = args.markdown, "report printed");
    print!("{}", text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_settings() {
        let mut settings = Settings::default();
        settings.default_profile = Profile::new(Gender::Female, 33, Major::Arts);

        let args = ReportArgs {
            major: Some(Major::Business),
            records: true,
            ..ReportArgs::default()
        };
        let profile = args.profile(&settings.default_profile);

        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.age, 33);
        assert_eq!(profile.major, Major::Business);
        assert!(profile.keeps_records);
        assert!(!profile.uses_budgeting_tool);
    }

    #[test]
    fn test_render_report() {
        let args = ReportArgs {
            gender: Some(Gender::Female),
            age: Some(25),
            major: Some(Major::Business),
            records: true,
            ..ReportArgs::default()
        };
        let text = render_report(&args, &Settings::default());

        assert!(text.contains("25岁 女性 经管专业"));
        assert!(text.contains("无理财 | 有记账"));
        assert!(text.contains("降低30%"));
        assert!(text.contains("理财工具的使用"));
    }
}
