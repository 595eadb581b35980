//! Moonlight analysis report
//!
//! A canned, templated paragraph about "月光" (spending a whole paycheck
//! before the next one) built from the profile alone. Ledger data is never
//! consulted. Every branch of the template is a small total function over
//! the profile's habit answers so the wording can be tested on its own.

use std::fmt;

use crate::models::Profile;

/// Caption shown under the dashboard title
pub const RESEARCH_CAPTION: &str = "研究显示：月光现象与理财/记账习惯相关性高于人口统计学因素";

/// Status line of the prediction tab, which has no model behind it yet
pub const PREDICTION_STATUS: &str = "正在开发中...";

/// Explanation shown under `PREDICTION_STATUS`
pub const PREDICTION_NOTE: &str = "基于您的研究数据，将预测月光概率";

/// The two habit answers as one tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HabitPair {
    /// Neither budgets nor keeps records
    Neither,
    /// Uses a budgeting tool but keeps no records
    BudgetsOnly,
    /// Keeps records but uses no budgeting tool
    RecordsOnly,
    /// Does both
    Both,
}

impl HabitPair {
    pub fn from_flags(uses_budgeting_tool: bool, keeps_records: bool) -> Self {
        match (uses_budgeting_tool, keeps_records) {
            (false, false) => Self::Neither,
            (true, false) => Self::BudgetsOnly,
            (false, true) => Self::RecordsOnly,
            (true, true) => Self::Both,
        }
    }

    pub fn from_profile(profile: &Profile) -> Self {
        Self::from_flags(profile.uses_budgeting_tool, profile.keeps_records)
    }

    pub fn uses_budgeting_tool(&self) -> bool {
        matches!(self, Self::BudgetsOnly | Self::Both)
    }

    pub fn keeps_records(&self) -> bool {
        matches!(self, Self::RecordsOnly | Self::Both)
    }

    /// Which area the third finding tells the user to watch
    ///
    /// `BudgetsOnly` lands in the same bucket as `Neither`; that collapse is
    /// the long-standing wording and is kept as is.
    pub fn recommendation(&self) -> Recommendation {
        match self {
            Self::Neither | Self::BudgetsOnly => Recommendation::NonEssentialSpending,
            Self::RecordsOnly => Recommendation::FinancialTools,
            Self::Both => Recommendation::SpendingStructure,
        }
    }
}

/// Recommendation bucket of the third finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    NonEssentialSpending,
    FinancialTools,
    SpendingStructure,
}

impl Recommendation {
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::NonEssentialSpending => "非必要消费（特别是娱乐和服饰类）",
            Self::FinancialTools => "理财工具的使用（如货币基金）",
            Self::SpendingStructure => "消费结构的优化（必要/非必要支出比）",
        }
    }
}

/// First finding: what the moonlight risk mostly relates to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskFocus {
    FinancialHabits,
    SpendingStructure,
}

impl RiskFocus {
    pub fn for_budgeting(uses_budgeting_tool: bool) -> Self {
        if uses_budgeting_tool {
            Self::FinancialHabits
        } else {
            Self::SpendingStructure
        }
    }

    pub fn phrase(&self) -> &'static str {
        match self {
            Self::FinancialHabits => "理财习惯",
            Self::SpendingStructure => "消费结构",
        }
    }
}

/// Second finding: how record keeping moves the moonlight odds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKeepingEffect {
    /// Keeping records lowers the odds by 30%
    Lowers,
    /// Not keeping records raises the odds by 45%
    Raises,
}

impl RecordKeepingEffect {
    pub fn for_records(keeps_records: bool) -> Self {
        if keeps_records {
            Self::Lowers
        } else {
            Self::Raises
        }
    }

    pub fn habit_phrase(&self) -> &'static str {
        match self {
            Self::Lowers => "记账",
            Self::Raises => "不记账",
        }
    }

    pub fn effect_phrase(&self) -> &'static str {
        match self {
            Self::Lowers => "降低30%",
            Self::Raises => "增加45%",
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "有"
    } else {
        "无"
    }
}

/// The generated report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub profile: Profile,
    pub habits: HabitPair,
    pub risk_focus: RiskFocus,
    pub record_keeping: RecordKeepingEffect,
    pub recommendation: Recommendation,
}

impl AnalysisReport {
    /// Build the report for a profile
    pub fn generate(profile: &Profile) -> Self {
        let habits = HabitPair::from_profile(profile);
        Self {
            profile: *profile,
            habits,
            risk_focus: RiskFocus::for_budgeting(habits.uses_budgeting_tool()),
            record_keeping: RecordKeepingEffect::for_records(habits.keeps_records()),
            recommendation: habits.recommendation(),
        }
    }

    pub fn title(&self) -> &'static str {
        "月光行为分析报告（基于您的画像）"
    }

    /// Segment 1: echo of the basic profile fields
    pub fn basic_line(&self) -> String {
        format!(
            "{}岁 {}性 {}专业",
            self.profile.age, self.profile.gender, self.profile.major
        )
    }

    /// Segment 2: echo of the two habits
    pub fn habits_line(&self) -> String {
        format!(
            "{}理财 | {}记账",
            yes_no(self.habits.uses_budgeting_tool()),
            yes_no(self.habits.keeps_records())
        )
    }

    /// Segment 3: the three findings, without numbering
    pub fn findings(&self) -> [String; 3] {
        [
            format!("您的月光风险主要与{}相关", self.risk_focus.phrase()),
            format!(
                "{}会使月光概率{}",
                self.record_keeping.habit_phrase(),
                self.record_keeping.effect_phrase()
            ),
            format!("建议关注{}", self.recommendation.phrase()),
        ]
    }

    /// The report with markdown emphasis
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("### {}\n", self.title()));
        output.push_str(&format!("- **基本特征**：{}\n", self.basic_line()));
        output.push_str(&format!("- **财务习惯**：{}\n", self.habits_line()));
        output.push('\n');
        output.push_str("📊 **研究发现**：\n");
        for (i, finding) in self.findings().iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, finding));
        }
        output
    }

    /// The report as terminal lines, markup removed
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.title().to_string(),
            format!("- 基本特征：{}", self.basic_line()),
            format!("- 财务习惯：{}", self.habits_line()),
            String::new(),
            "研究发现：".to_string(),
        ];
        lines.extend(
            self.findings()
                .iter()
                .enumerate()
                .map(|(i, finding)| format!("{}. {}", i + 1, finding)),
        );
        lines
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Major};

    fn profile(uses_budgeting_tool: bool, keeps_records: bool) -> Profile {
        Profile::new(Gender::Female, 25, Major::Business)
            .with_habits(uses_budgeting_tool, keeps_records)
    }

    #[test]
    fn test_recommendation_truth_table() {
        let cases = [
            (false, false, Recommendation::NonEssentialSpending),
            (false, true, Recommendation::FinancialTools),
            (true, true, Recommendation::SpendingStructure),
            (true, false, Recommendation::NonEssentialSpending),
        ];
        for (budgets, records, expected) in cases {
            assert_eq!(
                HabitPair::from_flags(budgets, records).recommendation(),
                expected,
                "budgets={budgets} records={records}"
            );
        }
    }

    #[test]
    fn test_budgeting_without_records_shares_the_neither_bucket() {
        assert_eq!(
            HabitPair::BudgetsOnly.recommendation(),
            HabitPair::Neither.recommendation()
        );
    }

    #[test]
    fn test_records_without_budgeting() {
        let report = AnalysisReport::generate(&profile(false, true));
        assert_eq!(report.recommendation, Recommendation::FinancialTools);
        assert_eq!(report.record_keeping, RecordKeepingEffect::Lowers);
        assert_eq!(report.risk_focus, RiskFocus::SpendingStructure);

        let findings = report.findings();
        assert_eq!(findings[0], "您的月光风险主要与消费结构相关");
        assert_eq!(findings[1], "记账会使月光概率降低30%");
        assert_eq!(findings[2], "建议关注理财工具的使用（如货币基金）");
    }

    #[test]
    fn test_no_records_raises_odds() {
        let report = AnalysisReport::generate(&profile(true, false));
        assert_eq!(report.findings()[0], "您的月光风险主要与理财习惯相关");
        assert_eq!(report.findings()[1], "不记账会使月光概率增加45%");
    }

    #[test]
    fn test_profile_echo() {
        let report = AnalysisReport::generate(&profile(true, true));
        assert_eq!(report.basic_line(), "25岁 女性 经管专业");
        assert_eq!(report.habits_line(), "有理财 | 有记账");

        let neither = AnalysisReport::generate(&Profile::default());
        assert_eq!(neither.basic_line(), "20岁 男性 理工专业");
        assert_eq!(neither.habits_line(), "无理财 | 无记账");
    }

    #[test]
    fn test_markdown_layout() {
        let markdown = AnalysisReport::generate(&profile(false, true)).to_markdown();
        let expected = "### 月光行为分析报告（基于您的画像）\n\
                        - **基本特征**：25岁 女性 经管专业\n\
                        - **财务习惯**：无理财 | 有记账\n\
                        \n\
                        📊 **研究发现**：\n\
                        1. 您的月光风险主要与消费结构相关\n\
                        2. 记账会使月光概率降低30%\n\
                        3. 建议关注理财工具的使用（如货币基金）\n";
        assert_eq!(markdown, expected);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let p = profile(true, false);
        assert_eq!(AnalysisReport::generate(&p), AnalysisReport::generate(&p));
        assert_eq!(
            AnalysisReport::generate(&p).to_string(),
            AnalysisReport::generate(&p).to_string()
        );
    }

    #[test]
    fn test_plain_lines_have_no_markup() {
        let lines = AnalysisReport::generate(&profile(true, true)).to_lines();
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|l| !l.contains("**") && !l.starts_with('#')));
        assert_eq!(lines[7], "3. 建议关注消费结构的优化（必要/非必要支出比）");
    }
}
