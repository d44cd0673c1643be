use std::collections::BTreeSet;

use crate::{
    spec::{
        question::{CardBack, Question},
        unit::VideoUnit,
    },
    store::UnitStore,
};

/// Authoring problem found in unit content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub unit_id: String,
    pub question_index: Option<usize>,
    pub path: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn codes(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.code.as_str()).collect()
    }
}

pub fn validate(store: &UnitStore) -> ValidationResult {
    let mut issues = Vec::new();
    let mut seen_ids = BTreeSet::new();

    for (unit_index, unit) in store.units().iter().enumerate() {
        let unit_path = format!("/{}", unit_index);
        if unit.id.trim().is_empty() {
            issues.push(unit_issue(unit, &unit_path, "unit id is empty", "empty_id"));
        } else if !seen_ids.insert(unit.id.as_str()) {
            issues.push(unit_issue(
                unit,
                &unit_path,
                "unit id is used more than once",
                "duplicate_unit_id",
            ));
        }
        if unit.video_url.trim().is_empty() {
            issues.push(unit_issue(
                unit,
                &format!("{}/videoUrl", unit_path),
                "video url is empty",
                "empty_video_url",
            ));
        }
        if unit.questions.is_empty() {
            issues.push(unit_issue(
                unit,
                &format!("{}/questions", unit_path),
                "unit has no questions",
                "no_questions",
            ));
        }

        for (index, question) in unit.questions.iter().enumerate() {
            let path = format!("{}/questions/{}", unit_path, index);
            issues.extend(
                question_issues(question)
                    .into_iter()
                    .map(|(suffix, message, code)| ValidationIssue {
                        unit_id: unit.id.clone(),
                        question_index: Some(index),
                        path: format!("{}{}", path, suffix),
                        message,
                        code: code.into(),
                    }),
            );
        }
    }

    ValidationResult {
        valid: issues.is_empty(),
        issues,
    }
}

fn question_issues(question: &Question) -> Vec<(&'static str, String, &'static str)> {
    let mut issues = Vec::new();
    match &question.back {
        CardBack::Mcq(back) => {
            if back.options.len() < 2 {
                issues.push((
                    "/back/options",
                    format!("expected at least 2 options, found {}", back.options.len()),
                    "too_few_options",
                ));
            }
            if back.correct_index().is_none() {
                issues.push((
                    "/back/correctAnswerIndex",
                    format!(
                        "correct answer index {} is outside {} option(s)",
                        back.correct_answer_index,
                        back.options.len()
                    ),
                    "correct_index_out_of_range",
                ));
            }
        }
        CardBack::Frq(_) => {}
        CardBack::Unavailable { declared, .. } => issues.push((
            "/back",
            format!("back does not match declared type '{}'", declared.as_str()),
            "malformed_back",
        )),
    }
    issues
}

fn unit_issue(unit: &VideoUnit, path: &str, message: &str, code: &str) -> ValidationIssue {
    ValidationIssue {
        unit_id: unit.id.clone(),
        question_index: None,
        path: path.into(),
        message: message.into(),
        code: code.into(),
    }
}
