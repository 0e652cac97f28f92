use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use ctorgen_core::Plan;

use crate::driver::PlanReport;

pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, report: &PlanReport) -> String {
        if report.plans.is_empty() {
            return format!("No constructors to generate for '{}'.", report.type_name);
        }

        let mut out = String::new();
        for (index, plan) in report.plans.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_plan(&report.type_name, plan));
        }
        out
    }

    fn format_plan(&self, type_name: &str, plan: &Plan) -> String {
        let title = plan.title(type_name);
        let mut text = if self.color {
            title.bold().green().to_string()
        } else {
            title
        };

        match plan {
            Plan::NoParam => {}
            Plan::FieldAssign { parameters } => {
                for p in parameters {
                    text.push_str(&format!("\n    {}", self.assignment(&p.member, &p.name)));
                }
            }
            Plan::DelegateThenAssign {
                delegate,
                delegate_arguments,
                residual,
                ..
            } => {
                let arguments = delegate_arguments
                    .iter()
                    .map(|a| a.parameter.as_deref().unwrap_or("default"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let call = format!(
                    "this({arguments})  // constructor #{} ({})",
                    delegate.declaration_order,
                    delegate.signature()
                );
                text.push_str(&format!("\n    {}", self.dim(&call)));
                for p in residual {
                    text.push_str(&format!("\n    {}", self.assignment(&p.member, &p.name)));
                }
            }
        }
        text
    }

    fn assignment(&self, member: &str, parameter: &str) -> String {
        format!("{member} {} {parameter}", self.dim("="))
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

#[derive(Serialize)]
struct JsonPlan<'a> {
    title: String,
    #[serde(flatten)]
    plan: &'a Plan,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    type_name: &'a str,
    plans: Vec<JsonPlan<'a>>,
}

pub fn render_json(report: &PlanReport) -> Result<String> {
    let json = JsonReport {
        type_name: &report.type_name,
        plans: report
            .plans
            .iter()
            .map(|plan| JsonPlan {
                title: plan.title(&report.type_name),
                plan,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&json).context("failed to serialize plans")
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod tests;
