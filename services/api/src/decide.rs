use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use loan_decision::config::AppConfig;
use loan_decision::decision::{
    DecisionEngine, DecisionResponse, EstonianCodeReader, LoanDecision,
};
use loan_decision::error::AppError;
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct DecideArgs {
    /// Applicant's Estonian personal code
    #[arg(long)]
    pub(crate) personal_code: String,
    /// Requested loan amount in euros
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) amount: i64,
    /// Requested loan period in months
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) period: i32,
    /// Evaluation date for the age check (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the decision as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct DecisionReport<'a> {
    today: NaiveDate,
    requested_amount: i64,
    requested_period: i32,
    decision: &'a LoanDecision,
    response: DecisionResponse,
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.decision, EstonianCodeReader);
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let decision = engine.decide_on(&args.personal_code, args.amount, args.period, today);
    println!("{}", render(&args, today, &decision)?);
    Ok(())
}

fn render(
    args: &DecideArgs,
    today: NaiveDate,
    decision: &LoanDecision,
) -> Result<String, AppError> {
    if args.json {
        let report = DecisionReport {
            today,
            requested_amount: args.amount,
            requested_period: args.period,
            decision,
            response: DecisionResponse::from(decision),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut lines = vec![
        "Loan decision".to_string(),
        format!(
            "  Requested: {} over {} months (evaluated {})",
            args.amount, args.period, today
        ),
    ];
    match decision {
        LoanDecision::Approved { amount, period, .. } => {
            lines.push(format!("  Approved: {amount} over {period} months"));
        }
        LoanDecision::Rejected { .. } => lines.push("  Rejected".to_string()),
    }
    if let Some(note) = decision.note() {
        lines.push(format!("  Note: {note}"));
    }
    Ok(lines.join("\n"))
}
