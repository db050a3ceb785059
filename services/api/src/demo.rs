use crate::infra::{
    InMemoryApplicationRepository, InMemoryMailTransport, InMemoryPositionRepository,
};
use chrono::{Duration, Utc};
use clap::Args;
use hireboard::config::AppConfig;
use hireboard::error::AppError;
use hireboard::recruiting::applications::{AnswerInput, ApplicationService, ApplicationSubmission};
use hireboard::recruiting::positions::{PositionDraft, PositionService, Team};
use hireboard::recruiting::questions::{
    rendering_directive, types_for_select, Answer, NullLocalizer, QuestionDraft,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the application intake portion of the demo.
    #[arg(long)]
    pub(crate) skip_application: bool,
    /// Comma-separated applicant columns for the CSV report.
    #[arg(long)]
    pub(crate) report_fields: Option<String>,
}

/// Seed a live position with questions, submit a sample application, and
/// print the resulting notification mail and CSV export.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let now = Utc::now();

    let repository = Arc::new(InMemoryPositionRepository::default());
    let positions = Arc::new(PositionService::new(repository.clone()));
    let transport = Arc::new(InMemoryMailTransport::default());
    let applications = Arc::new(ApplicationService::new(
        repository,
        Arc::new(InMemoryApplicationRepository::default()),
        transport.clone(),
        config.mailer.clone(),
    ));

    println!("== Question types available to administrators ==");
    for (label, code) in types_for_select(&NullLocalizer) {
        println!("  {label} ({code})");
    }

    let draft = PositionDraft {
        title: "Marketing Monkey".to_string(),
        team: Some(Team {
            name: "Community".to_string(),
            slug: "community".to_string(),
        }),
        short_description: "Spread the word about what we do.".to_string(),
        duration: "3 months".to_string(),
        time_commitment: Some("a_full_day".to_string()),
        paid: false,
        paid_description: None,
        general_description: "# About us\nWe keep communities humming.".to_string(),
        position_description: "# The role\nOwn our outreach calendar.".to_string(),
        applicant_description: "# You\nYou like people and spreadsheets.".to_string(),
        contact_emails: vec!["hiring@example.org".to_string()],
        published_at: Some(now - Duration::weeks(1)),
        expires_at: Some(now + Duration::weeks(3)),
    };
    let position = positions.create(draft, now)?;
    println!(
        "\n== Position '{}' created (slug {}, status {}) ==",
        position.title,
        position.slug,
        position.status(now).code()
    );

    let motivation = QuestionDraft {
        question: "Why this role?".to_string(),
        short_name: "motivation".to_string(),
        question_type: "text".to_string(),
        required_by_default: true,
        ..QuestionDraft::default()
    }
    .validate()?;
    let channel = QuestionDraft {
        question: "Where did you hear about us?".to_string(),
        short_name: "channel".to_string(),
        question_type: "select".to_string(),
        editable_metadata: "Newsletter\nA friend\nSearch".to_string(),
        ..QuestionDraft::default()
    }
    .validate()?;

    positions.attach_question(&position.slug, motivation)?;
    positions.attach_question(&position.slug, channel)?;

    let position = positions.fetch(&position.slug)?;
    println!("\n== Form directives, in order ==");
    for row in position.ordered_questions() {
        let directive = rendering_directive(&row.question, &Answer::blank());
        println!(
            "  {}. {} widget={:?} required={} choices={:?}",
            row.order_position,
            directive.label,
            directive.widget,
            directive.required,
            directive.choices
        );
    }

    if args.skip_application {
        return Ok(());
    }

    let submission = ApplicationSubmission {
        applicant_name: "Robin Applicant".to_string(),
        applicant_email: "robin@example.org".to_string(),
        answers: vec![
            AnswerInput {
                short_name: "motivation".to_string(),
                value: Some("Bananas, mostly.".to_string()),
                required: None,
            },
            AnswerInput {
                short_name: "channel".to_string(),
                value: Some("A friend".to_string()),
                required: None,
            },
        ],
    };
    let stored = applications.submit(&position.slug, submission, now)?;
    println!(
        "\n== Application {} received at {} ==",
        stored.id.0, stored.submitted_at
    );

    for message in transport.deliveries() {
        println!("\n== Outbound mail ==");
        println!("  To:      {}", message.to.join(", "));
        println!("  From:    {}", message.from);
        println!("  Subject: {}", message.subject);
    }

    let fields = args.report_fields.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect::<Vec<String>>()
    });
    let csv = applications.report_csv(&position.slug, fields)?;
    println!("\n== Application report ==\n{csv}");

    Ok(())
}
