//! Plain-text email bodies

use super::dispatcher::QuoteNotification;
use chrono::{DateTime, Utc};
use chrono_tz::America::New_York;
use std::fmt::Write;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Submission time on the business's local clock, e.g.
/// `Sunday, October 18, 2026 at 10:05 AM ET`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&New_York)
        .format("%A, %B %-d, %Y at %-I:%M %p ET")
        .to_string()
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", RULE);
}

/// Body of the internal notification sent to the business
pub fn render_internal(notification: &QuoteNotification<'_>, business_name: &str) -> String {
    let submission = notification.submission;
    let mut out = String::new();

    if notification.routing.dev_override {
        let _ = writeln!(
            out,
            "⚠️ DEVELOPMENT MODE - This would normally go to: {}\n",
            notification.routing.intended.join(", ")
        );
    }

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  NEW QUOTE REQUEST - {}", business_name);
    let _ = writeln!(out, "{}\n", RULE);

    section(&mut out, "📋 CLIENT INFORMATION");
    let _ = writeln!(out, "Name:         {}", submission.name);
    let _ = writeln!(out, "Email:        {}", submission.email);
    let _ = writeln!(out, "Phone:        {}\n", submission.phone);

    section(&mut out, "🛠️  SERVICES REQUESTED");
    for label in submission.services.labels() {
        let _ = writeln!(out, "✓ {}", label);
    }
    out.push('\n');

    section(&mut out, "📍 PROJECT LOCATION");
    let _ = writeln!(out, "{}\n", submission.address);

    section(&mut out, "📝 PROJECT DETAILS");
    let _ = writeln!(out, "{}\n", submission.details);

    let _ = writeln!(out, "{}\n", RULE);
    let _ = writeln!(
        out,
        "⏰ Submitted:  {}\n",
        format_timestamp(notification.submitted_at)
    );
    let _ = writeln!(out, "🌐 Client IP:  {}\n", notification.client_ip);
    let _ = writeln!(out, "{}\n", RULE);
    let _ = writeln!(
        out,
        "This request was submitted through the {} website.",
        business_name
    );
    let _ = writeln!(out, "Reply directly to this email to contact the client.");

    out
}

/// Body of the confirmation sent to the customer
pub fn render_confirmation(notification: &QuoteNotification<'_>, business_name: &str) -> String {
    let submission = notification.submission;
    let services = submission.services.summary();
    let contacts = notification.contact_lines.join("\n");
    let mut out = String::new();

    let _ = writeln!(out, "Hello {},\n", submission.name);
    let _ = writeln!(
        out,
        "Thank you for requesting a quote from {}!\n",
        business_name
    );
    let _ = writeln!(
        out,
        "We've received your request for {} and our team will review it shortly. \
         You can expect to hear from us within 1-2 business days.\n",
        services
    );

    let _ = writeln!(out, "{}", RULE);
    section(&mut out, "YOUR REQUEST SUMMARY");
    out.push('\n');
    let _ = writeln!(out, "Services:     {}", services);
    let _ = writeln!(out, "Location:     {}", submission.address);
    let _ = writeln!(out, "Phone:        {}", submission.phone);
    let _ = writeln!(out, "Submitted:    {}\n", format_timestamp(notification.submitted_at));
    let _ = writeln!(out, "Project Details:\n{}\n", submission.details);
    let _ = writeln!(out, "{}\n", RULE);

    let _ = writeln!(
        out,
        "⚠️  This is an automated confirmation. Please do not reply to this email.\n"
    );
    let _ = writeln!(out, "If you have any questions, please contact us directly:\n");
    let _ = writeln!(out, "{}\n", contacts);
    let _ = writeln!(out, "Best regards,\nThe {} Team\n", business_name);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}", business_name);
    let _ = writeln!(out, "Professional Landscaping & Outdoor Construction");
    let _ = writeln!(out, "{}", contacts);

    out
}
