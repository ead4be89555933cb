use crate::contact::ContactSubmission;

/// Telegram `parse_mode` the notification text is written for
pub const PARSE_MODE: &str = "Markdown";

/// Render a submission as the fixed-layout notification text.
///
/// The phone goes in an inline code span; an empty message shows as `-`.
pub fn format_notification(submission: &ContactSubmission) -> String {
    let message = if submission.message.is_empty() {
        "-"
    } else {
        submission.message.as_str()
    };

    [
        "📩 *Yangi xabar*".to_string(),
        format!("👤 *Ism:* {}", submission.name),
        format!("📞 *Telefon:* `{}`", submission.phone),
        format!("🔗 *Kontakt:* {}", submission.contact),
        format!("📝 *Xabar:* {message}"),
    ]
    .join("\n")
}
