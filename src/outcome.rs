/// The four canned verification results the widget can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NotFound,
    EinMismatch,
    WatchlistHit,
    Verified,
}

/// Visual weight of a result panel. Drives the CSS class only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Pending,
    Success,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Pending => "pending",
            Severity::Success => "success",
        }
    }
}

impl Outcome {
    /// Selection order used by the random stub.
    pub const ALL: [Outcome; 4] = [
        Outcome::NotFound,
        Outcome::EinMismatch,
        Outcome::WatchlistHit,
        Outcome::Verified,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::NotFound => "Business Not Found",
            Outcome::EinMismatch => "EIN Mismatch",
            Outcome::WatchlistHit => "Watchlist Hit",
            Outcome::Verified => "Verified",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Outcome::NotFound => Severity::Error,
            Outcome::EinMismatch => Severity::Warning,
            Outcome::WatchlistHit => Severity::Pending,
            Outcome::Verified => Severity::Success,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Outcome::NotFound => "❌",
            Outcome::EinMismatch => "⚠️",
            Outcome::WatchlistHit => "⏳",
            Outcome::Verified => "✅",
        }
    }

    /// Full support response with the query interpolated verbatim.
    pub fn message(self, query: &str) -> String {
        match self {
            Outcome::NotFound => format!(
                "Hello,\n\n\
                I've searched our records and was unable to locate a business matching \"{query}\". This could be due to several reasons:\n\n\
                **Possible reasons:**\n\
                - The business name may be spelled differently in our system\n\
                - The business might be registered under a DBA (Doing Business As) name\n\
                - The EIN provided might be incorrect or not yet processed\n\n\
                **Next Steps:**\n\
                1. Double-check the spelling of the business name\n\
                2. Try searching with any known DBA names\n\
                3. Verify the EIN is correct and matches the business documents\n\
                4. If the business was recently registered, allow 2-3 business days for processing\n\n\
                If you continue to experience issues, please escalate to the verification team for manual review.\n\n\
                Best regards,  \n\
                Support Team"
            ),
            Outcome::EinMismatch => format!(
                "Hello,\n\n\
                I've located the business \"{query}\" in our system, however there appears to be a mismatch with the EIN provided. The EIN in our records does not match the documentation submitted.\n\n\
                **Issue:** EIN mismatch detected during verification process\n\n\
                **Next Steps:**\n\
                1. Please re-upload the correct IRS documentation (SS-4 or EIN letter)\n\
                2. Ensure the EIN matches exactly what's shown on official IRS documents\n\
                3. Verify that all digits are entered correctly (format: XX-XXXXXXX)\n\
                4. If you believe this is an error, please provide additional supporting documentation\n\n\
                Once the correct EIN documentation is uploaded, the verification process will continue automatically.\n\n\
                Best regards,  \n\
                Support Team"
            ),
            Outcome::WatchlistHit => format!(
                "Hello,\n\n\
                Thank you for your submission. The business \"{query}\" has been flagged in our system and requires additional review before verification can be completed.\n\n\
                **Status:** Manual review required – compliance check in progress\n\n\
                **What this means:**\n\
                - Your business information is being reviewed by our compliance team\n\
                - This is a standard procedure for certain business types or locations\n\
                - No action is required from you at this time\n\n\
                **Next Steps:**\n\
                1. Our compliance team will review your business within 2–5 business days\n\
                2. You will receive an email notification once the review is complete\n\
                3. Additional documentation may be requested if needed\n\n\
                We appreciate your patience during this process. If you have urgent questions, please contact our compliance team directly.\n\n\
                Best regards,  \n\
                Support Team"
            ),
            Outcome::Verified => format!(
                "Hello,\n\n\
                Great news! The business \"{query}\" has been successfully verified in our system.\n\n\
                **Verification Status:** ✅ Complete\n\n\
                **What's been verified:**\n\
                - Business name matches official records\n\
                - EIN is valid and matches IRS documentation\n\
                - All required documentation has been reviewed\n\
                - No compliance issues detected\n\n\
                **Next Steps:**\n\
                Your business verification is now complete and you can proceed with your application or account setup. All business information has been approved and is ready for use.\n\n\
                If you need any additional assistance or have questions about your verified business profile, please don't hesitate to reach out.\n\n\
                Best regards,  \n\
                Support Team"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_four_fixed_statuses() {
        let labels: Vec<&str> = Outcome::ALL.iter().map(|o| o.label()).collect();
        assert_eq!(
            labels,
            vec!["Business Not Found", "EIN Mismatch", "Watchlist Hit", "Verified"]
        );
    }

    #[test]
    fn every_message_contains_the_query_verbatim() {
        for outcome in Outcome::ALL {
            let msg = outcome.message("Acme LLC");
            assert!(
                msg.contains("\"Acme LLC\""),
                "{:?} message missing query: {msg}",
                outcome
            );
        }
    }

    #[test]
    fn query_is_interpolated_unescaped() {
        let msg = Outcome::Verified.message("O'Brien & Sons <LLC>");
        assert!(msg.contains("O'Brien & Sons <LLC>"));
    }

    #[test]
    fn padded_query_is_not_trimmed_for_display() {
        for outcome in Outcome::ALL {
            let msg = outcome.message("  Acme LLC  ");
            assert!(
                msg.contains("\"  Acme LLC  \""),
                "{:?} message lost the padding: {msg}",
                outcome
            );
        }
    }

    #[test]
    fn messages_read_as_support_responses() {
        // Sign-off keeps the original's trailing double space (Markdown
        // hard break) after "Best regards,".
        for outcome in Outcome::ALL {
            let msg = outcome.message("Acme LLC");
            assert!(msg.starts_with("Hello,\n"));
            assert!(msg.ends_with("Best regards,  \nSupport Team"));
        }
    }

    #[test]
    fn severity_css_classes_are_distinct() {
        let mut classes: Vec<&str> =
            Outcome::ALL.iter().map(|o| o.severity().css_class()).collect();
        classes.sort();
        classes.dedup();
        assert_eq!(classes.len(), 4);
    }
}
