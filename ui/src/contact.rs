//! Contact form model. Submission is local only: nothing leaves the page.

use std::fmt;

/// How long the "thanks" banner stays up after a submit.
pub const SUBMITTED_FLASH_MS: u32 = 3000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub organisation: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            FieldError::MissingName => "이름을 입력해 주세요.",
            FieldError::InvalidEmail => "올바른 이메일 주소를 입력해 주세요.",
            FieldError::MissingMessage => "문의 내용을 입력해 주세요.",
        };
        f.write_str(msg)
    }
}

impl ContactDraft {
    /// All problems at once, in field order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            errors.push(FieldError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::MissingMessage);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !s.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Editing,
    Invalid(Vec<FieldError>),
    Submitted,
}

impl SubmitStatus {
    /// Validates `draft` and returns the next status. The caller clears the
    /// form and schedules [`SubmitStatus::Editing`] after
    /// [`SUBMITTED_FLASH_MS`] when this is `Submitted`.
    pub fn submit(draft: &ContactDraft) -> Self {
        match draft.validate() {
            Ok(()) => SubmitStatus::Submitted,
            Err(errors) => SubmitStatus::Invalid(errors),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitStatus::Submitted)
    }

    pub fn has_error(&self, field: FieldError) -> bool {
        matches!(self, SubmitStatus::Invalid(errors) if errors.contains(&field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            organisation: String::new(),
            message: message.into(),
        }
    }

    #[test]
    fn complete_draft_submits() {
        let d = draft("김리플", "leaf@leaflo.co.kr", "펠릿 구매 문의");
        assert_eq!(SubmitStatus::submit(&d), SubmitStatus::Submitted);
    }

    #[test]
    fn empty_draft_reports_every_field() {
        let status = SubmitStatus::submit(&ContactDraft::default());
        assert_eq!(
            status,
            SubmitStatus::Invalid(vec![
                FieldError::MissingName,
                FieldError::InvalidEmail,
                FieldError::MissingMessage,
            ])
        );
        assert!(status.has_error(FieldError::InvalidEmail));
        assert!(!status.is_submitted());
    }

    #[test]
    fn whitespace_is_not_content() {
        let status = SubmitStatus::submit(&draft("  ", "a@b.kr", "\n\t"));
        assert!(status.has_error(FieldError::MissingName));
        assert!(status.has_error(FieldError::MissingMessage));
        assert!(!status.has_error(FieldError::InvalidEmail));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.kr", "info@leaflo.co.kr", " x@y.com "] {
            assert!(looks_like_email(ok.trim()), "{ok}");
        }
        for bad in ["", "plain", "@b.kr", "a@", "a@b", "a@@b.kr", "a@b..kr", "a b@c.kr"] {
            assert!(!looks_like_email(bad), "{bad}");
        }
    }
}
