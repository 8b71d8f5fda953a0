/// A stat string split around its numeric run, e.g. `"840억원"` into
/// `""`, `840`, `"억원"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    Numeric {
        prefix: String,
        target: u64,
        /// Zero-pad width, non-zero only when the source run had leading zeros.
        width: usize,
        suffix: String,
    },
    /// No digits, or a run too large to count. Rendered verbatim.
    Literal(String),
}

impl DisplayValue {
    /// Splits on the first maximal run of ASCII digits. Anything after it,
    /// including further digits, is kept as suffix.
    pub fn parse(text: &str) -> Self {
        let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
            return DisplayValue::Literal(text.to_owned());
        };
        let end = text[start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(text.len(), |off| start + off);

        let run = &text[start..end];
        let Ok(target) = run.parse::<u64>() else {
            return DisplayValue::Literal(text.to_owned());
        };
        let width = if run.len() > 1 && run.starts_with('0') { run.len() } else { 0 };

        DisplayValue::Numeric {
            prefix: text[..start].to_owned(),
            target,
            width,
            suffix: text[end..].to_owned(),
        }
    }

    pub fn target(&self) -> Option<u64> {
        match self {
            DisplayValue::Numeric { target, .. } => Some(*target),
            DisplayValue::Literal(_) => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, DisplayValue::Literal(_))
    }

    /// Text with `count` in place of the numeric run. Literals ignore `count`.
    pub fn render(&self, count: u64) -> String {
        match self {
            DisplayValue::Numeric { prefix, width, suffix, .. } => {
                format!("{prefix}{count:0width$}{suffix}")
            }
            DisplayValue::Literal(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_suffix() {
        assert_eq!(
            DisplayValue::parse("96%"),
            DisplayValue::Numeric {
                prefix: String::new(),
                target: 96,
                width: 0,
                suffix: "%".into(),
            }
        );
    }

    #[test]
    fn splits_prefix_and_multibyte_suffix() {
        let v = DisplayValue::parse("약 30만톤");
        assert_eq!(v.target(), Some(30));
        assert_eq!(v.render(7), "약 7만톤");
    }

    #[test]
    fn only_first_run_counts() {
        let v = DisplayValue::parse("21-30톤");
        assert_eq!(v.target(), Some(21));
        assert_eq!(v.render(3), "3-30톤");
    }

    #[test]
    fn round_trip_at_target() {
        for s in ["96%", "840억원", "1만원/톤", "x12y", "0", "2025", "007", "+40만원"] {
            let v = DisplayValue::parse(s);
            let t = v.target().unwrap();
            assert_eq!(v.render(t), s, "round trip of {s:?}");
        }
    }

    #[test]
    fn no_digits_is_literal() {
        let v = DisplayValue::parse("N/A");
        assert!(v.is_literal());
        assert_eq!(v.target(), None);
        assert_eq!(v.render(42), "N/A");
        assert!(DisplayValue::parse("").is_literal());
    }

    #[test]
    fn overflowing_run_is_literal() {
        let s = "99999999999999999999999%";
        let v = DisplayValue::parse(s);
        assert!(v.is_literal());
        assert_eq!(v.render(0), s);
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert!(DisplayValue::parse("٣٤").is_literal());
    }
}
