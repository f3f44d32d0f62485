use serde::Serialize;

/// A numeric form field on its way to the backend.
///
/// Text that parses as an integer is sent as a JSON number. Anything else is
/// forwarded verbatim as a JSON string and left for the backend to reject;
/// the console does not refuse the submission itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(i64),
    Raw(String),
}

impl NumericInput {
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<i64>() {
            Ok(n) => NumericInput::Number(n),
            Err(_) => NumericInput::Raw(text.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            NumericInput::Number(n) => Some(*n),
            NumericInput::Raw(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(NumericInput::parse("20"), NumericInput::Number(20));
        assert_eq!(NumericInput::parse(" 8000000 "), NumericInput::Number(8_000_000));
        assert_eq!(NumericInput::parse("-5"), NumericInput::Number(-5));
    }

    #[test]
    fn test_unparseable_text_passes_through() {
        assert_eq!(
            NumericInput::parse("12abc"),
            NumericInput::Raw("12abc".to_string())
        );
        assert_eq!(NumericInput::parse(""), NumericInput::Raw(String::new()));
        assert_eq!(NumericInput::parse("1.5").as_number(), None);
    }

    #[test]
    fn test_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&NumericInput::Number(3)).unwrap(),
            "3"
        );
        assert_eq!(
            serde_json::to_string(&NumericInput::Raw("lots".into())).unwrap(),
            "\"lots\""
        );
    }
}
