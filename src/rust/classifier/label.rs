use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use super::error::ClassifierError;

/// The two possible outcomes of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Spam,
    NotSpam,
}

impl Label {
    /// Both labels, in scoring order
    pub const ALL: [Label; 2] = [Label::Spam, Label::NotSpam];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Spam => "spam",
            Label::NotSpam => "not_spam",
        }
    }

    /// Numeric tag used by the tab-separated datasets (`1` = spam, `0` = not spam)
    pub fn tag(&self) -> u8 {
        match self {
            Label::Spam => 1,
            Label::NotSpam => 0,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Label> {
        match tag.trim() {
            "1" => Some(Label::Spam),
            "0" => Some(Label::NotSpam),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(label) = Label::from_tag(s) {
            return Ok(label);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "spam" => Ok(Label::Spam),
            "not_spam" | "not spam" | "no spam" | "ham" => Ok(Label::NotSpam),
            other => Err(ClassifierError::ValidationError(
                format!("Unknown label '{}', expected one of: spam, not_spam, 1, 0", other)
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names_and_tags() {
        assert_eq!("spam".parse::<Label>().unwrap(), Label::Spam);
        assert_eq!("NOT_SPAM".parse::<Label>().unwrap(), Label::NotSpam);
        assert_eq!("1".parse::<Label>().unwrap(), Label::Spam);
        assert_eq!(" 0 ".parse::<Label>().unwrap(), Label::NotSpam);
        assert!(matches!("2".parse::<Label>(), Err(ClassifierError::ValidationError(_))));
    }

    #[test]
    fn test_display_matches_tag() {
        for label in Label::ALL {
            assert_eq!(label.to_string().parse::<Label>().unwrap(), label);
            assert_eq!(Label::from_tag(&label.tag().to_string()), Some(label));
        }
    }
}
