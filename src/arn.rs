//! # Amazon Resource Names
//!
//! Splits an ARN into its sections. Only the section layout is checked here;
//! the shape of each section is judged by [`crate::validation::valid_arn_check`].
//!
//! Format: `arn:partition:service:region:account-id:resource`. The resource
//! section keeps any further colons (e.g. `function:my-fn:1`).

use crate::errors::ArnParseError;
use std::fmt;
use std::str::FromStr;

const ARN_PREFIX: &str = "arn:";
const ARN_SECTIONS: usize = 6;

/// A parsed Amazon Resource Name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    pub resource: String,
}

impl Arn {
    /// Parse an ARN string into its sections
    ///
    /// # Errors
    ///
    /// Returns [`ArnParseError::InvalidPrefix`] when the string does not start
    /// with `arn:` and [`ArnParseError::NotEnoughSections`] when fewer than
    /// six colon-separated sections are present.
    pub fn parse(input: &str) -> Result<Self, ArnParseError> {
        if !input.starts_with(ARN_PREFIX) {
            return Err(ArnParseError::InvalidPrefix);
        }

        let sections: Vec<&str> = input.splitn(ARN_SECTIONS, ':').collect();
        if sections.len() != ARN_SECTIONS {
            return Err(ArnParseError::NotEnoughSections);
        }

        Ok(Arn {
            partition: sections[1].to_owned(),
            service: sections[2].to_owned(),
            region: sections[3].to_owned(),
            account_id: sections[4].to_owned(),
            resource: sections[5].to_owned(),
        })
    }
}

impl FromStr for Arn {
    type Err = ArnParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arn::parse(s)
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_s3_bucket() {
        let arn = Arn::parse("arn:aws:s3:::my-bucket").unwrap();
        assert_eq!(arn.partition, "aws");
        assert_eq!(arn.service, "s3");
        assert_eq!(arn.region, "");
        assert_eq!(arn.account_id, "");
        assert_eq!(arn.resource, "my-bucket");
    }

    #[test]
    fn test_resource_keeps_colons() {
        let arn: Arn = "arn:aws:lambda:us-east-1:123456789012:function:my-fn:1"
            .parse()
            .unwrap();
        assert_eq!(arn.resource, "function:my-fn:1");
        assert_eq!(
            arn.to_string(),
            "arn:aws:lambda:us-east-1:123456789012:function:my-fn:1"
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Arn::parse("not-an-arn"), Err(ArnParseError::InvalidPrefix));
        assert_eq!(
            Arn::parse("arn:aws:s3"),
            Err(ArnParseError::NotEnoughSections)
        );
        assert_eq!(
            ArnParseError::NotEnoughSections.to_string(),
            "arn: not enough sections"
        );
    }
}
