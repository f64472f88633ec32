// crates/roster-core/src/parser/volunteer.rs - Volunteer command grammars

use tracing::debug;

use super::{
    parse_index_argument, parse_index_preamble, parse_optional, parse_replacement_set, parse_set,
    required_value,
};
use crate::command::{
    Command, VOLUNTEER_CREATE_USAGE, VOLUNTEER_DELETE_USAGE, VOLUNTEER_EDIT_USAGE,
    VOLUNTEER_FIND_USAGE,
};
use crate::error::{ParseError, ParseResult};
use crate::field::{Email, Name, Phone, Skill};
use crate::model::{EditVolunteerDescriptor, NameContainsKeywords, Volunteer};
use crate::syntax::{PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_SKILL, VOLUNTEER_PREFIXES};
use crate::tokenizer::tokenize;

/// `n/NAME p/PHONE e/EMAIL [s/SKILL]...`
pub fn parse_volunteer_create(args: &str) -> ParseResult<Command> {
    let usage = VOLUNTEER_CREATE_USAGE;
    let map = tokenize(args, VOLUNTEER_PREFIXES);

    if !map.contains_all(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL]) || !map.preamble().is_empty() {
        return Err(ParseError::MissingArgument { usage });
    }
    map.verify_no_duplicates(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL])?;

    let name = Name::parse(required_value(&map, PREFIX_NAME, usage)?)?;
    let phone = Phone::parse(required_value(&map, PREFIX_PHONE, usage)?)?;
    let email = Email::parse(required_value(&map, PREFIX_EMAIL, usage)?)?;
    let skills = parse_set(map.all_values(PREFIX_SKILL), Skill::parse)?;

    Ok(Command::VolunteerCreate {
        volunteer: Volunteer::new(name, phone, email, skills),
    })
}

/// `INDEX`
pub fn parse_volunteer_delete(args: &str) -> ParseResult<Command> {
    let index = parse_index_argument(args, VOLUNTEER_DELETE_USAGE)?;
    Ok(Command::VolunteerDelete { index })
}

/// `INDEX [n/NAME] [p/PHONE] [e/EMAIL] [s/SKILL]...`
pub fn parse_volunteer_edit(args: &str) -> ParseResult<Command> {
    let usage = VOLUNTEER_EDIT_USAGE;
    let map = tokenize(args, VOLUNTEER_PREFIXES);

    let index = parse_index_preamble(&map, usage)?;
    map.verify_no_duplicates(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL])?;

    let descriptor = EditVolunteerDescriptor {
        name: parse_optional(&map, PREFIX_NAME, Name::parse)?,
        phone: parse_optional(&map, PREFIX_PHONE, Phone::parse)?,
        email: parse_optional(&map, PREFIX_EMAIL, Email::parse)?,
        skills: parse_replacement_set(&map, PREFIX_SKILL, Skill::parse)?,
    };

    if !descriptor.is_any_field_edited() {
        debug!(%index, "volunteer edit names no field");
        return Err(ParseError::NoChangeSpecified { usage });
    }

    Ok(Command::VolunteerEdit { index, descriptor })
}

/// `KEYWORD [MORE_KEYWORDS]...`
pub fn parse_volunteer_find(args: &str) -> ParseResult<Command> {
    let args = args.trim();
    if args.is_empty() {
        return Err(ParseError::MissingArgument {
            usage: VOLUNTEER_FIND_USAGE,
        });
    }

    Ok(Command::VolunteerFind {
        predicate: NameContainsKeywords::new(args.split_whitespace()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Index, MESSAGE_INVALID_INDEX};
    use crate::testutil::{VolunteerBuilder, volunteer_create_args, volunteer_edit_args};
    use std::collections::BTreeSet;

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    fn invalid(field: &'static str, message: &str) -> ParseError {
        ParseError::InvalidField {
            field,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_create_all_fields_present() {
        let volunteer = VolunteerBuilder::new()
            .with_skills(&["friend", "driving"])
            .build();
        let command = parse_volunteer_create(&volunteer_create_args(&volunteer)).unwrap();
        assert_eq!(command, Command::VolunteerCreate { volunteer });
    }

    #[test]
    fn test_create_without_skills() {
        let volunteer = VolunteerBuilder::new().with_skills(&[]).build();
        let command = parse_volunteer_create(" n/Amy Bee p/85355255 e/amy@gmail.com ").unwrap();
        assert_eq!(command, Command::VolunteerCreate { volunteer });
    }

    #[test]
    fn test_create_repeated_skills_collapse() {
        let args = "n/Amy Bee p/85355255 e/amy@gmail.com s/friend s/friend s/husband";
        let command = parse_volunteer_create(args).unwrap();
        let Command::VolunteerCreate { volunteer } = command else {
            panic!("expected a volunteer create command");
        };
        let skills: Vec<_> = volunteer.skills().iter().map(|s| s.as_str()).collect();
        assert_eq!(skills, ["friend", "husband"]);
    }

    #[test]
    fn test_create_missing_fields() {
        let missing = Err(ParseError::MissingArgument {
            usage: VOLUNTEER_CREATE_USAGE,
        });
        for args in [
            "p/85355255 e/amy@gmail.com",
            "n/Amy Bee e/amy@gmail.com",
            "n/Amy Bee p/85355255",
            "Amy Bee 85355255 amy@gmail.com",
            "",
        ] {
            assert_eq!(parse_volunteer_create(args), missing, "input {args:?}");
        }
    }

    #[test]
    fn test_create_non_empty_preamble() {
        assert_eq!(
            parse_volunteer_create("hello n/Amy Bee p/85355255 e/amy@gmail.com"),
            Err(ParseError::MissingArgument {
                usage: VOLUNTEER_CREATE_USAGE,
            })
        );
    }

    #[test]
    fn test_missing_reported_before_invalid() {
        // Phone is malformed, but email is absent: presence wins
        assert_eq!(
            parse_volunteer_create("n/Amy Bee p/abc"),
            Err(ParseError::MissingArgument {
                usage: VOLUNTEER_CREATE_USAGE,
            })
        );
    }

    #[test]
    fn test_create_duplicate_single_valued_fields() {
        assert_eq!(
            parse_volunteer_create("n/Amy n/Bob p/85355255 p/911 e/amy@gmail.com"),
            Err(ParseError::DuplicateField {
                markers: vec!["n/".to_string(), "p/".to_string()],
            })
        );
    }

    #[test]
    fn test_create_invalid_fields() {
        assert_eq!(
            parse_volunteer_create("n/James& p/85355255 e/amy@gmail.com"),
            Err(invalid("name", Name::CONSTRAINT))
        );
        assert_eq!(
            parse_volunteer_create("n/Amy p/911a e/amy@gmail.com"),
            Err(invalid("phone", Phone::CONSTRAINT))
        );
        assert_eq!(
            parse_volunteer_create("n/Amy p/911 e/amy!yahoo"),
            Err(invalid("email", Email::CONSTRAINT))
        );
        assert_eq!(
            parse_volunteer_create("n/Amy p/911 e/amy@gmail.com s/hubby*"),
            Err(invalid("skill", Skill::CONSTRAINT))
        );
        assert_eq!(
            parse_volunteer_create("n/Amy p/911 e/amy@gmail.com s/"),
            Err(invalid("skill", Skill::CONSTRAINT))
        );
    }

    #[test]
    fn test_delete() {
        assert_eq!(
            parse_volunteer_delete("1"),
            Ok(Command::VolunteerDelete { index: first() })
        );
        assert_eq!(
            parse_volunteer_delete(""),
            Err(ParseError::MissingArgument {
                usage: VOLUNTEER_DELETE_USAGE,
            })
        );
        for bad in ["a", "0", "-5", "1 2"] {
            assert_eq!(
                parse_volunteer_delete(bad),
                Err(invalid("index", MESSAGE_INVALID_INDEX)),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_edit_every_field() {
        let volunteer = VolunteerBuilder::new().build();
        let descriptor = EditVolunteerDescriptor::from_volunteer(&volunteer);
        let args = format!("1 {}", volunteer_edit_args(&descriptor));
        assert_eq!(
            parse_volunteer_edit(&args),
            Ok(Command::VolunteerEdit {
                index: first(),
                descriptor,
            })
        );
    }

    #[test]
    fn test_edit_single_field() {
        let command = parse_volunteer_edit("3 p/91234567").unwrap();
        assert_eq!(
            command,
            Command::VolunteerEdit {
                index: Index::from_one_based(3).unwrap(),
                descriptor: EditVolunteerDescriptor {
                    phone: Some(Phone::parse("91234567").unwrap()),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn test_edit_clear_skills() {
        let command = parse_volunteer_edit("1 s/").unwrap();
        assert_eq!(
            command,
            Command::VolunteerEdit {
                index: first(),
                descriptor: EditVolunteerDescriptor {
                    skills: Some(BTreeSet::new()),
                    ..Default::default()
                },
            }
        );
    }

    #[test]
    fn test_edit_missing_index() {
        let missing = Err(ParseError::MissingArgument {
            usage: VOLUNTEER_EDIT_USAGE,
        });
        assert_eq!(parse_volunteer_edit("n/Amy"), missing);
        assert_eq!(parse_volunteer_edit(""), missing);
    }

    #[test]
    fn test_edit_invalid_index_even_with_valid_fields() {
        for bad in ["-5 n/Amy", "0 n/Amy", "1 some random string", "1 i/ string"] {
            assert_eq!(
                parse_volunteer_edit(bad),
                Err(invalid("index", MESSAGE_INVALID_INDEX)),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn test_edit_no_field() {
        assert_eq!(
            parse_volunteer_edit("1"),
            Err(ParseError::NoChangeSpecified {
                usage: VOLUNTEER_EDIT_USAGE,
            })
        );
    }

    #[test]
    fn test_edit_invalid_value() {
        assert_eq!(
            parse_volunteer_edit("1 p/12 e/amy@gmail.com"),
            Err(invalid("phone", Phone::CONSTRAINT))
        );
        assert_eq!(
            parse_volunteer_edit("1 s/friend s/"),
            Err(invalid("skill", Skill::CONSTRAINT))
        );
    }

    #[test]
    fn test_edit_duplicates() {
        assert!(matches!(
            parse_volunteer_edit("1 p/911 p/912"),
            Err(ParseError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_find() {
        let command = parse_volunteer_find(" \n Alice \n \t Bob  \t").unwrap();
        assert_eq!(
            command,
            Command::VolunteerFind {
                predicate: NameContainsKeywords::new(["Alice", "Bob"]),
            }
        );
        assert_eq!(
            parse_volunteer_find("     "),
            Err(ParseError::MissingArgument {
                usage: VOLUNTEER_FIND_USAGE,
            })
        );
    }
}
