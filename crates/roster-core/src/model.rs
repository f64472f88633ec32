// crates/roster-core/src/model.rs - Record payloads carried by commands
//
// These are the shapes commands hand to the record store. The store itself
// lives outside this crate; here they are plain validated values.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::field::{
    Budget, DateTime, Description, Email, EventName, FieldError, FieldResult, Location, Material,
    Name, Phone, Role, Skill,
};

/// A person who can be assigned to events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Volunteer {
    name: Name,
    phone: Phone,
    email: Email,
    skills: BTreeSet<Skill>,
}

impl Volunteer {
    pub fn new(name: Name, phone: Phone, email: Email, skills: BTreeSet<Skill>) -> Self {
        Self {
            name,
            phone,
            email,
            skills,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn skills(&self) -> &BTreeSet<Skill> {
        &self.skills
    }
}

/// Something volunteers sign up for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    name: EventName,
    roles: BTreeSet<Role>,
    date_time: DateTime,
    location: Location,
    description: Description,
    materials: BTreeSet<Material>,
    budget: Option<Budget>,
}

impl Event {
    pub const MESSAGE_NO_ROLES: &'static str = "Events should need at least one role";

    /// Build an event; fails if `roles` is empty
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: EventName,
        roles: BTreeSet<Role>,
        date_time: DateTime,
        location: Location,
        description: Description,
        materials: BTreeSet<Material>,
        budget: Option<Budget>,
    ) -> FieldResult<Self> {
        if roles.is_empty() {
            return Err(FieldError::new(Role::FIELD, Self::MESSAGE_NO_ROLES));
        }

        Ok(Self {
            name,
            roles,
            date_time,
            location,
            description,
            materials,
            budget,
        })
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    pub fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    pub fn date_time(&self) -> DateTime {
        self.date_time
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn materials(&self) -> &BTreeSet<Material> {
        &self.materials
    }

    pub fn budget(&self) -> Option<&Budget> {
        self.budget.as_ref()
    }
}

/// Fields to change on a volunteer; `None` means "leave as is"
///
/// `Some(empty set)` for skills means "remove every skill".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditVolunteerDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<BTreeSet<Skill>>,
}

impl EditVolunteerDescriptor {
    /// A descriptor that would overwrite every field with `volunteer`'s values
    pub fn from_volunteer(volunteer: &Volunteer) -> Self {
        Self {
            name: Some(volunteer.name.clone()),
            phone: Some(volunteer.phone.clone()),
            email: Some(volunteer.email.clone()),
            skills: Some(volunteer.skills.clone()),
        }
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.phone.is_some() || self.email.is_some() || self.skills.is_some()
    }
}

/// Fields to change on an event; `None` means "leave as is"
///
/// `Some(empty set)` for materials means "remove every material". Roles can be
/// replaced but never emptied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EditEventDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<EventName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<BTreeSet<Role>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<BTreeSet<Material>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
}

impl EditEventDescriptor {
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: Some(event.name.clone()),
            roles: Some(event.roles.clone()),
            date_time: Some(event.date_time),
            location: Some(event.location.clone()),
            description: Some(event.description.clone()),
            materials: Some(event.materials.clone()),
            budget: event.budget.clone(),
        }
    }

    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.roles.is_some()
            || self.date_time.is_some()
            || self.location.is_some()
            || self.description.is_some()
            || self.materials.is_some()
            || self.budget.is_some()
    }
}

/// Matches names containing any keyword as a whole word, ignoring case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, name: &Name) -> bool {
        self.keywords.iter().any(|keyword| {
            name.as_str()
                .split_whitespace()
                .any(|word| word.eq_ignore_ascii_case(keyword))
        })
    }
}
