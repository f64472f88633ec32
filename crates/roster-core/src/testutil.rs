// crates/roster-core/src/testutil.rs - Builders and argument formatters for tests
//
// The formatters below write argument tails by hand from a record's fields.
// They deliberately do not go through `Command`'s Display, so a test that
// parses their output checks the parser against an independent writer.

use std::collections::BTreeSet;

use crate::field::{
    Budget, DateTime, Description, Email, EventName, FieldResult, Location, Material, Name, Phone,
    Role, Skill,
};
use crate::model::{EditEventDescriptor, EditVolunteerDescriptor, Event, Volunteer};

pub const DEFAULT_NAME: &str = "Amy Bee";
pub const DEFAULT_PHONE: &str = "85355255";
pub const DEFAULT_EMAIL: &str = "amy@gmail.com";
pub const DEFAULT_SKILL: &str = "friend";

pub const DEFAULT_EVENT_NAME: &str = "Clean up";
pub const DEFAULT_ROLE: &str = "cleaner";
pub const DEFAULT_DATE_TIME: &str = "23/9/2023 1800";
pub const DEFAULT_LOCATION: &str = "serangoon";
pub const DEFAULT_DESCRIPTION: &str = "clean it up";
pub const DEFAULT_MATERIAL: &str = "trash bag";
pub const DEFAULT_BUDGET: &str = "80.00";

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn set<T: Ord>(values: &[String], parse: impl Fn(&str) -> FieldResult<T>) -> BTreeSet<T> {
    values
        .iter()
        .map(|v| parse(v.as_str()).expect("builder value is valid"))
        .collect()
}

pub struct VolunteerBuilder {
    name: String,
    phone: String,
    email: String,
    skills: Vec<String>,
}

impl VolunteerBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            phone: DEFAULT_PHONE.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            skills: vec![DEFAULT_SKILL.to_string()],
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = strings(skills);
        self
    }

    pub fn build(self) -> Volunteer {
        Volunteer::new(
            Name::parse(&self.name).expect("builder name is valid"),
            Phone::parse(&self.phone).expect("builder phone is valid"),
            Email::parse(&self.email).expect("builder email is valid"),
            set(&self.skills, Skill::parse),
        )
    }
}

pub struct EventBuilder {
    name: String,
    roles: Vec<String>,
    date_time: String,
    location: String,
    description: String,
    materials: Vec<String>,
    budget: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_EVENT_NAME.to_string(),
            roles: vec![DEFAULT_ROLE.to_string()],
            date_time: DEFAULT_DATE_TIME.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            materials: vec![DEFAULT_MATERIAL.to_string()],
            budget: Some(DEFAULT_BUDGET.to_string()),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = strings(roles);
        self
    }

    pub fn with_date_time(mut self, date_time: &str) -> Self {
        self.date_time = date_time.to_string();
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_materials(mut self, materials: &[&str]) -> Self {
        self.materials = strings(materials);
        self
    }

    pub fn with_budget(mut self, budget: &str) -> Self {
        self.budget = Some(budget.to_string());
        self
    }

    pub fn without_budget(mut self) -> Self {
        self.budget = None;
        self
    }

    pub fn build(self) -> Event {
        Event::new(
            EventName::parse(&self.name).expect("builder event name is valid"),
            set(&self.roles, Role::parse),
            DateTime::parse(&self.date_time).expect("builder date is valid"),
            Location::parse(&self.location).expect("builder location is valid"),
            Description::parse(&self.description).expect("builder description is valid"),
            set(&self.materials, Material::parse),
            self.budget
                .as_deref()
                .map(|b| Budget::parse(b).expect("builder budget is valid")),
        )
        .expect("builder event has a role")
    }
}

/// `n/... p/... e/... s/...` for a `vcreate` tail
pub fn volunteer_create_args(volunteer: &Volunteer) -> String {
    let mut args = format!(
        "n/{} p/{} e/{}",
        volunteer.name().as_str(),
        volunteer.phone().as_str(),
        volunteer.email().as_str()
    );
    for skill in volunteer.skills() {
        args.push_str(&format!(" s/{}", skill.as_str()));
    }
    args
}

/// Fields of a `vedit` tail, without the index
pub fn volunteer_edit_args(descriptor: &EditVolunteerDescriptor) -> String {
    let mut parts = Vec::new();
    if let Some(name) = &descriptor.name {
        parts.push(format!("n/{}", name.as_str()));
    }
    if let Some(phone) = &descriptor.phone {
        parts.push(format!("p/{}", phone.as_str()));
    }
    if let Some(email) = &descriptor.email {
        parts.push(format!("e/{}", email.as_str()));
    }
    if let Some(skills) = &descriptor.skills {
        push_replacement(&mut parts, "s/", skills.iter().map(Skill::as_str));
    }
    parts.join(" ")
}

/// `n/... r/... d/... l/... dsc/... m/... b/...` for an `ecreate` tail
pub fn event_create_args(event: &Event) -> String {
    let mut parts = vec![format!("n/{}", event.name().as_str())];
    parts.extend(event.roles().iter().map(|r| format!("r/{r}")));
    parts.push(format!("d/{}", event.date_time()));
    parts.push(format!("l/{}", event.location().as_str()));
    parts.push(format!("dsc/{}", event.description().as_str()));
    parts.extend(event.materials().iter().map(|m| format!("m/{m}")));
    if let Some(budget) = event.budget() {
        parts.push(format!("b/{}", budget.as_str()));
    }
    parts.join(" ")
}

/// Fields of an `eedit` tail, without the index
pub fn event_edit_args(descriptor: &EditEventDescriptor) -> String {
    let mut parts = Vec::new();
    if let Some(name) = &descriptor.name {
        parts.push(format!("n/{}", name.as_str()));
    }
    if let Some(roles) = &descriptor.roles {
        parts.extend(roles.iter().map(|r| format!("r/{}", r.as_str())));
    }
    if let Some(date_time) = &descriptor.date_time {
        parts.push(format!("d/{date_time}"));
    }
    if let Some(location) = &descriptor.location {
        parts.push(format!("l/{}", location.as_str()));
    }
    if let Some(description) = &descriptor.description {
        parts.push(format!("dsc/{}", description.as_str()));
    }
    if let Some(materials) = &descriptor.materials {
        push_replacement(&mut parts, "m/", materials.iter().map(Material::as_str));
    }
    if let Some(budget) = &descriptor.budget {
        parts.push(format!("b/{}", budget.as_str()));
    }
    parts.join(" ")
}

fn push_replacement<'a>(
    parts: &mut Vec<String>,
    marker: &str,
    values: impl ExactSizeIterator<Item = &'a str>,
) {
    if values.len() == 0 {
        parts.push(marker.to_string());
    } else {
        parts.extend(values.map(|v| format!("{marker}{v}")));
    }
}
