// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;

/// Wraps a [`Person`] produced by a transformation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCommand {
    person: Person,
}

impl PersonCommand {
    #[must_use]
    pub const fn new(person: Person) -> Self {
        Self { person }
    }

    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    #[must_use]
    pub fn say_my_name(&self) -> String {
        self.person.say_my_name()
    }
}

impl From<Person> for PersonCommand {
    fn from(person: Person) -> Self {
        Self::new(person)
    }
}
