// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::person::Person;

pub fn person_julio() -> Person {
    Person::new("Julio", "Chacón")
}

pub fn person_carolin() -> Person {
    Person::new("Carolin", "Vilela")
}

pub fn person_nayeli() -> Person {
    Person::new("Nayeli", "Diaz")
}

pub fn person_fabiana() -> Person {
    Person::new("Fabiana", "Chacón")
}

/// The four fixture people in their canonical emission order.
pub fn people() -> Vec<Person> {
    vec![
        person_julio(),
        person_carolin(),
        person_nayeli(),
        person_fabiana(),
    ]
}

pub fn first_names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|p| p.first_name.as_str()).collect()
}
