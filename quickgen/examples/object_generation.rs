//! Example of generating a record by building a generator from its field generators.

use quickgen::{Generator, choose, object, one_of_values};

#[derive(Debug)]
#[allow(dead_code)]
struct Person {
    name: &'static str,
    surname: &'static str,
    age: u32,
    city: &'static str,
}

impl Person {
    fn new(name: &'static str, surname: &'static str, age: u32, city: &'static str) -> Self {
        Self {
            name,
            surname,
            age,
            city,
        }
    }
}

fn main() {
    let names = [
        "John", "Martin", "George", "Oliver", "Olivia", "Sophia", "Lily", "Freya", "Ella",
    ];
    let surnames = ["Smith", "Jones", "Brown", "Taylor"];
    let cities = ["London", "Liverpool", "Bristol", "Manchester", "Bolton"];

    let people = object(
        Person::new,
        (
            one_of_values(names),
            one_of_values(surnames),
            choose(0.0, 120.0).map(|age: f64| age.floor() as u32),
            one_of_values(cities),
        ),
    );

    for _ in 0..5 {
        println!("{:?}", people.generate().get());
    }
}
