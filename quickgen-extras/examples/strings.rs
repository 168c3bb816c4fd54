//! Example of composing string generators into a small fixture record.

use quickgen::{Generator, array_of, object};
use quickgen_extras::prelude::*;

#[derive(Debug)]
#[allow(dead_code)]
struct Device {
    id: String,
    name: String,
    serial: String,
    tags: Vec<String>,
}

fn main() {
    let devices = object(
        |id, name, serial, tags| Device {
            id,
            name,
            serial,
            tags,
        },
        (
            uuid(),
            identifier(12),
            concat(vec![
                repeat(2, alpha_upper_char()).boxed(),
                hex_string(6).boxed(),
            ]),
            array_of(identifier(6), 3),
        ),
    );

    for _ in 0..5 {
        println!("{:?}", devices.generate().get());
    }
}
