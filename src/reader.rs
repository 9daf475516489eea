use crate::args::InputSource;

use bal::Result;

use std::{
    fs::File,
    io::{self, Read},
};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(source: InputSource) -> Result<Reader<Box<dyn Read>>> {
    let input: Box<dyn Read> = match source {
        InputSource::File(path) => Box::new(File::open(path)?),
        InputSource::Stdin => Box::new(io::stdin()),
    };

    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    return Ok(reader);
}
