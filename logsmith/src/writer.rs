use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::args::CliArgs;
use crate::generator::{generate_access_line, mangle};

pub fn write_log(args: &CliArgs) -> io::Result<()> {
    let mut rng = match args.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let file = File::create(args.out())?;
    let mut out = BufWriter::new(file);
    for _ in 0..*args.lines() {
        let line = generate_access_line(&mut rng);
        let line = if rng.random_range(0..100u8) < *args.mangled() {
            mangle(&line, &mut rng)
        } else {
            line
        };
        writeln!(out, "{line}")?;
    }
    out.flush()
}
