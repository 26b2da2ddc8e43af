
extern crate clap;
#[macro_use] extern crate log;
extern crate fern;
extern crate chrono;
extern crate term_grid;

pub mod assembler;

use clap::{Arg, ArgMatches, App};
use term_grid::{Grid, GridOptions, Direction, Filling, Cell};

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    let args = process_arguments();
    initialize_logging(args.occurrences_of("verbose"));

    debug!("Arguments:\n\tVerbosity: {}\n\tTest Mode: {}\n\tOutfile: {}\n\tInfile: {}",
        match args.occurrences_of("verbose") {
            0 => log::LevelFilter::Error.to_string(),
            1 => log::LevelFilter::Warn.to_string(),
            2 => log::LevelFilter::Info.to_string(),
            3 | _ => log::LevelFilter::Debug.to_string(),
        },
        args.is_present("test"),
        args.value_of("output").unwrap_or("None"),
        args.value_of("INPUT").unwrap()
    );

    let ifile = args.value_of("INPUT").unwrap();
    // Read the specified input file.
    let ipath = Path::new(ifile);

    // Open the path in read-only mode, returns `io::Result<File>`
    let ifile = match File::open(&ipath) {
        Err(err) => {
            error!("fatal: unable to open input file `{}`: {}", ipath.display(), err);
            std::process::exit(1);
        },
        Ok(file) => file,
    };

    let mut asm = assembler::parser::Assembler::new();
    let ir = match asm.assemble(Box::new(ifile)) {
        Err(err) => {
            error!("fatal: {}", err);
            std::process::exit(1);
        },
        Ok(ir) => ir,
    };

    if args.is_present("test") {
        let mut grid = Grid::new(GridOptions {
            filling:     Filling::Spaces(1),
            direction:   Direction::LeftToRight,
        });

        for (idx, ins) in ir.iter().enumerate() {
            grid.add(Cell::from(format!("{}:", idx)));
            grid.add(Cell::from(ins.symbolic_name().to_string()));
            grid.add(Cell::from("=>".to_string()));
            grid.add(Cell::from(format!("{}", ins)));
        }

        println!("{}", grid.fit_into_columns(4));
    }

    let opath = if let Some(filename) = args.value_of("output") {
        PathBuf::from(filename)
    } else {
        default_output_path(ipath)
    };

    let mut ofile = match File::create(&opath) {
        Err(err) => {
            error!("fatal: unable to open output file `{}`: {}", opath.display(), err);
            std::process::exit(1);
        },
        Ok(file) => file,
    };

    for ins in ir.iter() {
        if let Err(err) = writeln!(ofile, "{}", ins) {
            error!("fatal: unable to write to output file `{}`: {}", opath.display(), err);
            std::process::exit(1);
        }
    }

    println!("assembled {} instruction(s) to `{}`", ir.len(), opath.display());
}

/// The debug dump lands next to the input by default,
/// as `<stem>_intermediate.txt`.
fn default_output_path(ipath: &Path) -> PathBuf {
    let stem = ipath.file_stem().unwrap_or_else(|| ipath.as_os_str());
    let mut name = stem.to_os_string();
    name.push("_intermediate.txt");
    ipath.with_file_name(name)
}

fn process_arguments() -> ArgMatches<'static> {
    App::new(option_env!("CARGO_PKG_NAME").unwrap())
        .version(option_env!("CARGO_PKG_VERSION").unwrap())
        .about(option_env!("CARGO_PKG_DESCRIPTION").unwrap())
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .required(true)
            .multiple(false)
            .index(1))
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .takes_value(false)
            .help("Sets the level of verbosity"))
        .arg(Arg::with_name("output")
            .short("o")
            .takes_value(true)
            .help("write the intermediate representation dump to an outfile"))
        .arg(Arg::with_name("test")
            .short("t")
            .long("test")
            .takes_value(false)
            .help("prints the intermediate representation to STDOUT alongside assembly"))
        .get_matches()
}

fn initialize_logging(verbosity: u64) {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(match verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 | _ => log::LevelFilter::Debug,
        })
        .chain(std::io::stdout())
        .apply().ok();
}
