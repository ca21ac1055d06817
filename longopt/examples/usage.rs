use std::process::ExitCode;

use longopt::{CommandLine, Error, Options};

fn declare(options: &mut Options) -> Result<(), Error> {
    options.add("help", false, "print this help and exit")?;
    options.add("verbose", false, "print more details")?;
    options.add("jobs", 1u32, "number of parallel jobs")?;
    options.add("ratio", 0.5f64, "sampling ratio")?;
    options.add("name", String::from("world"), "who to greet")?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("usage");

    let mut options = Options::new();
    declare(&mut options).expect("options must be declared once");

    let mut cmdline = CommandLine::new(&mut options);

    let mut usage = String::new();
    cmdline
        .usage(program, &mut usage)
        .expect("usage must be formatted");

    if let Err(err) = cmdline.parse(&argv) {
        eprintln!("error: {err}");
        eprint!("{usage}");
        return ExitCode::FAILURE;
    }

    let options = cmdline.options();
    if options.get::<bool>("help") == Ok(true) {
        print!("{usage}");
        return ExitCode::SUCCESS;
    }

    let name = options.get::<String>("name").unwrap_or_default();
    let jobs = options.get::<u32>("jobs").unwrap_or_default();
    let ratio = options.get::<f64>("ratio").unwrap_or_default();

    println!("hello, {name}! ({jobs} jobs, ratio {ratio})");

    if options.get::<bool>("verbose") == Ok(true) {
        for info in options.describe() {
            println!("{} = {} (default {})", info.name, info.value, info.default);
        }
    }

    ExitCode::SUCCESS
}
