//!
//! The repeated runner binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    env_logger::init();

    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => performance_analyzer::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            performance_analyzer::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let arguments = arguments.validate()?;
    let directory = arguments.output_directory.join(arguments.test_name.as_str());

    println!(
        "     {} {:?} {} times, logs in {directory:?}",
        "Running".bright_green().bold(),
        arguments.executable,
        arguments.count,
    );

    let harness = performance_analyzer::Harness::new(
        arguments.executable,
        arguments.arguments,
        arguments.count,
        directory,
        arguments.quiet,
    );
    let summary = harness.run()?;
    print!("{summary}");

    Ok(())
}
