//!
//! The performance parser binary.
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
    if !arguments.quiet {
        println!(
            "     {} {:?} ({} recovery)",
            "Parsing".bright_green().bold(),
            arguments.base_path,
            arguments.recovery,
        );
    }

    let parser = performance_analyzer::Parser::new(arguments.recovery);
    let input = performance_analyzer::Input::new(arguments.base_path, parser);
    let report = input.collect()?;

    if !arguments.quiet {
        println!(
            "      {} {} runs with {} tests to {:?}",
            "Saving".bright_green().bold(),
            report.runs.len(),
            report.tests_count(),
            arguments.output_path,
        );
    }

    let output: performance_analyzer::Output = (report, arguments.output_format).try_into()?;
    output.write_to_file(arguments.output_path.as_path())?;

    Ok(())
}
