use std::io::{stdin, stdout, IsTerminal, Read, Write};
use std::process;

use anyhow::{Context, Error};
use clap::{App, AppSettings, Arg, ArgMatches};
use log::debug;

use titlecaser::{title_case_tokens, to_title_case_bytes};

fn main() {
    env_logger::init();

    let mut app = App::new("titlecaser")
        .version(env!("CARGO_PKG_VERSION"))
        .version_short("v")
        .author("Aleksei Voronov <despawn@gmail.com>")
        .about("Transform text into a properly capitalized title.")
        .setting(AppSettings::TrailingVarArg)
        .after_help(
            "EXAMPLES:\n    titlecaser \"the quick brown fox\"\n    echo \"the quick brown fox\" | titlecaser",
        )
        .arg(
            Arg::with_name("tokens")
                .long("tokens")
                .help("Print the title-cased tokens as JSON instead of the title"),
        )
        .arg(
            Arg::with_name("text")
                .value_name("TEXT")
                .help("Text to title-case. Read from stdin when omitted.")
                .multiple(true),
        );

    let matches = app.clone().get_matches();

    if !matches.is_present("text") && stdin().is_terminal() {
        app.print_help().ok();
        println!();
        return;
    }

    if let Err(err) = run(&matches) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = match matches.values_of("text") {
        Some(words) => words.collect::<Vec<_>>().join(" ").into_bytes(),
        None => read_stdin()?,
    };
    debug!("read {} bytes of input", input.len());

    let output = if matches.is_present("tokens") {
        let text = std::str::from_utf8(&input).context("cannot decode input")?;
        serde_json::to_string(&title_case_tokens(text)?)?
    } else {
        to_title_case_bytes(&input)?
    };

    let mut stdout = stdout();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;

    Ok(())
}

fn read_stdin() -> Result<Vec<u8>, Error> {
    let mut buffer = Vec::new();
    stdin()
        .lock()
        .read_to_end(&mut buffer)
        .context("cannot read from stdin")?;

    Ok(join_lines(&buffer))
}

/// Join lines with single spaces, dropping `\r\n` and `\n` line endings.
fn join_lines(buffer: &[u8]) -> Vec<u8> {
    let lines: Vec<&[u8]> = buffer
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .collect();

    // a trailing newline doesn't start another line
    let lines = match lines.split_last() {
        Some((last, rest)) if last.is_empty() => rest,
        _ => &lines[..],
    };

    lines.join(&b' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines(b"the quick\nbrown fox\n"), b"the quick brown fox");
        assert_eq!(join_lines(b"windows\r\nlines\r\n"), b"windows lines");
        assert_eq!(join_lines(b"no newline"), b"no newline");
        assert_eq!(join_lines(b"blank\n\nline"), b"blank  line");
        assert_eq!(join_lines(b""), b"");
    }
}
