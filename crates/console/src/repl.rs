//! Interactive shell.
//!
//! Maps input lines onto the controller operations, standing in for the
//! original page's form controls. Generic over reader and writer so tests
//! can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use probe_application::ProxyClient;
use probe_domain::HttpMethod;

use crate::controller::ConsoleController;

const PROMPT: &str = "probe> ";

const HELP: &str = "\
Commands:
  endpoint <url>      set the endpoint under test
  method <verb>       set the HTTP method (GET, POST, PUT, DELETE, PATCH)
  add                 append a parameter row
  remove <n>          remove parameter row n
  key <n> <text>      edit the key of row n
  value <n> <text>    edit the value of row n
  rows                list the parameter rows
  send                dispatch the request
  help                show this help
  quit                exit";

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Endpoint(String),
    Method(String),
    Add,
    Remove(usize),
    Key(usize, String),
    Value(usize, String),
    Rows,
    Send,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));

    match word {
        "endpoint" => Command::Endpoint(rest.to_string()),
        "method" => Command::Method(rest.to_string()),
        "add" => Command::Add,
        "remove" => rest
            .parse()
            .map_or_else(|_| Command::Unknown(line.to_string()), Command::Remove),
        "key" | "value" => {
            let (index, text) = rest
                .split_once(char::is_whitespace)
                .map_or((rest, ""), |(i, t)| (i, t.trim()));
            match index.parse() {
                Ok(n) if word == "key" => Command::Key(n, text.to_string()),
                Ok(n) => Command::Value(n, text.to_string()),
                Err(_) => Command::Unknown(line.to_string()),
            }
        }
        "rows" => Command::Rows,
        "send" => Command::Send,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Runs the shell until `quit` or end of input.
///
/// # Errors
///
/// Returns an error when reading from `input` or writing to `output`
/// fails.
pub async fn run<C, R, W>(
    controller: &mut ConsoleController<C>,
    input: R,
    mut output: W,
) -> std::io::Result<()>
where
    C: ProxyClient,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Probe interactive console. Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else { break };
        match parse(&line?) {
            Command::Endpoint(url) => controller.set_endpoint(url),
            Command::Method(verb) => match verb.parse::<HttpMethod>() {
                Ok(method) => controller.set_method(method),
                Err(error) => writeln!(output, "{error}")?,
            },
            Command::Add => controller.add_row(),
            Command::Remove(index) => controller.remove_row(index),
            Command::Key(index, text) => controller.edit_key(index, text),
            Command::Value(index, text) => controller.edit_value(index, text),
            Command::Rows => {
                for (index, row) in controller.rows().iter().enumerate() {
                    writeln!(output, "{index}: {} = {}", row.key, row.value)?;
                }
            }
            Command::Send => {
                if controller.is_busy() {
                    writeln!(output, "A request is already in flight.")?;
                    continue;
                }
                match controller.submit().await {
                    Ok(()) => {
                        if let Some(rendered) = controller.output() {
                            writeln!(output, "{}", rendered.text)?;
                        }
                    }
                    Err(error) => writeln!(output, "{error}")?,
                }
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(text) => {
                writeln!(output, "Unrecognized command: {text}. Type 'help'.")?;
            }
        }
    }

    Ok(())
}
