use anyhow::Context;
use rustyline::error::ReadlineError;

mod repl {
    use shunting::{evaluate, strip_whitespace, to_rpn, ShuntingParser};

    pub fn is_quit(input: &str) -> bool {
        ["quit", "exit", "q"]
            .iter()
            .any(|cmd| input.eq_ignore_ascii_case(cmd))
    }

    /// One-shot mode: postfix form and the rebuilt infix with its value.
    pub fn evalexpr(input: &str) -> Vec<String> {
        let result = match evaluate(input) {
            Err(e) => return vec![format!("Error: {}", e)],
            Ok(result) => result,
        };
        match ShuntingParser::parse_str(&strip_whitespace(input)) {
            Err(e) => vec![format!("Error: {}", e)],
            Ok(rpn) => {
                let infix = rpn.to_infix().unwrap_or_else(|| rpn.to_string());
                vec![format!("RPN: {}", rpn), format!("{} = {}", infix, result)]
            }
        }
    }

    pub fn eval_line(input: &str) -> Vec<String> {
        let result = evaluate(input).and_then(|r| Ok((r, to_rpn(&strip_whitespace(input))?)));
        match result {
            Err(e) => vec![format!("Error: {}", e)],
            Ok((result, rpn)) => vec![
                format!("RPN: {}", rpn.join(" ")),
                format!("Result: {}", result),
            ],
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        for line in repl::evalexpr(&input[..]) {
            println!("{}", line);
        }
        return Ok(());
    }

    let mut rl = rustyline::DefaultEditor::new().context("initializing line editor")?;
    let histpath = dirs::home_dir().map(|h| h.join(".rpncalc_history"));
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            log::debug!("no history at {}", path.display());
        }
    }

    println!("RPN calculator, operators: + - * / ^ ( )");
    println!("Type 'quit' to leave");
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("reading input"),
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if repl::is_quit(input) {
                    break;
                }
                let _ = rl.add_history_entry(input);
                for out in repl::eval_line(input) {
                    println!("{}", out);
                }
            }
        }
    }

    if let Some(path) = histpath {
        if let Err(e) = rl.save_history(&path) {
            log::warn!("couldn't save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}
