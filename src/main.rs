use rpn_calc::Calculator;

use clap::Parser;
use std::io::{self, BufRead, Write};

/// Interactive Reverse Polish Notation calculator.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Default log filter, used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Evaluate these expressions as one batch and exit.
    expressions: Vec<String>,
}

fn print_welcome() {
    println!("==========================================");
    println!("        RPN Calculator");
    println!("==========================================");
    println!("Basic Operations: +, -, *, /");
    println!("Advanced Operations: sqrt, ^, sin, cos, tan, fib, pascal");
    println!("Commands: c(clear), s(stack), h(history), q(quit)");
    println!("Example: '5 5 + 3 *' or '10 fib'");
    println!("==========================================");
}

fn print_help() {
    println!();
    println!("Available Commands:");
    println!("  <expression>  - Enter RPN expression");
    println!("  c         - Clear stack");
    println!("  s         - Display stack");
    println!("  h         - Show calculation history");
    println!("  clearh    - Clear history records");
    println!("  batch     - Batch calculation mode");
    println!("  help      - Show help information");
    println!("  q         - Exit program");
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}

fn print_history(calculator: &Calculator) {
    if calculator.history().is_empty() {
        println!("History is empty");
        return;
    }
    println!("Calculation History:");
    for line in calculator.display_history() {
        println!("{}", line);
    }
}

fn print_batch(calculator: &mut Calculator, expressions: &[String]) {
    println!("Calculation Results:");
    let results = calculator.evaluate_batch(expressions);
    for (index, (expression, result)) in expressions.iter().zip(results).enumerate() {
        if result.is_nan() {
            println!("{}. {} = Error", index + 1, expression);
        } else {
            println!("{}. {} = {}", index + 1, expression, result);
        }
    }
}

/// Reads expressions until an empty line or the end of input.
fn collect_expressions(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<Vec<String>> {
    let mut expressions = Vec::new();
    loop {
        prompt(&format!("Expression {}: ", expressions.len() + 1))?;
        match lines.next().transpose()? {
            Some(line) if !line.is_empty() => expressions.push(line),
            _ => break,
        }
    }
    Ok(expressions)
}

fn batch_mode(calculator: &mut Calculator, lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<()> {
    println!();
    println!("Batch Calculation Mode (press Enter to finish):");

    let expressions = collect_expressions(lines)?;

    if !expressions.is_empty() {
        println!();
        print_batch(calculator, &expressions);
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let env = env_logger::Env::default().default_filter_or(args.log_level.as_str());
    env_logger::Builder::from_env(env).format_timestamp(None).init();

    let mut calculator = Calculator::new();

    if !args.expressions.is_empty() {
        print_batch(&mut calculator, &args.expressions);
        return Ok(());
    }

    print_welcome();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        prompt("> ")?;

        let line = match lines.next().transpose()? {
            Some(line) => line,
            None => {
                println!("Goodbye!");
                break;
            },
        };

        match line.trim() {
            "q" | "quit" => {
                println!("Goodbye!");
                break;
            },
            "c" | "clear" => {
                calculator.clear();
                println!("Stack cleared");
            },
            "s" | "stack" => println!("{}", calculator.display_stack()),
            "h" | "history" => print_history(&calculator),
            "clearh" => {
                calculator.clear_history();
                println!("History records cleared");
            },
            "batch" => batch_mode(&mut calculator, &mut lines)?,
            "help" => print_help(),
            "" => {},
            expression => match calculator.evaluate_expression(expression) {
                Ok(result) => println!("Result: {}", result),
                Err(e) => eprintln!("Error: {}", e),
            },
        }
    }

    Ok(())
}
