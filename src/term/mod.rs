use ansi_term::Style;
use clap::Parser;
use focal::error;
use focal::lang::Error;
use focal::mach::{Event, Listing, Options, Program, Runtime, Statistics};
use linefeed::{
    Command, DefaultTerminal, Function, Interface, Prompter, ReadResult, Signal, Terminal,
};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "focal", version, about = "Run a FOCAL program")]
struct Args {
    /// Upper-case ASK input (default)
    #[arg(short, long, conflicts_with = "lower_case")]
    upper_case: bool,
    /// Keep ASK input as typed
    #[arg(short, long)]
    lower_case: bool,
    /// Print a colon before each ASK
    #[arg(short = 'c', long)]
    ask_colon: bool,
    /// Columns between tab stops, 0 to disable
    #[arg(short, long, value_name = "N", default_value_t = 10)]
    tab: usize,
    /// Seed for FRAN
    #[arg(short, long, value_name = "SEED")]
    random: Option<u64>,
    /// Check the program for syntax errors without running it
    #[arg(short, long)]
    no_run: bool,
    /// Print each line number as it runs
    #[arg(long)]
    trace: bool,
    /// Print program statistics on exit
    #[arg(short, long)]
    print_stats: bool,
    /// Write program statistics to a file on exit
    #[arg(short, long, value_name = "FILE")]
    write_stats: Option<PathBuf>,
    /// Read ASK answers from a file
    #[arg(short, long, value_name = "FILE")]
    input_file: Option<PathBuf>,
    /// Write program output to a file
    #[arg(short, long, value_name = "FILE")]
    output_file: Option<PathBuf>,
    /// Program file
    source: PathBuf,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            tab_columns: self.tab,
            ask_colon: self.ask_colon,
            upper_case: self.upper_case || !self.lower_case,
            trace_lines: self.trace,
            random_seed: self.random,
        }
    }
}

pub fn main() {
    let args = Args::parse();
    let listing = match load(&args.source) {
        Ok(listing) => listing,
        Err(error) => {
            report(&error);
            std::process::exit(1);
        }
    };
    if args.no_run {
        let errors = listing.check();
        for error in &errors {
            report(error);
        }
        args.statistics(Statistics::new(&Program::new(&listing)));
        std::process::exit(if errors.is_empty() { 0 } else { 1 });
    }

    let (mut reader, mut out) = match args.io() {
        Ok(io) => io,
        Err(error) => {
            report(&error);
            std::process::exit(1);
        }
    };
    let mut runtime = Runtime::new(args.options());
    runtime.set_listing(listing);
    runtime.run();

    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("{}", error);
    }
    match main_loop(&mut runtime, &interrupted, &mut reader, &mut out) {
        Ok(0) => args.statistics(runtime.statistics()),
        Ok(status) => std::process::exit(status),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

impl Args {
    /// Where ASK answers come from and where program output goes.
    fn io(&self) -> Result<(Reader, Box<dyn Write>), Error> {
        let reader = match &self.input_file {
            Some(path) => Reader::Plain(Box::new(BufReader::new(open(path)?))),
            None => Reader::new(),
        };
        let out: Box<dyn Write> = match &self.output_file {
            Some(path) => match File::create(path) {
                Ok(file) => Box::new(file),
                Err(error) => {
                    let msg = format!("{}: {}", path.display(), error);
                    return Err(error!(InternalError; msg.as_str()));
                }
            },
            None => Box::new(std::io::stdout()),
        };
        Ok((reader, out))
    }

    fn statistics(&self, stats: Option<Statistics>) {
        if !self.print_stats && self.write_stats.is_none() {
            return;
        }
        let stats = match stats {
            Some(stats) => stats,
            None => {
                println!("\nNO PROGRAM TO EXAMINE\n");
                return;
            }
        };
        if self.print_stats {
            print!("{}", stats);
        }
        if let Some(path) = &self.write_stats {
            if let Err(error) = std::fs::write(path, stats.to_csv()) {
                eprintln!("{}: {}", path.display(), error);
            }
        }
    }
}

/// Pumps the runtime until it stops. The status is 1 when ASK input ran
/// out before the program ended.
fn main_loop(
    runtime: &mut Runtime,
    interrupted: &AtomicBool,
    reader: &mut Reader,
    out: &mut dyn Write,
) -> std::io::Result<i32> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                out.write_all(s.as_bytes())?;
                out.flush()?;
            }
            Event::Errors(errors) => {
                for error in errors.iter() {
                    report(error);
                }
            }
            Event::Input(prompt, caps) => match reader.read_line(&prompt, caps, out)? {
                ReadResult::Input(string) => {
                    runtime.enter(&string);
                }
                ReadResult::Signal(Signal::Interrupt) => runtime.interrupt(),
                ReadResult::Signal(_) | ReadResult::Eof => return Ok(1),
            },
        }
    }
    Ok(0)
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(format!("?{}", error)));
}

/// Line editing when there is a terminal. Otherwise lines come plain
/// from standard input or the input file.
enum Reader {
    Terminal {
        full: Interface<DefaultTerminal>,
        caps: Interface<DefaultTerminal>,
    },
    Plain(Box<dyn BufRead>),
}

impl Reader {
    fn new() -> Reader {
        let interfaces = Interface::new("Ask").and_then(|full| {
            let caps = Interface::new("ASK")?;
            Ok((full, caps))
        });
        match interfaces {
            Ok((full, caps)) => {
                full.set_report_signal(Signal::Interrupt, true);
                caps.set_report_signal(Signal::Interrupt, true);
                CapsFunction::install(&caps);
                Reader::Terminal { full, caps }
            }
            Err(_) => Reader::Plain(Box::new(BufReader::new(std::io::stdin()))),
        }
    }

    /// A plain reader writes the prompt to the program output.
    fn read_line(
        &mut self,
        prompt: &str,
        upper: bool,
        out: &mut dyn Write,
    ) -> std::io::Result<ReadResult> {
        match self {
            Reader::Terminal { full, caps } => {
                let input = if upper { caps } else { full };
                input.set_prompt(prompt)?;
                let result = input.read_line()?;
                if let ReadResult::Signal(Signal::Interrupt) = result {
                    input.set_buffer("")?;
                    input.lock_reader().cancel_read_line()?;
                }
                Ok(result)
            }
            Reader::Plain(input) => {
                out.write_all(prompt.as_bytes())?;
                out.flush()?;
                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(ReadResult::Eof);
                }
                Ok(ReadResult::Input(line))
            }
        }
    }
}

struct CapsFunction;

impl CapsFunction {
    fn install<T: Terminal>(i: &Interface<T>) {
        i.define_function("caps-function", Arc::new(CapsFunction));
        for ch in b'a'..=b'z' {
            i.bind_sequence(
                char::from(ch).to_string(),
                Command::from_str("caps-function"),
            );
        }
    }
}

impl<Term: Terminal> Function<Term> for CapsFunction {
    fn execute(&self, prompter: &mut Prompter<Term>, count: i32, ch: char) -> std::io::Result<()> {
        prompter.insert(count as usize, ch.to_ascii_uppercase())
    }
}

fn open(filename: &Path) -> Result<File, Error> {
    File::open(filename).map_err(|error| {
        let msg = format!("{}: {}", filename.display(), error);
        match error.kind() {
            ErrorKind::NotFound => error!(FileNotFound; msg.as_str()),
            _ => error!(InternalError; msg.as_str()),
        }
    })
}

fn load(filename: &Path) -> Result<Listing, Error> {
    let mut listing = Listing::default();
    let reader = BufReader::new(open(filename)?);
    for (index, line) in reader.lines().enumerate() {
        match line {
            Err(error) => return Err(error!(InternalError; error.to_string().as_str())),
            Ok(line) => {
                if listing.load_str(&line).is_err() {
                    return Err(error!(IllegalDirect; &format!(
                        "LINE NUMBER EXPECTED IN LINE {} OF THE FILE",
                        index + 1
                    )));
                }
            }
        }
    }
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_to_options() {
        let args = Args::parse_from(["focal", "-l", "-c", "-t", "8", "-r", "7", "prog.fc"]);
        let options = args.options();
        assert!(!options.upper_case);
        assert!(options.ask_colon);
        assert_eq!(options.tab_columns, 8);
        assert_eq!(options.random_seed, Some(7));
        assert!(!options.trace_lines);
        assert_eq!(args.source, PathBuf::from("prog.fc"));
    }

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["focal", "prog.fc"]);
        assert_eq!(args.options(), Options::default());
        assert!(!args.no_run);
        assert!(!args.print_stats);
        assert_eq!(args.write_stats, None);
        assert_eq!(args.input_file, None);
        assert_eq!(args.output_file, None);
    }

    #[test]
    fn test_stats_and_redirect_args() {
        let args = Args::parse_from([
            "focal", "-p", "-w", "stats.csv", "-i", "in.txt", "-o", "out.txt", "prog.fc",
        ]);
        assert!(args.print_stats);
        assert_eq!(args.write_stats, Some(PathBuf::from("stats.csv")));
        assert_eq!(args.input_file, Some(PathBuf::from("in.txt")));
        assert_eq!(args.output_file, Some(PathBuf::from("out.txt")));
    }

    fn run_with_input(lines: &[&str], input: &str) -> (i32, String) {
        let mut runtime = Runtime::default();
        for line in lines {
            runtime.enter(line);
        }
        runtime.run();
        let mut reader = Reader::Plain(Box::new(std::io::Cursor::new(input.as_bytes().to_vec())));
        let mut out: Vec<u8> = vec![];
        let status = main_loop(&mut runtime, &AtomicBool::new(false), &mut reader, &mut out).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_redirected_input() {
        let lines = ["1.10 ASK \"N? \", N", "1.20 TYPE N*2, !"];
        assert_eq!(run_with_input(&lines, "21\n"), (0, "N?  42 \n".to_string()));
    }

    #[test]
    fn test_input_runs_out() {
        let lines = ["1.10 ASK \"N? \", N", "1.20 TYPE N*2, !"];
        assert_eq!(run_with_input(&lines, ""), (1, "N? ".to_string()));
    }
}
