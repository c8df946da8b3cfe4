use std::io::BufRead;

use clap::Parser;
use oregex::{
    Flags, PatternBuilder, PatternEngine, PatternError, RegexEngine, RegexMatcher, SearchOptions,
};

/// grep with patterns built from readable options
///
/// Pieces are assembled in a fixed order: the raw pattern, --starts-with,
/// --contains, --fixed-strings, --word, --equals, then --ends-with.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A raw pattern to start from
    #[arg(short = 'E', long)]
    extended_regexp: Option<String>,

    /// Lines must start with this
    #[arg(long)]
    starts_with: Option<String>,

    /// Lines must contain this pattern
    #[arg(long)]
    contains: Vec<String>,

    /// Lines must contain this text, special characters are matched literally
    #[arg(short = 'F', long)]
    fixed_strings: Vec<String>,

    /// Lines must contain this as a whole word
    #[arg(short = 'w', long)]
    word: Vec<String>,

    /// Lines must be exactly this
    #[arg(long)]
    equals: Option<String>,

    /// Lines must end with this
    #[arg(long)]
    ends_with: Option<String>,

    /// Ignore case when matching
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Print the number of matches instead of the matching lines
    #[arg(short = 'c', long, conflicts_with = "replace")]
    count: bool,

    /// Print every line with the first match replaced by this
    #[arg(short = 'r', long)]
    replace: Option<String>,

    /// With --replace, replace every match instead of only the first
    #[arg(short = 'a', long, requires = "replace")]
    all: bool,

    /// Print the assembled pattern and exit
    #[arg(long)]
    print_pattern: bool,
}

impl Args {
    fn pattern(&self) -> PatternBuilder {
        let mut builder = PatternBuilder::create(self.extended_regexp.as_deref());

        if let Some(start) = &self.starts_with {
            builder = builder.starts_with(start.as_str());
        }
        for value in &self.contains {
            builder = builder.contains_in_it(value);
        }
        for value in &self.fixed_strings {
            builder = builder.contains_literal(value);
        }
        for value in &self.word {
            builder = builder.has_word(value);
        }
        if let Some(value) = &self.equals {
            builder = builder.equals_to(value);
        }
        if let Some(end) = &self.ends_with {
            builder = builder.ends_with(end.as_str());
        }

        builder
    }

    fn options(&self) -> SearchOptions {
        SearchOptions::default().case_sensitive(!self.ignore_case)
    }
}

/// Matchers compiled once and reused for every input line
struct LineProcessor {
    engine: RegexEngine,
    counter: RegexMatcher,
    replacer: Option<(RegexMatcher, String)>,
    print_matching: bool,
}

impl LineProcessor {
    fn new(args: &Args, pattern: &PatternBuilder) -> Result<Self, PatternError> {
        let engine = *pattern.engine();
        let flags = Flags::from(args.options());

        let counter = engine.compile(pattern.as_str(), flags.with_global(true))?;
        let replacer = match &args.replace {
            Some(replacement) => {
                let matcher = engine.compile(pattern.as_str(), flags.with_global(args.all))?;
                Some((matcher, replacement.clone()))
            }
            None => None,
        };

        Ok(LineProcessor {
            engine,
            counter,
            replacer,
            print_matching: !args.count,
        })
    }

    /// Number of matches in `line` and what to print for it
    fn process(&self, line: &str) -> (usize, Option<String>) {
        let count = self
            .engine
            .match_all(&self.counter, line)
            .map_or(0, |matches| matches.len());

        let output = match &self.replacer {
            Some((matcher, replacement)) => Some(self.engine.replace(matcher, line, replacement)),
            None if count > 0 && self.print_matching => Some(line.to_string()),
            None => None,
        };

        (count, output)
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let pattern = args.pattern();

    log::debug!("Assembled pattern {:?} with {:?}", pattern.build(), args.options());

    if args.print_pattern {
        println!("{}", pattern);
        return;
    }

    // Compile once up front; a broken pattern is reported before reading any input
    let processor = match LineProcessor::new(&args, &pattern) {
        Ok(processor) => processor,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let stdin = std::io::stdin();
    let mut matches = 0;

    for line in stdin.lock().lines() {
        let input_line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                std::process::exit(2);
            }
        };

        let (count, output) = processor.process(&input_line);
        matches += count;

        if let Some(output) = output {
            println!("{}", output);
        }
    }

    if args.count {
        println!("{}", matches);
    }

    std::process::exit(if matches > 0 { 0 } else { 1 });
}
