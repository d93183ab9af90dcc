use plendict_reader::{Dictionary, EngineKind, Language, StyledRun};
use std::env;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} <sap|ydp> <eng-pol|pol-eng> <dir>... [--find <query>] [--show <index>]",
        program
    );
    std::process::exit(1);
}

fn describe(run: &StyledRun) -> String {
    let mut flags = Vec::new();
    if run.bold {
        flags.push("bold".to_string());
    }
    if run.italic {
        flags.push("italic".to_string());
    }
    if run.script != Default::default() {
        flags.push(format!("{:?}", run.script).to_lowercase());
    }
    if run.align != Default::default() {
        flags.push(format!("align={:?}", run.align).to_lowercase());
    }
    if run.color != Default::default() {
        flags.push(format!("{:?}", run.color).to_lowercase());
    }
    if flags.is_empty() {
        "plain".to_string()
    } else {
        flags.join(",")
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        usage(&args[0]);
    }

    let engine: EngineKind = match args[1].parse() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            usage(&args[0]);
        }
    };
    let language: Language = match args[2].parse() {
        Ok(language) => language,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            usage(&args[0]);
        }
    };

    // Everything up to the first flag is a directory
    let mut dirs = Vec::new();
    let mut query: Option<&str> = None;
    let mut show: Option<usize> = None;
    let mut rest = args[3..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--find" => match rest.next() {
                Some(q) => query = Some(q),
                None => {
                    eprintln!("ERROR: --find flag requires an argument.");
                    std::process::exit(1);
                }
            },
            "--show" => match rest.next().map(|i| i.parse::<usize>()) {
                Some(Ok(index)) => show = Some(index),
                _ => {
                    eprintln!("ERROR: --show flag requires a numeric index.");
                    std::process::exit(1);
                }
            },
            dir => dirs.push(dir),
        }
    }
    if dirs.is_empty() {
        usage(&args[0]);
    }

    println!("Loading {} dictionary '{}'", engine, language.name());
    println!("{}", "=".repeat(60));

    let mut dict = Dictionary::new(engine);
    if let Err(e) = dict.load(&dirs, language) {
        eprintln!("\nERROR: Failed to load dictionary");
        eprintln!("  {}", e);
        std::process::exit(1);
    }

    println!("\nStatistics:");
    println!("  Total words: {}", dict.size());

    println!("\nSample Words (first 10):");
    for (i, entry) in dict.entries().iter().take(10).enumerate() {
        println!("  {}. {}", i + 1, entry.word);
    }
    if dict.size() > 10 {
        println!("  ... and {} more", dict.size() - 10);
    }

    if let Some(query) = query {
        let index = dict.find(query);
        match dict.word(index) {
            Some(word) => {
                println!("\nBest match for '{}': [{}] {}", query, index, word);
                show = show.or(Some(index));
            }
            None => println!("\nNo words to match '{}' against", query),
        }
    }

    if let Some(index) = show {
        match dict.text(index) {
            Ok(definition) => {
                println!("\nDefinition of '{}':", definition.word());
                println!("{}", "-".repeat(60));
                for run in &definition {
                    println!("  [{}] {:?}", describe(&run), run.text);
                }
                println!("{}", "-".repeat(60));
                println!("{}", definition.plain_text());
            }
            Err(e) => {
                eprintln!("\nERROR: Failed to read definition {}", index);
                eprintln!("  {}", e);
                std::process::exit(1);
            }
        }
    }
}
