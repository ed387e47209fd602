use std::env;
use std::process;

use awk_corpus::{Client, CorpusWriter, pick_page, transform};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match run(&args[1..]) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("awk-corpus: {}", e);
            process::exit(2);
        }
    }
}

fn run(args: &[String]) -> Result<i32, Box<dyn std::error::Error>> {
    let mut output_root = "tests".to_string();
    let mut positional: Vec<String> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];

        if arg == "--help" || arg == "-h" {
            print_help();
            return Ok(0);
        }

        if arg == "--version" {
            println!("awk-corpus {}", env!("CARGO_PKG_VERSION"));
            return Ok(0);
        }

        if arg == "-o" || arg == "--output" {
            i += 1;
            if i >= args.len() {
                return Err("option -o requires an argument".into());
            }
            output_root = args[i].clone();
        } else if arg.starts_with('-') {
            return Err(format!("unknown option: {}", arg).into());
        } else {
            positional.push(arg.clone());
        }

        i += 1;
    }

    if positional.len() != 3 {
        eprintln!("Usage: awk-corpus [options] <github-token> <page-bound> <file-count>");
        return Ok(1);
    }

    let token = &positional[0];
    let Ok(page_bound) = positional[1].parse::<u32>() else {
        eprintln!("Page bound must be a positive integer, got '{}'", positional[1]);
        return Ok(1);
    };
    let Ok(count) = positional[2].parse::<u32>() else {
        eprintln!("File count must be a positive integer, got '{}'", positional[2]);
        return Ok(1);
    };

    if page_bound < 1 {
        eprintln!("Page bound must be at least 1");
        return Ok(1);
    }
    if !(1..=100).contains(&count) {
        eprintln!("Number of files must be between 1 and 100");
        return Ok(1);
    }

    let page = pick_page(&mut rand::thread_rng(), page_bound);
    println!("Downloading {} files from page {}", count, page);

    let client = Client::new(token.as_str());
    let items = client.search(page, count)?;
    println!("Downloaded {} files", items.len());

    let writer = CorpusWriter::new(&output_root);
    for item in items.into_iter().filter(|item| item.is_awk()) {
        let original = client.fetch_raw(&item)?;
        let transformed = transform(&original);
        writer.write(&item.name, &item.html_url, &original, &transformed)?;
        log::debug!("wrote fixtures for {}", item.name);
    }

    Ok(0)
}

fn print_help() {
    println!(
        r#"Usage: awk-corpus [OPTIONS] <github-token> <page-bound> <file-count>

Builds an AWK test corpus from GitHub code search. Every fetched .awk file
is stored unchanged under <output>/normal and with backtick-delimited regex
literals under <output>/backtick, each prefixed with a provenance line.

Arguments:
  github-token   GitHub API token, sent as 'Authorization: token ...'
  page-bound     The result page is picked at random from 1..=page-bound
  file-count     Number of files to request (between 1 and 100)

Options:
  -o, --output dir   Output root directory (default: tests)
  --version          Print version information
  --help             Print this help message

Examples:
  awk-corpus "$GITHUB_TOKEN" 10 25
  awk-corpus -o corpus "$GITHUB_TOKEN" 3 100
"#
    );
}
