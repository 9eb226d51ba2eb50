fn main() {
    let mut args = std::env::args().skip(1);
    let mut seed_count: i64 = 30;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" | "-s" => {
                seed_count = match args.next().and_then(|v| v.parse().ok()) {
                    Some(n) => n,
                    None => {
                        eprintln!("Error: --seed requires a number");
                        std::process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                println!("Roster - Intern tracking sheet");
                println!();
                println!("Usage: roster [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --seed <N>   Start with N generated interns (default: 30, 0 for none)");
                println!("  -h, --help       Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    roster::cli::run(seed_count);
}
