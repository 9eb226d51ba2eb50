pub mod context;
pub mod intern_commands;
pub mod placement_commands;

use crate::health;
use crate::ops::intern_ops;
use crate::store::RosterStore;
use context::CLIContext;

/// Run the interactive REPL, optionally pre-seeding the tracker roster.
pub fn run(seed_count: i64) {
    println!("Intern Roster");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    // Fire-and-forget; the session does not depend on the backend being up.
    health::ping();

    let mut ctx = CLIContext::new(RosterStore::new());
    if seed_count > 0 {
        match intern_ops::add_batch(&mut ctx.store, seed_count, &mut ctx.factory) {
            Ok(added) => println!("Seeded {} interns.", added.len()),
            Err(e) => ctx.print_error(&e),
        }
        println!();
    }

    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Tracker table
            "interns" | "list" | "ls" => intern_commands::list(ctx),
            "search" => intern_commands::search(ctx, args),
            "filter-sheet" => intern_commands::filter_sheet(ctx, args),
            "filter-performance" => intern_commands::filter_performance(ctx, args),
            "next" => intern_commands::page_next(ctx),
            "prev" => intern_commands::page_prev(ctx),
            "page-size" => intern_commands::page_size(ctx, args),
            "add-intern" => intern_commands::add(ctx, args),
            "seed" => intern_commands::seed_batch(ctx, args),
            "show-intern" | "show" => intern_commands::show(ctx, args),
            "summary" => intern_commands::summary(ctx),
            "export" => intern_commands::export(ctx, args),

            // Granular intern edits
            "edit-name" => intern_commands::edit_name(ctx, args),
            "edit-email" => intern_commands::edit_email(ctx, args),
            "edit-activity" => intern_commands::edit_activity(ctx, args),
            "edit-excel" => intern_commands::edit_excel(ctx, args),
            "edit-speakers" => intern_commands::edit_speakers(ctx, args),
            "edit-performance" => intern_commands::edit_performance(ctx, args),
            "edit-segregation" => intern_commands::edit_segregation(ctx, args),
            "edit-sheet" => intern_commands::edit_sheet(ctx, args),
            "edit-repurposed" => intern_commands::edit_repurposed(ctx, args),
            "toggle-ai-chat" => intern_commands::toggle_ai_chat(ctx, args),
            "toggle-data-mining" => intern_commands::toggle_data_mining(ctx, args),

            // Placement directory
            "placements" => placement_commands::list(ctx),
            "search-placements" => placement_commands::search(ctx, args),
            "filter-department" => placement_commands::filter_department(ctx, args),
            "filter-status" => placement_commands::filter_status(ctx, args),
            "placements-next" => placement_commands::page_next(ctx),
            "placements-prev" => placement_commands::page_prev(ctx),
            "placements-page-size" => placement_commands::page_size(ctx, args),
            "add-placement" => placement_commands::add(ctx, args),
            "show-placement" => placement_commands::show(ctx, args),
            "edit-placement" => placement_commands::edit(ctx, args),
            "placement-summary" => placement_commands::summary(ctx),
            "export-placements" => placement_commands::export(ctx, args),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Parse input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(
        r#"
COMMANDS:

  Tracker table:
    interns                  Show the current page
    search <query>           Search name/email/segregation (empty clears)
    filter-sheet <value>     green | red | black | all
    filter-performance <v>   good | weak | all
    next / prev              Page navigation
    page-size <n>            25 | 50 | 100 (resets to page 1)
    add-intern [name]        Add a new intern
    seed <n>                 Add n generated interns
    show-intern <name>       Show intern details
    summary                  Aggregate counters over the full roster
    export [path]            Export the filtered rows as CSV

  Intern quick edits:
    edit-name <name>         Change name
    edit-email <name>        Change email
    edit-activity <name>     Active / Inactive / Leave
    edit-excel <name>        Excel submitted yes/no
    edit-speakers <name>     Update speakers count
    edit-performance <name>  Good / Weak
    edit-segregation <name>  Resign / Warning / Terminated / Relocated / none
    edit-sheet <name>        Green / Red / Black
    edit-repurposed <name>   Data repurposed yes/no
    toggle-ai-chat <name>    Flip the AI chat flag
    toggle-data-mining <name> Flip the data mining flag

  Placement directory:
    placements               Show the current page
    search-placements <q>    Search name/email/mentor/department
    filter-department <v>    engineering | data | design | marketing | operations | all
    filter-status <v>        active | offer | completed | offboarded | all
    placements-next / placements-prev
    placements-page-size <n> 25 | 50 | 100
    add-placement [name]     Add a placement (interactive)
    show-placement <name>    Show placement details
    edit-placement <name>    Edit all fields dialog-style
    placement-summary        Status counts and average score
    export-placements [path] Export the filtered rows as CSV

  Other:
    help                     Show this help
    exit / quit / q          Exit

TIPS:
  - Name lookups are case-insensitive and partial matches work"#
    );
}
