use chrono::NaiveDate;

use crate::cli::context::CLIContext;
use crate::export;
use crate::model::{Department, PlacementStatus};
use crate::ops::placement_ops;
use crate::queries::summary_queries;
use crate::queries::view_queries::{self, PageSize};
use crate::validation;

pub fn list(ctx: &CLIContext) {
    let view = view_queries::placement_view(ctx.store.placements(), &ctx.placement_view);

    let mut filters = Vec::new();
    if !ctx.placement_view.query.trim().is_empty() {
        filters.push(format!("search '{}'", ctx.placement_view.query.trim()));
    }
    if let Some(department) = ctx.placement_view.department {
        filters.push(format!("department {}", department.display_name()));
    }
    if let Some(status) = ctx.placement_view.status {
        filters.push(format!("status {}", status.display_name()));
    }
    if !filters.is_empty() {
        println!("Filters: {}", filters.join(", "));
    }

    if view.rows.is_empty() {
        println!("No placements found. Use 'add-placement' to create one.");
        return;
    }

    for placement in &view.rows {
        println!(
            "  {:<24} {:<12} mentor {:<16} {}  {:<10} score {:>3}",
            placement.name,
            placement.department.display_name(),
            placement.mentor,
            placement.start_date.format("%Y-%m-%d"),
            placement.status.display_name(),
            placement.score,
        );
    }
    println!();
    println!(
        "Page {}/{} ({} matching, {} per page)",
        ctx.placement_view.page,
        view.total_pages,
        view.total_matching,
        ctx.placement_view.page_size.rows(),
    );
}

pub fn search(ctx: &mut CLIContext, args: &str) {
    ctx.placement_view.query = args.trim().to_string();
    if ctx.placement_view.query.is_empty() {
        println!("Search cleared.");
    } else {
        println!("Searching for '{}'.", ctx.placement_view.query);
    }
    list(ctx);
}

pub fn filter_department(ctx: &mut CLIContext, args: &str) {
    if args.trim().eq_ignore_ascii_case("all") {
        ctx.placement_view.department = None;
    } else {
        match Department::parse(args) {
            Some(department) => ctx.placement_view.department = Some(department),
            None => {
                println!("Usage: filter-department <engineering|data|design|marketing|operations|all>");
                return;
            }
        }
    }
    list(ctx);
}

pub fn filter_status(ctx: &mut CLIContext, args: &str) {
    if args.trim().eq_ignore_ascii_case("all") {
        ctx.placement_view.status = None;
    } else {
        match PlacementStatus::parse(args) {
            Some(status) => ctx.placement_view.status = Some(status),
            None => {
                println!("Usage: filter-status <active|offer|completed|offboarded|all>");
                return;
            }
        }
    }
    list(ctx);
}

pub fn page_next(ctx: &mut CLIContext) {
    let view = view_queries::placement_view(ctx.store.placements(), &ctx.placement_view);
    ctx.placement_view.next_page(view.total_pages);
    list(ctx);
}

pub fn page_prev(ctx: &mut CLIContext) {
    ctx.placement_view.prev_page();
    list(ctx);
}

pub fn page_size(ctx: &mut CLIContext, args: &str) {
    match PageSize::parse(args) {
        Some(size) => {
            ctx.placement_view.set_page_size(size);
            list(ctx);
        }
        None => println!("Usage: placements-page-size <25|50|100>"),
    }
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Name (required): ") {
            Some(s) if !s.is_empty() => s,
            _ => {
                println!("Name is required.");
                return;
            }
        }
    };

    let email = ctx.prompt("Email: ").unwrap_or_default();

    let department = loop {
        let input = ctx
            .prompt("Department (engineering/data/design/marketing/operations): ")
            .unwrap_or_default();
        if input.is_empty() {
            break Department::Engineering;
        }
        match Department::parse(&input) {
            Some(d) => break d,
            None => println!("Unknown department."),
        }
    };

    let mentor = ctx.prompt("Mentor: ").unwrap_or_default();

    let start_date = loop {
        let input = ctx.prompt("Start date (YYYY-MM-DD): ").unwrap_or_default();
        if input.is_empty() {
            break CLIContext::today();
        }
        match NaiveDate::parse_from_str(&input, "%Y-%m-%d") {
            Ok(date) => break date,
            Err(_) => println!("Invalid date format."),
        }
    };

    let status = loop {
        let input = ctx
            .prompt("Status (active/offer/completed/offboarded): ")
            .unwrap_or_default();
        if input.is_empty() {
            break PlacementStatus::Active;
        }
        match PlacementStatus::parse(&input) {
            Some(s) => break s,
            None => println!("Unknown status."),
        }
    };

    let score = validation::lenient_count(&ctx.prompt("Score (0-100): ").unwrap_or_default());

    match placement_ops::add_placement(
        &mut ctx.store,
        &name,
        &email,
        department,
        &mentor,
        start_date,
        status,
        score,
    ) {
        Ok(placement) => println!("Added {} ({}).", placement.name, placement.id),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    let placement = match ctx.find_placement(args) {
        Some(p) => p,
        None => {
            if args.trim().is_empty() {
                println!("Usage: show-placement <name>");
            }
            return;
        }
    };

    println!();
    println!("Id: {}", placement.id);
    println!("Name: {}", placement.name);
    println!("Email: {}", placement.email);
    println!("Department: {}", placement.department.display_name());
    println!("Mentor: {}", placement.mentor);
    println!("Start date: {}", placement.start_date.format("%Y-%m-%d"));
    println!("Status: {}", placement.status.display_name());
    println!("Score: {}", placement.score);
}

/// Dialog-style edit: Enter keeps the current value.
pub fn edit(ctx: &mut CLIContext, args: &str) {
    let placement = match ctx.find_placement(args) {
        Some(p) => p,
        None => {
            if args.trim().is_empty() {
                println!("Usage: edit-placement <name>");
            }
            return;
        }
    };

    println!("Editing {} (press Enter to keep a value)", placement.name);

    let name = ctx
        .prompt(&format!("Name [{}]: ", placement.name))
        .filter(|s| !s.is_empty());
    let email = ctx
        .prompt(&format!("Email [{}]: ", placement.email))
        .filter(|s| !s.is_empty());
    let department = ctx
        .prompt(&format!(
            "Department [{}]: ",
            placement.department.display_name()
        ))
        .filter(|s| !s.is_empty())
        .and_then(|s| Department::parse(&s));
    let mentor = ctx
        .prompt(&format!("Mentor [{}]: ", placement.mentor))
        .filter(|s| !s.is_empty());
    let start_date = ctx
        .prompt(&format!(
            "Start date [{}]: ",
            placement.start_date.format("%Y-%m-%d")
        ))
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok());
    let status = ctx
        .prompt(&format!("Status [{}]: ", placement.status.display_name()))
        .filter(|s| !s.is_empty())
        .and_then(|s| PlacementStatus::parse(&s));
    let score = ctx
        .prompt(&format!("Score [{}]: ", placement.score))
        .filter(|s| !s.is_empty())
        .map(|s| validation::lenient_count(&s));

    match placement_ops::update_placement(
        &mut ctx.store,
        &placement.id,
        name.as_deref(),
        email.as_deref(),
        department,
        mentor.as_deref(),
        start_date,
        status,
        score,
    ) {
        Ok(updated) => println!("Updated {}.", updated.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn summary(ctx: &CLIContext) {
    let summary = summary_queries::placement_summary(ctx.store.placements());
    println!("Placements: {}", summary.total);
    println!(
        "  Status: {} active / {} offer / {} completed",
        summary.active, summary.offer, summary.completed
    );
    println!("  Average score: {}", summary.avg_score);
}

pub fn export(ctx: &CLIContext, args: &str) {
    let rows = view_queries::filtered_placements(ctx.store.placements(), &ctx.placement_view);
    let path = if args.trim().is_empty() {
        export::placement_export_file_name(CLIContext::today())
    } else {
        args.trim().to_string()
    };

    let document = match export::placement_csv(&rows) {
        Ok(d) => d,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };
    match std::fs::write(&path, document) {
        Ok(()) => println!("Exported {} rows to {}.", rows.len(), path),
        Err(e) => ctx.print_error(&e.into()),
    }
}
