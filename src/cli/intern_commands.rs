use crate::avatar;
use crate::cli::context::CLIContext;
use crate::export;
use crate::model::{ActivityStatus, Intern, Performance, Segregation, SheetStatus, YesNo};
use crate::ops::intern_ops::{self, InternChange};
use crate::queries::summary_queries;
use crate::queries::view_queries::{self, PageSize};
use crate::validation;

pub fn list(ctx: &CLIContext) {
    let view = view_queries::intern_view(ctx.store.interns(), &ctx.intern_view);

    let mut filters = Vec::new();
    if !ctx.intern_view.query.trim().is_empty() {
        filters.push(format!("search '{}'", ctx.intern_view.query.trim()));
    }
    if let Some(status) = ctx.intern_view.sheet_status {
        filters.push(format!("sheet {}", status.display_name()));
    }
    if let Some(performance) = ctx.intern_view.performance {
        filters.push(format!("performance {}", performance.display_name()));
    }
    if !filters.is_empty() {
        println!("Filters: {}", filters.join(", "));
    }

    if view.rows.is_empty() {
        println!("No interns on this page.");
        return;
    }

    for intern in &view.rows {
        let label = if intern.name.trim().is_empty() {
            intern.id.to_string()
        } else {
            intern.name.clone()
        };
        let initials = avatar::initials(&label);
        let segregation = intern
            .segregation
            .map(|s| s.display_name())
            .unwrap_or("-");
        println!(
            "  [{:<2}] {:<24} {:<10} spk {:>4}/{} ({:>3}%)  {:<5} {:<6} seg:{}",
            initials,
            label,
            intern.activity.display_name(),
            intern.speakers_count,
            intern.speakers_target,
            intern.speakers_progress(),
            intern.performance.display_name(),
            intern.sheet_status.display_name(),
            segregation,
        );
    }
    println!();
    println!(
        "Page {}/{} ({} matching, {} per page)",
        ctx.intern_view.page,
        view.total_pages,
        view.total_matching,
        ctx.intern_view.page_size.rows(),
    );
}

pub fn search(ctx: &mut CLIContext, args: &str) {
    ctx.intern_view.query = args.trim().to_string();
    if ctx.intern_view.query.is_empty() {
        println!("Search cleared.");
    } else {
        println!("Searching for '{}'.", ctx.intern_view.query);
    }
    list(ctx);
}

pub fn filter_sheet(ctx: &mut CLIContext, args: &str) {
    if args.trim().eq_ignore_ascii_case("all") {
        ctx.intern_view.sheet_status = None;
    } else {
        match SheetStatus::parse(args) {
            Some(status) => ctx.intern_view.sheet_status = Some(status),
            None => {
                println!("Usage: filter-sheet <green|red|black|all>");
                return;
            }
        }
    }
    list(ctx);
}

pub fn filter_performance(ctx: &mut CLIContext, args: &str) {
    if args.trim().eq_ignore_ascii_case("all") {
        ctx.intern_view.performance = None;
    } else {
        match Performance::parse(args) {
            Some(performance) => ctx.intern_view.performance = Some(performance),
            None => {
                println!("Usage: filter-performance <good|weak|all>");
                return;
            }
        }
    }
    list(ctx);
}

pub fn page_next(ctx: &mut CLIContext) {
    let view = view_queries::intern_view(ctx.store.interns(), &ctx.intern_view);
    ctx.intern_view.next_page(view.total_pages);
    list(ctx);
}

pub fn page_prev(ctx: &mut CLIContext) {
    ctx.intern_view.prev_page();
    list(ctx);
}

pub fn page_size(ctx: &mut CLIContext, args: &str) {
    match PageSize::parse(args) {
        Some(size) => {
            ctx.intern_view.set_page_size(size);
            list(ctx);
        }
        None => println!("Usage: page-size <25|50|100>"),
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

    match intern_ops::add_intern(&mut ctx.store, &name, &email) {
        Ok(intern) => println!("Added {} ({}).", intern.name, intern.id),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn seed_batch(ctx: &mut CLIContext, args: &str) {
    let count = validation::lenient_count(args);
    match intern_ops::add_batch(&mut ctx.store, count, &mut ctx.factory) {
        Ok(added) => println!("Added {} generated interns.", added.len()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    let intern = match ctx.find_intern(args) {
        Some(i) => i,
        None => {
            if args.trim().is_empty() {
                println!("Usage: show-intern <name>");
            }
            return;
        }
    };

    let label = if intern.name.trim().is_empty() {
        intern.id.to_string()
    } else {
        intern.name.clone()
    };

    println!();
    println!("Id: {}", intern.id);
    println!("Name: {}", intern.name);
    println!("Email: {}", intern.email);
    println!(
        "Avatar: [{}] hue {}",
        avatar::initials(&label),
        avatar::hue(&label)
    );
    println!("Activity: {}", intern.activity.display_name());
    println!("Excel submitted: {}", intern.excel_submitted.display_name());
    println!("AI chat added: {}", if intern.ai_chat_added { "Yes" } else { "No" });
    println!("Data mining GC: {}", if intern.data_mining_gc { "Yes" } else { "No" });
    println!(
        "Speakers: {}/{} ({}%)",
        intern.speakers_count,
        intern.speakers_target,
        intern.speakers_progress()
    );
    println!("Performance: {}", intern.performance.display_name());
    println!(
        "Segregation: {}",
        intern
            .segregation
            .map(|s| s.display_name())
            .unwrap_or("(none)")
    );
    println!("Sheet status: {}", intern.sheet_status.display_name());
    if intern.sheet_status == SheetStatus::Black {
        println!("Data repurposed: {}", intern.data_repurposed.display_name());
    }
}

/// Resolve an intern by query, build a change, and run it through the
/// update op. Prints the resulting sheet status so derived transitions are
/// visible at the prompt.
fn apply(
    ctx: &mut CLIContext,
    args: &str,
    change_for: impl FnOnce(&CLIContext, &Intern) -> Option<InternChange>,
) {
    let intern = match ctx.find_intern(args) {
        Some(i) => i,
        None => return,
    };
    let change = match change_for(ctx, &intern) {
        Some(c) => c,
        None => return,
    };
    match intern_ops::update_intern(&mut ctx.store, &intern.id, change) {
        Ok(updated) => println!(
            "Updated {} (sheet {}).",
            if updated.name.is_empty() { updated.id.to_string() } else { updated.name.clone() },
            updated.sheet_status.display_name()
        ),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn edit_name(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        ctx.prompt("New name: ").map(InternChange::Name)
    });
}

pub fn edit_email(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        ctx.prompt("New email: ").map(InternChange::Email)
    });
}

pub fn edit_activity(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        let input = ctx.prompt("Activity (active/inactive/leave): ")?;
        match ActivityStatus::parse(&input) {
            Some(status) => Some(InternChange::Activity(status)),
            None => {
                println!("Unknown activity status.");
                None
            }
        }
    });
}

pub fn edit_excel(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        let input = ctx.prompt("Excel submitted (yes/no): ")?;
        match YesNo::parse(&input) {
            Some(value) => Some(InternChange::ExcelSubmitted(value)),
            None => {
                println!("Answer yes or no.");
                None
            }
        }
    });
}

pub fn edit_speakers(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, intern| {
        let input = ctx.prompt(&format!(
            "Speakers count (now {}, target {}): ",
            intern.speakers_count, intern.speakers_target
        ))?;
        Some(InternChange::SpeakersCount(validation::lenient_count(&input)))
    });
}

pub fn edit_performance(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        let input = ctx.prompt("Performance (good/weak): ")?;
        match Performance::parse(&input) {
            Some(performance) => Some(InternChange::Performance(performance)),
            None => {
                println!("Unknown performance.");
                None
            }
        }
    });
}

pub fn edit_segregation(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        let input = ctx.prompt("Segregation (resign/warning/terminated/relocated/none): ")?;
        if input.eq_ignore_ascii_case("none") || input.is_empty() {
            return Some(InternChange::Segregation(None));
        }
        match Segregation::parse(&input) {
            Some(segregation) => Some(InternChange::Segregation(Some(segregation))),
            None => {
                println!("Unknown segregation.");
                None
            }
        }
    });
}

pub fn edit_sheet(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        let input = ctx.prompt("Sheet status (green/red/black): ")?;
        match SheetStatus::parse(&input) {
            Some(status) => Some(InternChange::SheetStatus(status)),
            None => {
                println!("Unknown sheet status.");
                None
            }
        }
    });
}

pub fn edit_repurposed(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |ctx, _| {
        let input = ctx.prompt("Data repurposed (yes/no): ")?;
        match YesNo::parse(&input) {
            Some(value) => Some(InternChange::DataRepurposed(value)),
            None => {
                println!("Answer yes or no.");
                None
            }
        }
    });
}

pub fn toggle_ai_chat(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |_, intern| {
        Some(InternChange::AiChatAdded(!intern.ai_chat_added))
    });
}

pub fn toggle_data_mining(ctx: &mut CLIContext, args: &str) {
    apply(ctx, args, |_, intern| {
        Some(InternChange::DataMiningGc(!intern.data_mining_gc))
    });
}

pub fn summary(ctx: &CLIContext) {
    let summary = summary_queries::tracker_summary(ctx.store.interns());
    println!("Interns: {}", summary.total);
    println!(
        "  Sheet:       {} green / {} red / {} black",
        summary.green, summary.red, summary.black
    );
    println!(
        "  Activity:    {} active / {} inactive",
        summary.active, summary.inactive
    );
    println!(
        "  Excel:       {} yes / {} no",
        summary.excel_yes, summary.excel_no
    );
    println!(
        "  Performance: {} good / {} weak",
        summary.good, summary.weak
    );
    println!(
        "  Repurposed:  {} yes / {} no",
        summary.repurposed_yes, summary.repurposed_no
    );
    println!("  Tasks completed: {}", summary.tasks_completed);
}

pub fn export(ctx: &CLIContext, args: &str) {
    let rows = view_queries::filtered_interns(ctx.store.interns(), &ctx.intern_view);
    let path = if args.trim().is_empty() {
        export::export_file_name(CLIContext::today())
    } else {
        args.trim().to_string()
    };

    let document = match export::intern_csv(&rows) {
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
